use tracing::info;

use super::catalog::{self, Button};
use super::machine::{self, ConversationState};
use super::message::Message;
use super::tables::Subject;

/// One open conversation panel: current state, remembered subject and the
/// append-only message log
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: ConversationState,
    selection: Option<Subject>,
    log: Vec<Message>,
    echo_selections: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also append the pressed button's label as a user turn
    pub fn with_echo(mut self, echo_selections: bool) -> Self {
        self.echo_selections = echo_selections;
        self
    }

    /// Emit the greeting; a no-op once the log has content
    pub fn open(&mut self) {
        if !self.log.is_empty() {
            return;
        }
        let t = machine::open();
        self.state = t.state;
        self.selection = t.selection;
        self.log.extend(t.messages);
        info!("session opened");
    }

    /// Feed one button press through the state machine.
    ///
    /// Returns the number of messages appended, `0` if the input was ignored.
    pub fn press(&mut self, button_id: &str) -> usize {
        let Some(t) = machine::transition(self.state, self.selection, button_id) else {
            return 0;
        };

        let before = self.log.len();
        if self.echo_selections {
            let label = catalog::find(button_id)
                .map(|b| b.label.to_string())
                .unwrap_or_else(|| button_id.to_string());
            self.log.push(Message::user(label));
        }
        self.state = t.state;
        self.selection = t.selection;
        self.log.extend(t.messages);
        self.log.len() - before
    }

    /// Discard all history; the next `open` starts from scratch
    pub fn close(&mut self) {
        info!(messages = self.log.len(), "session closed");
        self.state = ConversationState::Initial;
        self.selection = None;
        self.log.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.log
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn selection(&self) -> Option<Subject> {
        self.selection
    }

    /// Buttons of the most recent message that carries any
    pub fn active_buttons(&self) -> &[Button] {
        self.log
            .iter()
            .rev()
            .find(|m| m.has_buttons())
            .map(|m| m.buttons.as_slice())
            .unwrap_or(&[])
    }

    /// Most recent message carrying a chart
    pub fn latest_chart(&self) -> Option<&Message> {
        self.log.iter().rev().find(|m| m.chart.is_some())
    }
}
