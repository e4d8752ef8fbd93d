use std::cell::Cell;

use crate::app::Config;
use crate::chat::{Button, Message, Session};

use super::theme::Theme;

/// Application state
pub struct App {
    /// The open conversation
    pub session: Session,
    /// Is the app running?
    pub running: bool,
    /// Index into the active button list
    pub selected_button: usize,
    /// Scroll offset for chat view, counted up from the bottom
    pub scroll_offset: u16,
    /// Show chart pane
    pub show_charts: bool,
    /// Show button ids next to labels
    pub show_button_ids: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Active color theme
    pub theme: Theme,
    echo_selections: bool,
    /// Wrapped chat rows that did not fit at the last draw
    chat_overflow: Cell<u16>,
}

impl App {
    /// Create a new app instance with an opened session
    pub fn new(config: &Config) -> Self {
        let mut session = Session::new().with_echo(config.chat.echo_selections);
        session.open();

        Self {
            session,
            running: true,
            selected_button: 0,
            scroll_offset: 0,
            show_charts: config.ui.show_charts,
            show_button_ids: config.ui.show_button_ids,
            status_message: None,
            theme: Theme::by_name(&config.ui.theme),
            echo_selections: config.chat.echo_selections,
            chat_overflow: Cell::new(0),
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.session.messages()
    }

    pub fn active_buttons(&self) -> &[Button] {
        self.session.active_buttons()
    }

    /// Move the button cursor right, wrapping around
    pub fn select_next(&mut self) {
        let count = self.active_buttons().len();
        if count > 0 {
            self.selected_button = (self.selected_button + 1) % count;
        }
    }

    /// Move the button cursor left, wrapping around
    pub fn select_prev(&mut self) {
        let count = self.active_buttons().len();
        if count > 0 {
            self.selected_button = (self.selected_button + count - 1) % count;
        }
    }

    /// Press the button under the cursor
    pub fn press_selected(&mut self) {
        self.press_index(self.selected_button);
    }

    /// Press the n-th active button (0-based)
    pub fn press_index(&mut self, index: usize) {
        let Some(button) = self.active_buttons().get(index).copied() else {
            return;
        };

        if self.session.press(button.id) == 0 {
            self.set_status(format!("'{}' is not available here", button.label));
            return;
        }

        self.selected_button = 0;
        // Auto-scroll to bottom
        self.scroll_offset = 0;
        self.clear_status();
    }

    /// Close the panel and open a fresh one; history is not kept
    pub fn restart_session(&mut self) {
        self.session.close();
        self.session = Session::new().with_echo(self.echo_selections);
        self.session.open();
        self.selected_button = 0;
        self.scroll_offset = 0;
        self.set_status("New session started");
    }

    pub fn toggle_charts(&mut self) {
        self.show_charts = !self.show_charts;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Scroll chat view up (towards older messages)
    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll_offset = self
            .scroll_offset
            .saturating_add(amount)
            .min(self.chat_overflow.get());
    }

    /// Scroll chat view down (towards newer messages)
    pub fn scroll_down(&mut self, amount: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// How far the chat view can scroll up, as measured by the last draw
    pub fn chat_overflow(&self) -> u16 {
        self.chat_overflow.get()
    }

    pub(super) fn set_chat_overflow(&self, rows: u16) {
        self.chat_overflow.set(rows);
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ConversationState;

    #[test]
    fn test_new_app_has_greeting() {
        let app = App::new(&Config::default());
        assert_eq!(app.messages().len(), 1);
        assert_eq!(app.active_buttons().len(), 5);
        assert!(app.running);
    }

    #[test]
    fn test_button_cursor_wraps() {
        let mut app = App::new(&Config::default());
        app.select_prev();
        assert_eq!(app.selected_button, 4);
        app.select_next();
        assert_eq!(app.selected_button, 0);
    }

    #[test]
    fn test_press_by_index_walks_the_menu() {
        let mut app = App::new(&Config::default());
        app.press_index(2); // region
        assert_eq!(app.session.state(), ConversationState::Region);
        app.press_index(1); // gyeonggi
        assert!(app.messages().iter().any(|m| m.text.contains("+7.4만원 높은 수준")));
        app.press_index(42);
        assert_eq!(app.session.state(), ConversationState::Region);
    }

    #[test]
    fn test_restart_session() {
        let mut app = App::new(&Config::default());
        app.press_index(0);
        assert!(app.messages().len() > 1);
        app.restart_session();
        assert_eq!(app.messages().len(), 1);
        assert_eq!(app.session.state(), ConversationState::MainMenu);
    }

    #[test]
    fn test_scroll_up_stops_at_overflow() {
        let mut app = App::new(&Config::default());
        app.scroll_up(5);
        assert_eq!(app.scroll_offset, 0);

        app.set_chat_overflow(7);
        app.scroll_up(5);
        app.scroll_up(5);
        assert_eq!(app.scroll_offset, 7);
        app.scroll_down(3);
        assert_eq!(app.scroll_offset, 4);
    }
}
