use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::info;

use crate::constants::{UI_PAGE_SCROLL_LINES, UI_REFRESH_INTERVAL_MS};
use crate::tui::render::render_ui;
use crate::tui::App;
use crate::utils::StatbotError;

/// Run the terminal UI
pub async fn run_ui(mut app: App) -> Result<()> {
    // Check if we have an interactive terminal
    if !crossterm::tty::IsTty::is_tty(&io::stdout()) {
        return Err(StatbotError::UIError(
            "an interactive terminal is required; use --press for scripted runs".to_string(),
        )
        .into());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    info!("interactive session started");
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(messages = app.messages().len(), "interactive session ended");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(Duration::from_millis(UI_REFRESH_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }
    }

    Ok(())
}

/// Map a key press onto the app; every button press funnels through here
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Left | KeyCode::Up => app.select_prev(),
        KeyCode::Right | KeyCode::Down | KeyCode::Tab => app.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.press_selected(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.press_index(index);
        }
        KeyCode::PageUp => app.scroll_up(UI_PAGE_SCROLL_LINES),
        KeyCode::PageDown => app.scroll_down(UI_PAGE_SCROLL_LINES),
        KeyCode::Char('c') => app.toggle_charts(),
        KeyCode::Char('n') => app.restart_session(),
        _ => {}
    }
}
