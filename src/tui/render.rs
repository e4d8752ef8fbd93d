use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::chat::Role;
use crate::tui::app::App;
use crate::tui::chart::render_chart;

/// Render the main UI
pub fn render_ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Conversation + chart
            Constraint::Length(3), // Buttons
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);

    let chart = app
        .session
        .latest_chart()
        .and_then(|m| m.chart.as_ref())
        .filter(|_| app.show_charts);

    match chart {
        Some(chart) => {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(chunks[1]);
            render_chat(frame, body[0], app);
            render_chart(frame, body[1], chart, &app.theme);
        }
        None => render_chat(frame, chunks[1], app),
    }

    render_buttons(frame, chunks[2], app);
    render_status_bar(frame, chunks[3], app);
}

/// Render the header
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.theme.colors;
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Statbot",
            Style::default()
                .fg(colors.header.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | 사교육비 통계 도우미 | "),
        Span::styled(
            app.session.state().display_name(),
            Style::default().fg(colors.text_secondary.to_color()),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(colors.border.to_color())),
    )
    .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

/// Render the conversation log
fn render_chat(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.theme.colors;
    let mut lines = Vec::new();

    for msg in app.messages() {
        let (role, color) = match msg.role {
            Role::Bot => ("Statbot", colors.bot_message.to_color()),
            Role::User => ("You", colors.user_message.to_color()),
        };

        lines.push(Line::from(Span::styled(
            format!("[{}] ", role),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));

        for line in msg.text.lines() {
            lines.push(Line::styled(
                line.to_string(),
                Style::default().fg(colors.text_primary.to_color()),
            ));
        }

        if let Some(chart) = &msg.chart {
            lines.push(Line::from(Span::styled(
                format!("  [chart] {}", chart.title),
                Style::default()
                    .fg(colors.text_secondary.to_color())
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        lines.push(Line::from(""));
    }

    // Measure rows after wrapping; wide report lines take two or three rows
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let visible = area.height.saturating_sub(2);
    let total = u16::try_from(paragraph.line_count(area.width.saturating_sub(2)))
        .unwrap_or(u16::MAX);
    let overflow = total.saturating_sub(visible);
    app.set_chat_overflow(overflow);

    // Keep the newest messages in view; scroll_offset counts up from the bottom
    let top = overflow.saturating_sub(app.scroll_offset);
    let paragraph = paragraph
        .block(
            Block::default()
                .title(" Chat ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border.to_color())),
        )
        .scroll((top, 0));

    frame.render_widget(paragraph, area);
}

/// Render the active button bar
fn render_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.theme.colors;
    let mut spans = Vec::new();

    for (i, button) in app.active_buttons().iter().enumerate() {
        let style = if i == app.selected_button {
            Style::default()
                .fg(colors.button_selected.to_color())
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(colors.button.to_color())
        };
        let text = if app.show_button_ids {
            format!(" {} {} ({}) ", i + 1, button.label, button.id)
        } else {
            format!(" {} {} ", i + 1, button.label)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }

    let buttons = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border.to_color()))
                .title(" ←/→ select • Enter/1-9 press "),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(buttons, area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.theme.colors;
    let status_text = app.status_message.as_deref().unwrap_or("Ready");

    let spans = vec![
        Span::styled(
            format!(" {} ", app.session.state().display_name()),
            Style::default()
                .bg(colors.header.to_color())
                .fg(colors.status_bar.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::raw(status_text),
        Span::raw(" | "),
        Span::styled(
            "c: charts  n: new session  q: quit",
            Style::default().fg(colors.text_secondary.to_color()),
        ),
    ];

    let status_bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(colors.status_bar.to_color()))
        .block(Block::default());

    frame.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Config;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> Vec<String> {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();

        // One string per row; wide glyphs leave padding cells, so drop whitespace
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect()
            })
            .collect()
    }

    fn on_screen(rows: &[String], text: &str) -> bool {
        let needle: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        rows.iter().any(|row| row.contains(&needle))
    }

    #[test]
    fn test_renders_every_chart_kind() {
        let mut app = App::new(&Config::default());
        draw(&app);

        for path in [
            &["overview"][..],
            &["main-menu", "year-comparison"],
            &["main-menu", "region", "gyeonggi"],
            &["main-menu", "subject", "math", "elementary"],
        ] {
            for id in path {
                app.session.press(id);
            }
            assert!(app.session.latest_chart().is_some());
            draw(&app);
        }
    }

    #[test]
    fn test_newest_message_visible_after_wrapped_reports() {
        let mut app = App::new(&Config::default());
        for id in [
            "overview",
            "main-menu",
            "year-comparison",
            "main-menu",
            "region",
            "gyeonggi",
        ] {
            assert!(app.session.press(id) > 0);
        }

        let rows = draw(&app);
        assert!(on_screen(&rows, "[Statbot] 경기 학교급별 사교육비"));
        assert!(on_screen(&rows, "[chart] 경기 vs 전국 평균 (만원)"));
        assert!(app.chat_overflow() > 0);
    }

    #[test]
    fn test_scroll_is_bounded_by_wrapped_height() {
        let mut app = App::new(&Config::default());
        for id in ["overview", "main-menu", "year-comparison", "main-menu", "region", "gyeonggi"] {
            app.session.press(id);
        }
        draw(&app);

        app.scroll_up(u16::MAX);
        assert_eq!(app.scroll_offset, app.chat_overflow());
        let rows = draw(&app);
        assert!(on_screen(&rows, "[Statbot]"));
        assert!(!on_screen(&rows, "[chart] 경기 vs 전국 평균 (만원)"));

        app.scroll_down(u16::MAX);
        let rows = draw(&app);
        assert!(on_screen(&rows, "[chart] 경기 vs 전국 평균 (만원)"));
    }

    #[test]
    fn test_renders_tiny_terminal() {
        let mut app = App::new(&Config::default());
        app.session.press("school-level");
        app.session.press("elementary");
        let backend = TestBackend::new(20, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_ui(f, &app)).unwrap();
    }
}
