//! Splash screen for GoLive TUI startup.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::components::logo::logo_lines;
use golive_core::ScreenKey;

/// Render the splash screen.
pub fn render_splash(frame: &mut Frame, area: Rect, message: &str) {
    let theme = crate::theme::get_theme();
    let logo = logo_lines(ScreenKey::Root);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(logo.len() as u16 + 3),
            Constraint::Percentage(35),
        ])
        .split(area);

    let mut lines: Vec<Line> = logo
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(theme.logo))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("deploy navigator", Style::default().fg(theme.active))));
    lines.push(Line::from(Span::styled(message, Style::default().fg(theme.text_muted))));

    let splash = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    frame.render_widget(splash, chunks[1]);
}
