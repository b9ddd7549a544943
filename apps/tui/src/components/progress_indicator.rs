//! Progress indicator component using ratatui Gauge widget.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge},
};

/// Renders a bordered progress gauge whose fill color follows the theme gradient.
pub fn render_progress_gauge(frame: &mut Frame, area: Rect, label: &str, progress: f64) {
    let theme = crate::theme::get_theme();
    let progress = progress.clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(label),
        )
        .gauge_style(
            Style::default()
                .fg(theme.gauge_color(progress))
                .bg(theme.bg_element),
        )
        .ratio(progress)
        .label(format!("{:.0}%", progress * 100.0));

    frame.render_widget(gauge, area);
}
