//! Title bar: program name and version on the left, breadcrumb on the right.

use golive_core::ScreenKey;
use ratatui::{prelude::*, widgets::Paragraph};

/// Breadcrumb text for a stack, e.g. "root › utils".
pub fn breadcrumb(stack: &[ScreenKey]) -> String {
    stack
        .iter()
        .map(ScreenKey::as_str)
        .collect::<Vec<_>>()
        .join(" › ")
}

/// Renders the title bar with a bottom rule on its last line.
pub fn render_title_bar(frame: &mut Frame, area: Rect, version: &str, stack: &[ScreenKey]) {
    let theme = crate::theme::get_theme();

    let content_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(16), Constraint::Fill(1)])
        .split(content_area);

    let left = Line::from(vec![
        Span::styled("GoLive", Style::default().fg(theme.logo).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(version, Style::default().fg(theme.text_muted)),
    ]);
    frame.render_widget(Paragraph::new(left).alignment(Alignment::Left), chunks[0]);

    let right = Span::styled(breadcrumb(stack), Style::default().fg(theme.text));
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), chunks[1]);

    let border_y = area.bottom().saturating_sub(1);
    if area.height > 0 {
        for x in area.left()..area.right() {
            if let Some(cell) = frame.buffer_mut().cell_mut((x, border_y)) {
                cell.set_char('─');
                cell.set_style(Style::default().fg(theme.border));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadcrumb() {
        assert_eq!(breadcrumb(&[ScreenKey::Root]), "root");
        assert_eq!(breadcrumb(&[ScreenKey::Root, ScreenKey::Utils]), "root › utils");
    }
}
