//! Help footer: one-line key hints, or every binding in columns.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::keymap::{self, KeyBinding};

/// Height the footer needs for the given mode.
pub fn help_height(show_all: bool, table_focused: bool) -> u16 {
    if show_all {
        keymap::full_help(table_focused)
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(1) as u16
    } else {
        1
    }
}

fn binding_spans(binding: &KeyBinding) -> [Span<'static>; 2] {
    let theme = crate::theme::get_theme();
    [
        Span::styled(binding.keys, Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {}", binding.help), Style::default().fg(theme.text_muted)),
    ]
}

/// Renders the help footer.
pub fn render_help_footer(frame: &mut Frame, area: Rect, show_all: bool, table_focused: bool) {
    let theme = crate::theme::get_theme();
    let separator = Span::styled(" • ", Style::default().fg(theme.border));

    if !show_all {
        let mut spans = Vec::new();
        for (i, binding) in keymap::short_help().iter().enumerate() {
            if i > 0 {
                spans.push(separator.clone());
            }
            spans.extend(binding_spans(binding));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
        return;
    }

    let columns = keymap::full_help(table_focused);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(columns.iter().map(|_| Constraint::Length(24)))
        .split(area);

    for (column, chunk) in columns.iter().zip(chunks.iter()) {
        let lines: Vec<Line> = column
            .iter()
            .map(|binding| Line::from(binding_spans(binding).to_vec()))
            .collect();
        frame.render_widget(Paragraph::new(lines), *chunk);
    }
}
