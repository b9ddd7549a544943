//! The menu screen: logo, title, entries, status line, and the utility
//! widgets when the Utils screen is active.

use golive_core::{EntrySnapshot, ScreenKey, ScreenSnapshot};
use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::components::{logo_height, render_logo};
use crate::views::utilities::render_utilities;

/// Formats one entry row, e.g. `-> [✓] To Staging`.
pub fn entry_text(entry: &EntrySnapshot) -> String {
    let cursor = if entry.selected { "->" } else { "  " };
    if entry.target.has_flag() {
        let checked = if entry.active { "✓" } else { " " };
        format!("{cursor} [{checked}] {}", entry.label)
    } else {
        format!("{cursor} {}", entry.label)
    }
}

fn entry_lines(snapshot: &ScreenSnapshot) -> Vec<Line<'static>> {
    let theme = crate::theme::get_theme();
    snapshot
        .entries
        .iter()
        .map(|entry| {
            let style = if entry.selected {
                Style::default().fg(theme.active).add_modifier(Modifier::BOLD)
            } else if entry.active {
                Style::default().fg(theme.checked)
            } else {
                Style::default().fg(theme.text)
            };
            Line::from(Span::styled(entry_text(entry), style))
        })
        .collect()
}

/// Renders the active screen into `area`.
pub fn render_menu(frame: &mut Frame, area: Rect, app: &mut App) {
    let theme = crate::theme::get_theme();
    let snapshot = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(logo_height() + 1),
            Constraint::Length(2),
            Constraint::Length(snapshot.entries.len() as u16),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    render_logo(frame, chunks[0], snapshot.key);

    let title = Paragraph::new(Span::styled(
        snapshot.title.clone(),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, chunks[1]);

    frame.render_widget(Paragraph::new(entry_lines(&snapshot)), chunks[2]);

    if let Some(message) = &app.status_message {
        let status = Paragraph::new(Span::styled(
            format!("  {message}"),
            Style::default().fg(theme.text_muted),
        ));
        frame.render_widget(status, chunks[3]);
    }

    if snapshot.key == ScreenKey::Utils {
        render_utilities(frame, chunks[4], app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use golive_core::{ActionTag, EntryTarget};

    fn entry(target: EntryTarget, active: bool, selected: bool) -> EntrySnapshot {
        EntrySnapshot { label: "Timer".to_string(), target, active, selected }
    }

    #[test]
    fn test_entry_text_variants() {
        assert_eq!(entry_text(&entry(EntryTarget::Screen(ScreenKey::Live), false, true)), "-> Timer");
        assert_eq!(entry_text(&entry(EntryTarget::Toggle, true, false)), "   [✓] Timer");
        assert_eq!(
            entry_text(&entry(EntryTarget::Switch(ActionTag::Timer), false, true)),
            "-> [ ] Timer"
        );
        assert_eq!(entry_text(&entry(EntryTarget::Action(ActionTag::Ping), false, false)), "   Timer");
    }
}
