//! Global layout structure for the TUI application.
//!
//! - Title bar (fixed, height 2): name, version, breadcrumb
//! - Main area (flexible): the active screen
//! - Footer (sized to the help text)

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Global layout structure for the TUI
pub struct GlobalLayout;

impl GlobalLayout {
    /// Creates the base three-tier vertical layout
    pub fn create(area: Rect, footer_height: u16) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),             // Title bar (1 line + rule)
                Constraint::Min(0),                // Main area (flexible)
                Constraint::Length(footer_height), // Help footer
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2]]
    }

    /// Area inside a uniform margin.
    pub fn padded(area: Rect, padding: u16) -> Rect {
        Rect {
            x: area.x + padding.min(area.width / 2),
            y: area.y + padding.min(area.height / 2),
            width: area.width.saturating_sub(padding * 2),
            height: area.height.saturating_sub(padding * 2),
        }
    }
}
