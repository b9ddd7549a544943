//! ASCII logos, one per screen.

use golive_core::ScreenKey;
use ratatui::{prelude::*, widgets::Paragraph};

const ROOT_LOGO: &[&str] = &[
    "   ______      __    _",
    "  / ____/___  / /   (_)   _____",
    " / / __/ __ \\/ /   / / | / / _ \\",
    "/ /_/ / /_/ / /___/ /| |/ /  __/",
    "\\____/\\____/_____/_/ |___/\\___/",
];

const LIVE_LOGO: &[&str] = &[
    "    ____             __",
    "   / __ \\___  ____  / /___  __  __",
    "  / / / / _ \\/ __ \\/ / __ \\/ / / /",
    " / /_/ /  __/ /_/ / / /_/ / /_/ /",
    "/_____/\\___/ .___/_/\\____/\\__, /",
    "          /_/            /____/",
];

const UTILS_LOGO: &[&str] = &[
    "   __  ____  _ __",
    "  / / / / /_(_) /____",
    " / / / / __/ / / ___/",
    "/ /_/ / /_/ / (__  )",
    "\\____/\\__/_/_/____/",
];

/// Logo lines for a screen.
pub fn logo_lines(key: ScreenKey) -> &'static [&'static str] {
    match key {
        ScreenKey::Root => ROOT_LOGO,
        ScreenKey::Live => LIVE_LOGO,
        ScreenKey::Utils => UTILS_LOGO,
    }
}

/// Rows needed to draw the tallest logo.
pub fn logo_height() -> u16 {
    [ROOT_LOGO.len(), LIVE_LOGO.len(), UTILS_LOGO.len()]
        .into_iter()
        .max()
        .unwrap_or(0) as u16
}

/// Renders the logo for `key`, left aligned.
pub fn render_logo(frame: &mut Frame, area: Rect, key: ScreenKey) {
    let theme = crate::theme::get_theme();
    let lines: Vec<Line> = logo_lines(key)
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(theme.logo))))
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
