//! Color theme system for GoLive TUI.

use ratatui::style::Color;
use std::sync::{Mutex, OnceLock, PoisonError};

/// GoLive TUI color theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoLiveTheme {
    // Brand colors
    pub logo: Color,
    pub active: Color,

    // Status colors
    pub checked: Color,
    pub success: Color,
    pub error: Color,

    // Text colors
    pub text: Color,
    pub text_muted: Color,

    // Background and borders
    pub bg_element: Color,
    pub border: Color,

    // Progress gradient
    pub gauge_start: Color,
    pub gauge_end: Color,
}

impl Default for GoLiveTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl GoLiveTheme {
    /// Pick a preset by name; unknown names fall back to dark.
    pub fn from_preset(preset: &str) -> Self {
        match preset.to_lowercase().as_str() {
            "light" => Self::light(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!(preset = other, "unknown theme preset, using dark");
                Self::dark()
            }
        }
    }

    /// Creates the default dark theme.
    pub fn dark() -> Self {
        Self {
            logo: Color::Rgb(1, 250, 198),     // #01FAC6
            active: Color::Rgb(255, 110, 129), // #FF6E81

            checked: Color::Rgb(0, 197, 122), // #00C57A
            success: Color::Rgb(16, 185, 129),
            error: Color::Rgb(239, 68, 68),

            text: Color::Rgb(239, 237, 255),       // #EFEDFF
            text_muted: Color::Rgb(128, 128, 128), // #808080

            bg_element: Color::Rgb(30, 30, 30),
            border: Color::Rgb(68, 71, 90),

            gauge_start: Color::Rgb(106, 96, 148), // #6A6094
            gauge_end: Color::Rgb(255, 110, 129),  // #FF6E81
        }
    }

    /// Creates a light theme.
    pub fn light() -> Self {
        Self {
            logo: Color::Rgb(0, 150, 136),
            active: Color::Rgb(214, 51, 108),

            checked: Color::Rgb(0, 140, 86),
            success: Color::Rgb(5, 150, 105),
            error: Color::Rgb(220, 38, 38),

            text: Color::Rgb(36, 41, 47),
            text_muted: Color::Rgb(110, 119, 129),

            bg_element: Color::Rgb(234, 238, 242),
            border: Color::Rgb(208, 215, 222),

            gauge_start: Color::Rgb(106, 96, 148),
            gauge_end: Color::Rgb(214, 51, 108),
        }
    }

    /// Linear blend between the gauge colors, `ratio` in [0, 1].
    pub fn gauge_color(&self, ratio: f64) -> Color {
        match (self.gauge_start, self.gauge_end) {
            (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
                let t = ratio.clamp(0.0, 1.0);
                let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
                Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
            }
            _ => self.gauge_end,
        }
    }
}

/// Global theme instance.
static THEME_INSTANCE: OnceLock<Mutex<GoLiveTheme>> = OnceLock::new();

fn get_theme_instance() -> &'static Mutex<GoLiveTheme> {
    THEME_INSTANCE.get_or_init(|| Mutex::new(GoLiveTheme::dark()))
}

/// Get the current theme (thread-safe).
pub fn get_theme() -> GoLiveTheme {
    get_theme_instance()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the global theme (called once the config is loaded).
pub fn update_theme(theme: GoLiveTheme) {
    *get_theme_instance()
        .lock()
        .unwrap_or_else(PoisonError::into_inner) = theme;
}
