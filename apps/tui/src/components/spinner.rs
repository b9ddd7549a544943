//! Spinner frames for actions that are waiting on something.

/// Braille spinner frames.
pub const BRAILLE: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Frame to show on render cycle `tick`.
pub fn spinner_frame(tick: usize) -> &'static str {
    BRAILLE[tick % BRAILLE.len()]
}
