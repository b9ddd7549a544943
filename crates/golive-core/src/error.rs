//! Error types for GoLive navigation.

use thiserror::Error;

use crate::screen::ScreenKey;

/// Errors raised by the screen registry and the navigator.
///
/// None of these are meant to reach the operator as a visible failure:
/// registry errors stop the program at startup, the rest degrade to a no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// An entry index outside the active screen's entries.
    #[error("entry index {index} out of range for screen '{screen}' ({len} entries)")]
    OutOfRange {
        screen: ScreenKey,
        index: usize,
        len: usize,
    },

    /// A screen key has no registry row, or an entry targets such a key.
    #[error("screen '{0}' is not registered")]
    UnknownScreenKey(ScreenKey),

    /// Two registry rows share the same key.
    #[error("screen '{0}' is registered more than once")]
    DuplicateScreen(ScreenKey),

    /// A registered screen has nothing to select.
    #[error("screen '{0}' has no entries")]
    EmptyScreen(ScreenKey),

    /// An action result arrived for a screen instance that is no longer active.
    #[error("stale result for screen '{screen}' (instance {instance})")]
    StaleActionResult { screen: ScreenKey, instance: u64 },
}

/// Result type alias for navigation operations.
pub type Result<T> = std::result::Result<T, NavError>;
