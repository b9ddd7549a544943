//! Key bindings and help text.

use crossterm::event::{KeyCode, KeyModifiers};
use golive_core::InputEvent;

/// What a key press means to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Up,
    Down,
    Select,
    Back,
    ToggleHelp,
    Quit,
    /// Leave a focused widget (the table) without leaving the screen.
    Blur,
}

impl KeyAction {
    /// The navigator event for this action, if it has one.
    pub fn input_event(self) -> Option<InputEvent> {
        match self {
            KeyAction::Up => Some(InputEvent::Up),
            KeyAction::Down => Some(InputEvent::Down),
            KeyAction::Select => Some(InputEvent::Select),
            KeyAction::Back => Some(InputEvent::Back),
            KeyAction::ToggleHelp => Some(InputEvent::ToggleHelp),
            KeyAction::Quit => Some(InputEvent::Quit),
            KeyAction::Blur => None,
        }
    }
}

/// A documented key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub keys: &'static str,
    pub help: &'static str,
}

const fn binding(keys: &'static str, help: &'static str) -> KeyBinding {
    KeyBinding { keys, help }
}

pub const UP: KeyBinding = binding("↑/k", "move up");
pub const DOWN: KeyBinding = binding("↓/j", "move down");
pub const SELECT: KeyBinding = binding("⏎/⌴", "confirm selection");
pub const BACK: KeyBinding = binding("esc", "go back");
pub const HELP: KeyBinding = binding("?", "toggle help");
pub const QUIT: KeyBinding = binding("q", "quit");
pub const BLUR: KeyBinding = binding("⌫/alt+←", "leave table");

/// Resolve a key press into an action.
pub fn resolve(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(KeyAction::Quit),
        KeyCode::Left if modifiers.contains(KeyModifiers::ALT) => Some(KeyAction::Blur),
        _ if modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::Select),
        KeyCode::Esc => Some(KeyAction::Back),
        KeyCode::Char('?') => Some(KeyAction::ToggleHelp),
        KeyCode::Char('q') => Some(KeyAction::Quit),
        KeyCode::Backspace => Some(KeyAction::Blur),
        _ => None,
    }
}

/// Bindings shown in the one-line footer.
pub fn short_help() -> [KeyBinding; 3] {
    [HELP, QUIT, BACK]
}

/// Bindings shown when help is expanded, one inner array per column.
pub fn full_help(table_focused: bool) -> Vec<Vec<KeyBinding>> {
    let mut columns = vec![vec![UP, DOWN, SELECT], vec![HELP, QUIT, BACK]];
    if table_focused {
        columns.push(vec![BLUR]);
    }
    columns
}
