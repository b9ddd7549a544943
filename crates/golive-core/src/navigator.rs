//! Screen navigator.
//!
//! Owns the single [`NavigationState`] of the program: a stack of screen frames
//! from root to the active screen plus the cursor and flags of every registered
//! screen. Input is turned into a [`NavigationEffect`] by
//! [`Navigator::handle_input`] and committed with [`Navigator::apply`]. The
//! navigator performs no I/O; action entries come back to the host as
//! [`NavigationEffect::Dispatch`] and their results are checked against an
//! [`ActionTicket`] before they may touch the screen that requested them.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::error::{NavError, Result};
use crate::screen::{ActionTag, Entry, EntryTarget, ScreenKey, ScreenRegistry};

/// Abstract key events. The navigator consumes `Up`, `Down`, `Select` and
/// `Back`; the others are host-level signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Up,
    Down,
    Select,
    Back,
    ToggleHelp,
    Quit,
}

/// A requested change to the navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEffect {
    /// Move the active screen's cursor, clamped to its entries.
    MoveCursor(isize),
    /// Descend into a child screen.
    Push(ScreenKey),
    /// Return to the parent screen.
    Pop,
    /// Flip the flag of an entry on the active screen.
    Toggle(usize),
    /// Hand an action entry to the host. When `latch` is set the entry's flag
    /// flips as well.
    Dispatch {
        index: usize,
        tag: ActionTag,
        latch: bool,
    },
    Noop,
}

/// Per-screen state kept while the screen is off the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    cursor: usize,
    flags: Vec<bool>,
}

impl Screen {
    fn new(len: usize) -> Self {
        Self { cursor: 0, flags: vec![false; len] }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    fn move_cursor(&mut self, delta: isize) -> bool {
        let last = self.len().saturating_sub(1) as isize;
        let next = (self.cursor as isize).saturating_add(delta).clamp(0, last) as usize;
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }
}

/// One element of the screen stack. `instance` is unique per push, so leaving
/// and re-entering a screen yields a different identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    key: ScreenKey,
    instance: u64,
}

/// The whole mutable UI state of the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    stack: Vec<Frame>,
    screens: BTreeMap<ScreenKey, Screen>,
}

impl NavigationState {
    /// Screen keys from root to the active screen.
    pub fn stack(&self) -> Vec<ScreenKey> {
        self.stack.iter().map(|frame| frame.key).collect()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn screen(&self, key: ScreenKey) -> Option<&Screen> {
        self.screens.get(&key)
    }

    fn top(&self) -> Frame {
        // The root frame is pushed at construction and never popped.
        self.stack[self.stack.len() - 1]
    }

    fn on_stack(&self, key: ScreenKey) -> bool {
        self.stack.iter().any(|frame| frame.key == key)
    }
}

/// Identity of the screen instance that dispatched an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionTicket {
    pub screen: ScreenKey,
    pub instance: u64,
    pub tag: ActionTag,
}

/// Read-only view of one entry for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySnapshot {
    pub label: String,
    pub target: EntryTarget,
    pub active: bool,
    pub selected: bool,
}

/// Read-only view of the active screen for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSnapshot {
    pub key: ScreenKey,
    pub title: String,
    pub cursor: usize,
    pub breadcrumb: Vec<ScreenKey>,
    pub entries: Vec<EntrySnapshot>,
}

impl ScreenSnapshot {
    pub fn depth(&self) -> usize {
        self.breadcrumb.len()
    }
}

/// Drives the screen stack.
#[derive(Debug, Clone)]
pub struct Navigator {
    registry: ScreenRegistry,
    state: NavigationState,
    next_instance: u64,
}

impl Navigator {
    /// Validates the registry and starts at the root screen.
    pub fn new(registry: ScreenRegistry) -> Result<Self> {
        registry.validate()?;

        let screens = registry
            .specs()
            .iter()
            .map(|spec| (spec.key, Screen::new(spec.entries.len())))
            .collect();

        Ok(Self {
            registry,
            state: NavigationState {
                stack: vec![Frame { key: ScreenKey::Root, instance: 0 }],
                screens,
            },
            next_instance: 1,
        })
    }

    /// Navigator over [`ScreenRegistry::standard`].
    pub fn standard() -> Result<Self> {
        Self::new(ScreenRegistry::standard())
    }

    /// Key of the active screen.
    pub fn current(&self) -> ScreenKey {
        self.state.top().key
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn registry(&self) -> &ScreenRegistry {
        &self.registry
    }

    /// Translates an input event into an effect without changing any state.
    pub fn handle_input(&self, event: InputEvent) -> NavigationEffect {
        match event {
            InputEvent::Up => NavigationEffect::MoveCursor(-1),
            InputEvent::Down => NavigationEffect::MoveCursor(1),
            InputEvent::Select => {
                let cursor = self.active_screen().cursor;
                self.select(cursor).unwrap_or_else(|err| {
                    debug!(error = %err, "select ignored");
                    NavigationEffect::Noop
                })
            }
            InputEvent::Back => {
                if self.can_go_back() {
                    NavigationEffect::Pop
                } else {
                    NavigationEffect::Noop
                }
            }
            InputEvent::ToggleHelp | InputEvent::Quit => NavigationEffect::Noop,
        }
    }

    /// Whether there is a parent screen to return to.
    pub fn can_go_back(&self) -> bool {
        self.state.depth() > 1
    }

    /// Resolves the entry at `index` of the active screen.
    pub fn select(&self, index: usize) -> Result<NavigationEffect> {
        let key = self.current();
        let entries = self.entries(key);
        let entry = entries.get(index).ok_or(NavError::OutOfRange {
            screen: key,
            index,
            len: entries.len(),
        })?;

        Ok(match entry.target {
            EntryTarget::Screen(child) => NavigationEffect::Push(child),
            EntryTarget::Toggle => NavigationEffect::Toggle(index),
            EntryTarget::Action(tag) => NavigationEffect::Dispatch { index, tag, latch: false },
            EntryTarget::Switch(tag) => NavigationEffect::Dispatch { index, tag, latch: true },
        })
    }

    /// Commits an effect. Returns whether the state changed.
    pub fn apply(&mut self, effect: NavigationEffect) -> bool {
        trace!(?effect, screen = %self.current(), "apply");
        match effect {
            NavigationEffect::MoveCursor(delta) => self.active_screen_mut().move_cursor(delta),
            NavigationEffect::Push(key) => self.push(key),
            NavigationEffect::Pop => self.pop(),
            NavigationEffect::Toggle(index) | NavigationEffect::Dispatch { index, latch: true, .. } => {
                self.flip(index)
            }
            NavigationEffect::Dispatch { latch: false, .. } | NavigationEffect::Noop => false,
        }
    }

    /// Convenience for `apply(handle_input(event))`; returns the effect.
    pub fn step(&mut self, event: InputEvent) -> NavigationEffect {
        let effect = self.handle_input(event);
        self.apply(effect);
        effect
    }

    /// Sets an entry flag on the active screen.
    pub fn set_active(&mut self, index: usize, active: bool) -> Result<bool> {
        let screen = self.current();
        let state = self.active_screen_mut();
        let len = state.len();
        let flag = state
            .flags
            .get_mut(index)
            .ok_or(NavError::OutOfRange { screen, index, len })?;
        let changed = *flag != active;
        *flag = active;
        Ok(changed)
    }

    /// Whether the entry at `index` of the active screen is flagged.
    pub fn is_active(&self, index: usize) -> bool {
        self.active_screen().is_active(index)
    }

    /// Index of the entry on the active screen bound to `tag`, if any.
    pub fn position_of(&self, tag: ActionTag) -> Option<usize> {
        self.entries(self.current()).iter().position(|entry| {
            matches!(entry.target, EntryTarget::Action(t) | EntryTarget::Switch(t) if t == tag)
        })
    }

    /// Captures the active screen instance for an outgoing action.
    pub fn ticket(&self, tag: ActionTag) -> ActionTicket {
        let top = self.state.top();
        ActionTicket { screen: top.key, instance: top.instance, tag }
    }

    /// Accepts a result only while the dispatching screen instance is active.
    pub fn admit(&self, ticket: &ActionTicket) -> Result<()> {
        let top = self.state.top();
        if top.key == ticket.screen && top.instance == ticket.instance {
            Ok(())
        } else {
            Err(NavError::StaleActionResult { screen: ticket.screen, instance: ticket.instance })
        }
    }

    /// Read-only view of the active screen.
    pub fn snapshot(&self) -> ScreenSnapshot {
        let key = self.current();
        let screen = self.active_screen();
        let (title, entries) = self
            .registry
            .get(key)
            .map(|spec| (spec.title.clone(), spec.entries.as_slice()))
            .unwrap_or_default();

        ScreenSnapshot {
            key,
            title,
            cursor: screen.cursor,
            breadcrumb: self.state.stack(),
            entries: entries
                .iter()
                .enumerate()
                .map(|(i, entry)| EntrySnapshot {
                    label: entry.label.clone(),
                    target: entry.target,
                    active: screen.is_active(i),
                    selected: i == screen.cursor,
                })
                .collect(),
        }
    }

    fn push(&mut self, key: ScreenKey) -> bool {
        if !self.registry.contains(key) {
            debug!(screen = %key, "push ignored: unregistered screen");
            return false;
        }
        if self.state.on_stack(key) {
            debug!(screen = %key, "push ignored: screen already on stack");
            return false;
        }

        let instance = self.next_instance;
        self.next_instance += 1;
        self.state.stack.push(Frame { key, instance });
        debug!(screen = %key, instance, depth = self.state.depth(), "pushed screen");
        true
    }

    fn pop(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.state
            .stack
            .pop()
            .inspect(|frame| debug!(screen = %frame.key, depth = self.state.depth(), "popped screen"))
            .is_some()
    }

    fn flip(&mut self, index: usize) -> bool {
        let screen = self.current();
        let state = self.active_screen_mut();
        match state.flags.get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                debug!(%screen, index, active = *flag, "toggled entry");
                true
            }
            None => {
                debug!(%screen, index, "toggle ignored: index out of range");
                false
            }
        }
    }

    fn entries(&self, key: ScreenKey) -> &[Entry] {
        self.registry.get(key).map_or(&[][..], |spec| spec.entries.as_slice())
    }

    fn active_screen(&self) -> &Screen {
        // Navigator::new builds a Screen for every registered key and only
        // registered keys are pushed.
        &self.state.screens[&self.current()]
    }

    fn active_screen_mut(&mut self) -> &mut Screen {
        let key = self.current();
        self.state
            .screens
            .get_mut(&key)
            .unwrap_or_else(|| unreachable!("no state for registered screen {key}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> Navigator {
        Navigator::standard().expect("standard registry is valid")
    }

    #[test]
    fn test_starts_at_root() {
        let nav = nav();
        assert_eq!(nav.current(), ScreenKey::Root);
        assert_eq!(nav.state().stack(), vec![ScreenKey::Root]);
    }

    #[test]
    fn test_cursor_clamps() {
        let mut nav = nav();
        assert!(!nav.apply(NavigationEffect::MoveCursor(-1)));
        assert_eq!(nav.snapshot().cursor, 0);

        assert!(nav.apply(NavigationEffect::MoveCursor(1)));
        assert!(!nav.apply(NavigationEffect::MoveCursor(1)));
        assert_eq!(nav.snapshot().cursor, 1);

        nav.apply(NavigationEffect::MoveCursor(isize::MIN));
        assert_eq!(nav.snapshot().cursor, 0);
    }

    #[test]
    fn test_select_resolves_targets() {
        let mut nav = nav();
        assert_eq!(nav.select(0), Ok(NavigationEffect::Push(ScreenKey::Live)));
        assert_eq!(nav.select(1), Ok(NavigationEffect::Push(ScreenKey::Utils)));

        nav.apply(NavigationEffect::Push(ScreenKey::Utils));
        assert_eq!(
            nav.select(0),
            Ok(NavigationEffect::Dispatch { index: 0, tag: ActionTag::Table, latch: true })
        );
        assert_eq!(
            nav.select(2),
            Ok(NavigationEffect::Dispatch { index: 2, tag: ActionTag::Ping, latch: false })
        );
    }

    #[test]
    fn test_select_out_of_range() {
        let nav = nav();
        assert_eq!(
            nav.select(7),
            Err(NavError::OutOfRange { screen: ScreenKey::Root, index: 7, len: 2 })
        );
    }

    #[test]
    fn test_latching_dispatch_flips_flag() {
        let mut nav = nav();
        nav.apply(NavigationEffect::Push(ScreenKey::Utils));
        nav.apply(NavigationEffect::MoveCursor(1));

        let effect = nav.step(InputEvent::Select);
        assert_eq!(effect, NavigationEffect::Dispatch { index: 1, tag: ActionTag::Timer, latch: true });
        assert!(nav.is_active(1));

        nav.apply(NavigationEffect::MoveCursor(1));
        nav.step(InputEvent::Select);
        assert!(!nav.is_active(2), "plain actions carry no flag");
    }

    #[test]
    fn test_set_active_bounds() {
        let mut nav = nav();
        nav.apply(NavigationEffect::Push(ScreenKey::Live));
        assert_eq!(nav.set_active(1, true), Ok(true));
        assert_eq!(nav.set_active(1, true), Ok(false));
        assert!(nav.set_active(2, true).is_err());
    }

    #[test]
    fn test_position_of() {
        let mut nav = nav();
        assert_eq!(nav.position_of(ActionTag::Timer), None);
        nav.apply(NavigationEffect::Push(ScreenKey::Utils));
        assert_eq!(nav.position_of(ActionTag::Timer), Some(1));
        assert_eq!(nav.position_of(ActionTag::Progress), Some(3));
    }

    #[test]
    fn test_snapshot_marks_cursor_and_flags() {
        let mut nav = nav();
        nav.apply(NavigationEffect::Push(ScreenKey::Live));
        nav.apply(NavigationEffect::Toggle(1));
        nav.apply(NavigationEffect::MoveCursor(1));

        let snapshot = nav.snapshot();
        assert_eq!(snapshot.key, ScreenKey::Live);
        assert_eq!(snapshot.title, "Where are you deploying to?");
        assert_eq!(snapshot.depth(), 2);
        assert_eq!(snapshot.entries[0].label, "To Staging");
        assert!(!snapshot.entries[0].active);
        assert!(!snapshot.entries[0].selected);
        assert!(snapshot.entries[1].active);
        assert!(snapshot.entries[1].selected);
    }

    #[test]
    fn test_can_go_back_follows_depth() {
        let mut nav = nav();
        assert!(!nav.can_go_back());
        nav.step(InputEvent::Select);
        assert!(nav.can_go_back());
        nav.step(InputEvent::Back);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_host_signals_are_noop() {
        let mut nav = nav();
        assert_eq!(nav.step(InputEvent::Quit), NavigationEffect::Noop);
        assert_eq!(nav.step(InputEvent::ToggleHelp), NavigationEffect::Noop);
        assert_eq!(nav.current(), ScreenKey::Root);
    }
}
