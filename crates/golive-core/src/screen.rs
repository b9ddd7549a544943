//! Screen registry: the menu tree as data.
//!
//! Every screen is a row of the registry (key, title, entries). Adding a screen
//! means adding a row here, not new control flow in the host.

use std::fmt;

use crate::error::{NavError, Result};

/// Stable identifier of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScreenKey {
    Root,
    Live,
    Utils,
}

impl ScreenKey {
    /// All keys, root first.
    pub const ALL: [ScreenKey; 3] = [ScreenKey::Root, ScreenKey::Live, ScreenKey::Utils];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenKey::Root => "root",
            ScreenKey::Live => "live",
            ScreenKey::Utils => "utils",
        }
    }
}

impl fmt::Display for ScreenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External actions the host knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionTag {
    /// Focus the row-selectable table.
    Table,
    /// Start or stop the countdown timer.
    Timer,
    /// HTTP ping.
    Ping,
    /// Animated progress bar.
    Progress,
}

impl ActionTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionTag::Table => "table",
            ActionTag::Timer => "timer",
            ActionTag::Ping => "ping",
            ActionTag::Progress => "progress",
        }
    }
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What selecting an entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryTarget {
    /// Descend into a child screen.
    Screen(ScreenKey),
    /// Flip the entry's flag and nothing else.
    Toggle,
    /// Ask the host to run an action.
    Action(ActionTag),
    /// Flip the entry's flag and ask the host to run an action; the host reads
    /// the new flag to decide between start and stop.
    Switch(ActionTag),
}

impl EntryTarget {
    /// Whether the entry carries an on/off flag worth drawing.
    pub fn has_flag(&self) -> bool {
        matches!(self, EntryTarget::Toggle | EntryTarget::Switch(_))
    }
}

/// A selectable row of a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub target: EntryTarget,
}

impl Entry {
    pub fn new(label: impl Into<String>, target: EntryTarget) -> Self {
        Self { label: label.into(), target }
    }

    pub fn screen(label: impl Into<String>, key: ScreenKey) -> Self {
        Self::new(label, EntryTarget::Screen(key))
    }

    pub fn toggle(label: impl Into<String>) -> Self {
        Self::new(label, EntryTarget::Toggle)
    }

    pub fn action(label: impl Into<String>, tag: ActionTag) -> Self {
        Self::new(label, EntryTarget::Action(tag))
    }

    pub fn switch(label: impl Into<String>, tag: ActionTag) -> Self {
        Self::new(label, EntryTarget::Switch(tag))
    }
}

/// Registry row describing one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSpec {
    pub key: ScreenKey,
    pub title: String,
    pub entries: Vec<Entry>,
}

impl ScreenSpec {
    pub fn new(key: ScreenKey, title: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self { key, title: title.into(), entries }
    }
}

/// The set of screens the navigator can show.
#[derive(Debug, Clone, Default)]
pub struct ScreenRegistry {
    specs: Vec<ScreenSpec>,
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row. Duplicates are caught by [`ScreenRegistry::validate`].
    pub fn with_screen(mut self, spec: ScreenSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// The GoLive menu: deploy targets and utilities under a root screen.
    pub fn standard() -> Self {
        Self::new()
            .with_screen(ScreenSpec::new(
                ScreenKey::Root,
                "What would you like to do?",
                vec![
                    Entry::screen("Go Live", ScreenKey::Live),
                    Entry::screen("Utils", ScreenKey::Utils),
                ],
            ))
            .with_screen(ScreenSpec::new(
                ScreenKey::Live,
                "Where are you deploying to?",
                vec![Entry::toggle("To Staging"), Entry::toggle("To Production")],
            ))
            .with_screen(ScreenSpec::new(
                ScreenKey::Utils,
                "Utilities",
                vec![
                    Entry::switch("Table", ActionTag::Table),
                    Entry::switch("Timer", ActionTag::Timer),
                    Entry::action("Ping Google", ActionTag::Ping),
                    Entry::action("Progress", ActionTag::Progress),
                ],
            ))
    }

    pub fn get(&self, key: ScreenKey) -> Option<&ScreenSpec> {
        self.specs.iter().find(|spec| spec.key == key)
    }

    pub fn contains(&self, key: ScreenKey) -> bool {
        self.get(key).is_some()
    }

    pub fn specs(&self) -> &[ScreenSpec] {
        &self.specs
    }

    /// Checks the registry is usable: root present, no duplicate rows, no
    /// empty screens, every navigation entry targets a registered key.
    pub fn validate(&self) -> Result<()> {
        if !self.contains(ScreenKey::Root) {
            return Err(NavError::UnknownScreenKey(ScreenKey::Root));
        }

        for (i, spec) in self.specs.iter().enumerate() {
            if self.specs[..i].iter().any(|earlier| earlier.key == spec.key) {
                return Err(NavError::DuplicateScreen(spec.key));
            }
            if spec.entries.is_empty() {
                return Err(NavError::EmptyScreen(spec.key));
            }
            for entry in &spec.entries {
                if let EntryTarget::Screen(target) = entry.target {
                    if !self.contains(target) {
                        return Err(NavError::UnknownScreenKey(target));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_is_valid() {
        let registry = ScreenRegistry::standard();
        assert!(registry.validate().is_ok());
        for key in ScreenKey::ALL {
            assert!(registry.contains(key), "missing {key}");
        }
    }

    #[test]
    fn test_missing_root_rejected() {
        let registry = ScreenRegistry::new().with_screen(ScreenSpec::new(
            ScreenKey::Live,
            "Live",
            vec![Entry::toggle("A")],
        ));
        assert_eq!(registry.validate(), Err(NavError::UnknownScreenKey(ScreenKey::Root)));
    }

    #[test]
    fn test_dangling_target_rejected() {
        let registry = ScreenRegistry::new().with_screen(ScreenSpec::new(
            ScreenKey::Root,
            "Root",
            vec![Entry::screen("Utils", ScreenKey::Utils)],
        ));
        assert_eq!(registry.validate(), Err(NavError::UnknownScreenKey(ScreenKey::Utils)));
    }

    #[test]
    fn test_duplicate_and_empty_rejected() {
        let dup = ScreenRegistry::new()
            .with_screen(ScreenSpec::new(ScreenKey::Root, "A", vec![Entry::toggle("x")]))
            .with_screen(ScreenSpec::new(ScreenKey::Root, "B", vec![Entry::toggle("y")]));
        assert_eq!(dup.validate(), Err(NavError::DuplicateScreen(ScreenKey::Root)));

        let empty = ScreenRegistry::new().with_screen(ScreenSpec::new(ScreenKey::Root, "A", vec![]));
        assert_eq!(empty.validate(), Err(NavError::EmptyScreen(ScreenKey::Root)));
    }

    #[test]
    fn test_flagged_targets() {
        assert!(EntryTarget::Toggle.has_flag());
        assert!(EntryTarget::Switch(ActionTag::Timer).has_flag());
        assert!(!EntryTarget::Action(ActionTag::Ping).has_flag());
        assert!(!EntryTarget::Screen(ScreenKey::Live).has_flag());
    }
}
