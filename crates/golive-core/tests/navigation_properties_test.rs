//! Property tests for navigator invariants.

use golive_core::{InputEvent, NavigationEffect, Navigator};
use proptest::prelude::*;

fn input_event() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        Just(InputEvent::Up),
        Just(InputEvent::Down),
        Just(InputEvent::Select),
        Just(InputEvent::Back),
        Just(InputEvent::ToggleHelp),
        Just(InputEvent::Quit),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: cursor stays within the active screen's entries for any moves.
    #[test]
    fn property_cursor_stays_in_range(deltas in proptest::collection::vec(-5isize..=5, 0..64)) {
        let mut nav = Navigator::standard().unwrap();
        for delta in deltas {
            nav.apply(NavigationEffect::MoveCursor(delta));
            let snapshot = nav.snapshot();
            prop_assert!(snapshot.cursor < snapshot.entries.len());
        }
    }

    /// PROPERTY: any input sequence keeps root at the bottom, keys unique, and
    /// every cursor in range.
    #[test]
    fn property_stack_invariants_hold(events in proptest::collection::vec(input_event(), 0..128)) {
        let mut nav = Navigator::standard().unwrap();
        for event in events {
            nav.step(event);

            let stack = nav.state().stack();
            prop_assert!(!stack.is_empty());
            prop_assert_eq!(stack[0], golive_core::ScreenKey::Root);
            for (i, key) in stack.iter().enumerate() {
                prop_assert!(!stack[..i].contains(key));
            }

            let snapshot = nav.snapshot();
            prop_assert!(snapshot.cursor < snapshot.entries.len());
            prop_assert_eq!(snapshot.entries.iter().filter(|e| e.selected).count(), 1);
        }
    }
}
