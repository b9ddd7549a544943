//! GoLive Core - screen-stack navigation for the GoLive terminal menu.
//!
//! The menu is a tree of screens held in a [`ScreenRegistry`]. A [`Navigator`]
//! tracks the path from the root to the active screen, turns key events into
//! [`NavigationEffect`]s, and exposes a [`ScreenSnapshot`] for rendering.
//!
//! # Example
//!
//! ```rust
//! use golive_core::{InputEvent, Navigator, ScreenKey};
//!
//! let mut nav = Navigator::standard().unwrap();
//! nav.step(InputEvent::Select);
//! assert_eq!(nav.current(), ScreenKey::Live);
//! nav.step(InputEvent::Back);
//! assert_eq!(nav.current(), ScreenKey::Root);
//! ```

pub mod error;
pub mod navigator;
pub mod screen;

pub use error::{NavError, Result};
pub use navigator::{
    ActionTicket, EntrySnapshot, InputEvent, NavigationEffect, NavigationState, Navigator, Screen,
    ScreenSnapshot,
};
pub use screen::{ActionTag, Entry, EntryTarget, ScreenKey, ScreenRegistry, ScreenSpec};
