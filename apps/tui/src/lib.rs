//! GoLive TUI - keyboard-driven deploy menu.
//!
//! The screen stack lives in `golive_core`; this crate draws it, maps keys,
//! and runs the demo actions (table, timer, ping, progress).

pub mod actions;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod logging;
pub mod theme;
pub mod views;
