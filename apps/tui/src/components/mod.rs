//! Reusable UI components for the menu screens.

pub mod help_footer;
pub mod interactive_table;
pub mod logo;
pub mod progress_indicator;
pub mod spinner;
pub mod title_bar;

pub use help_footer::{help_height, render_help_footer};
pub use interactive_table::InteractiveTable;
pub use logo::{logo_height, render_logo};
pub use progress_indicator::render_progress_gauge;
pub use spinner::spinner_frame;
pub use title_bar::{breadcrumb, render_title_bar};
