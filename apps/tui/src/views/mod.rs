//! TUI view modules

pub mod layout;
pub mod menu;
pub mod splash;
pub mod utilities;

pub use layout::GlobalLayout;
pub use menu::render_menu;
pub use splash::render_splash;
pub use utilities::render_utilities;

use ratatui::Frame;

use crate::app::App;
use crate::components::{help_height, render_help_footer, render_title_bar};

/// Draws one full frame: title bar, active screen, help footer.
pub fn render_app(frame: &mut Frame, app: &mut App) {
    let area = GlobalLayout::padded(frame.area(), 1);
    let footer_height = help_height(app.show_full_help, app.table.is_focused());
    let [title_area, main_area, footer_area] = GlobalLayout::create(area, footer_height);

    let stack = app.navigator.state().stack();
    render_title_bar(frame, title_area, env!("CARGO_PKG_VERSION"), &stack);
    render_menu(frame, main_area, app);
    render_help_footer(frame, footer_area, app.show_full_help, app.table.is_focused());
}
