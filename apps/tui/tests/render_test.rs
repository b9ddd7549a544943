use crossterm::event::{KeyCode, KeyModifiers};
use golive_tui::app::App;
use golive_tui::config::TuiConfig;
use golive_tui::views::render_app;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn draw(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| render_app(frame, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn test_root_screen_renders() {
    let mut app = App::new(TuiConfig::default()).unwrap();
    let text = draw(&mut app, 100, 40);

    assert!(text.contains("What would you like to do?"));
    assert!(text.contains("-> Go Live"));
    assert!(text.contains("Utils"));
    assert!(text.contains("root"));
}

#[test]
fn test_live_screen_shows_checkboxes() {
    let mut app = App::new(TuiConfig::default()).unwrap();
    app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    let text = draw(&mut app, 100, 40);

    assert!(text.contains("Where are you deploying to?"));
    assert!(text.contains("[✓] To Staging"));
    assert!(text.contains("[ ] To Production"));
}

#[test]
fn test_utils_screen_shows_widgets() {
    let mut app = App::new(TuiConfig::default()).unwrap();
    app.handle_key(KeyCode::Down, KeyModifiers::NONE);
    app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    let text = draw(&mut app, 120, 60);

    assert!(text.contains("Tokyo"));
    assert!(text.contains("Ping idle"));
    assert!(text.contains("Progress"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = App::new(TuiConfig::default()).unwrap();
    draw(&mut app, 10, 4);
}
