use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers};
use golive_core::{ActionTag, ActionTicket, ScreenKey};
use golive_tui::actions::{ActionEvent, ActionMessage, PingOutcome, PingStatus};
use golive_tui::app::App;
use golive_tui::config::TuiConfig;

fn fast_config() -> TuiConfig {
    let mut config = TuiConfig::default();
    config.timer.duration_secs = 1;
    config.timer.interval_ms = 10;
    config.progress.tick_ms = 5;
    config.ping.url = "http://127.0.0.1:1/".to_string();
    config.ping.delay_secs = 0;
    config.ping.timeout_secs = 1;
    config
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(code, KeyModifiers::NONE);
}

/// Root -> Utils, cursor on `index`.
fn open_utils(app: &mut App, index: usize) {
    press(app, KeyCode::Char('j'));
    press(app, KeyCode::Enter);
    assert_eq!(app.current(), ScreenKey::Utils);
    for _ in 0..index {
        press(app, KeyCode::Char('j'));
    }
}

async fn drain_until(app: &mut App, mut done: impl FnMut(&App) -> bool) {
    for _ in 0..500 {
        app.drain_actions();
        if done(app) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not reached");
}

#[test]
fn test_app_new() {
    let app = App::new(TuiConfig::default()).unwrap();

    assert!(!app.should_quit);
    assert_eq!(app.current(), ScreenKey::Root);
    assert_eq!(app.snapshot().title, "What would you like to do?");
    assert!(app.status_message.is_none());
    assert!(matches!(app.ping, PingStatus::Idle));
}

#[test]
fn test_live_toggles_survive_leaving_the_screen() {
    let mut app = App::new(fast_config()).unwrap();

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current(), ScreenKey::Live);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.snapshot().entries[1].active);

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Enter);
    let snapshot = app.snapshot();
    assert_eq!(snapshot.key, ScreenKey::Live);
    assert_eq!(snapshot.cursor, 1);
    assert!(!snapshot.entries[0].active);
    assert!(snapshot.entries[1].active);
}

#[test]
fn test_back_at_root_stays_put() {
    let mut app = App::new(fast_config()).unwrap();
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current(), ScreenKey::Root);
    assert!(!app.should_quit);
}

#[test]
fn test_ctrl_c_quits_from_any_screen() {
    let mut app = App::new(fast_config()).unwrap();
    open_utils(&mut app, 0);
    press(&mut app, KeyCode::Enter);
    assert!(app.table.is_focused());

    app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_timer_clears_its_flag_on_timeout() {
    let mut app = App::new(fast_config()).unwrap();
    open_utils(&mut app, 1);

    press(&mut app, KeyCode::Enter);
    assert!(app.snapshot().entries[1].active);
    assert!(app.timer.is_running());

    drain_until(&mut app, |app| app.timer.is_spent()).await;
    assert!(!app.snapshot().entries[1].active);
    assert!(!app.timer.is_running());
}

#[tokio::test]
async fn test_timer_pauses_when_switched_off() {
    let mut app = App::new(fast_config()).unwrap();
    open_utils(&mut app, 1);

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert!(!app.snapshot().entries[1].active);
    assert!(!app.timer.is_running());
    assert!(!app.timer.is_spent());
}

#[tokio::test]
async fn test_progress_fills_then_refuses_to_restart() {
    let mut app = App::new(fast_config()).unwrap();
    open_utils(&mut app, 3);

    press(&mut app, KeyCode::Enter);
    drain_until(&mut app, |app| app.progress.is_complete()).await;
    assert_eq!(app.progress.percent(), 1.0);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.status_message.as_deref(), Some("Progress already complete"));
}

#[tokio::test]
async fn test_ping_failure_reports_err() {
    let mut app = App::new(fast_config()).unwrap();
    open_utils(&mut app, 2);

    press(&mut app, KeyCode::Enter);
    assert!(matches!(app.ping, PingStatus::Waiting { .. }));

    drain_until(&mut app, |app| matches!(app.ping, PingStatus::Done(_))).await;
    assert_eq!(app.status_message.as_deref(), Some("ping:err"));
}

#[tokio::test]
async fn test_results_for_a_left_screen_are_dropped() {
    let mut app = App::new(fast_config()).unwrap();
    open_utils(&mut app, 2);
    press(&mut app, KeyCode::Enter);
    let PingStatus::Waiting { ticket, .. } = app.ping else {
        panic!("ping should be waiting");
    };

    // Leave and come back: the old instance is gone.
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Enter);

    let stale = ActionMessage::new(ticket, ActionEvent::PingFinished(PingOutcome::Ok { status: 200 }));
    assert!(!app.handle_action_message(stale));
    assert!(matches!(app.ping, PingStatus::Waiting { .. }));
    assert!(app.status_message.is_none());
}

#[tokio::test]
async fn test_progress_freezes_when_leaving_and_resumes_on_return() {
    let mut app = App::new(fast_config()).unwrap();
    open_utils(&mut app, 3);

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current(), ScreenKey::Root);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(app.drain_actions(), 0);
    assert_eq!(app.progress.percent(), 0.0);
    assert!(!app.progress.is_complete());

    // Root cursor is still on Utils, Utils cursor still on Progress.
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current(), ScreenKey::Utils);
    press(&mut app, KeyCode::Enter);
    let ticket = app.navigator.ticket(ActionTag::Progress);
    assert!(app.progress.is_running_for(&ticket));

    drain_until(&mut app, |app| app.progress.is_complete()).await;
    assert_eq!(app.progress.percent(), 1.0);
}

#[tokio::test]
async fn test_timer_results_dropped_after_leaving() {
    let mut app = App::new(fast_config()).unwrap();
    open_utils(&mut app, 1);

    press(&mut app, KeyCode::Enter);
    assert!(app.timer.is_running());
    let remaining = app.timer.remaining();
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current(), ScreenKey::Root);

    // Past the full one second duration.
    tokio::time::sleep(Duration::from_millis(1300)).await;
    assert_eq!(app.drain_actions(), 0);
    assert!(!app.timer.is_spent());
    assert_eq!(app.timer.remaining(), remaining);
}

#[tokio::test]
async fn test_results_for_another_screen_are_dropped() {
    let mut app = App::new(fast_config()).unwrap();
    let ticket = ActionTicket { screen: ScreenKey::Live, instance: 0, tag: ActionTag::Timer };

    let message = ActionMessage::new(ticket, ActionEvent::TimerTimeout);
    assert!(!app.handle_action_message(message));
    assert!(!app.timer.is_spent());
}

#[tokio::test]
async fn test_injected_results_go_through_the_channel() {
    let mut config = fast_config();
    config.timer.duration_secs = 120;
    config.timer.interval_ms = 60_000;
    let mut app = App::new(config).unwrap();
    open_utils(&mut app, 1);
    press(&mut app, KeyCode::Enter);
    let ticket = app.navigator.ticket(ActionTag::Timer);

    app.action_sender()
        .send(ActionMessage::new(ticket, ActionEvent::TimerTick { remaining: Duration::from_millis(300) }))
        .unwrap();
    assert_eq!(app.drain_actions(), 1);
    assert_eq!(app.timer.remaining(), Duration::from_millis(300));
}
