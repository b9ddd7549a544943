//! Menu application: routes keys to the navigator and runs action widgets.

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyModifiers};
use golive_core::{ActionTag, InputEvent, NavigationEffect, Navigator, ScreenKey, ScreenSnapshot};
use std::time::Instant;
use tracing::{debug, info};

use crate::actions::{
    self, ActionEvent, ActionMessage, ActionReceiver, ActionSender, Countdown, PingStatus,
    ProgressBar,
};
use crate::components::InteractiveTable;
use crate::config::TuiConfig;
use crate::keymap::{self, KeyAction};

/// Main application state.
pub struct App {
    /// Whether to quit
    pub should_quit: bool,
    /// Whether the help footer shows every binding
    pub show_full_help: bool,
    /// Screen stack and per-screen state
    pub navigator: Navigator,
    /// Destination table on the Utils screen
    pub table: InteractiveTable,
    /// Countdown timer on the Utils screen
    pub timer: Countdown,
    /// Ping status on the Utils screen
    pub ping: PingStatus,
    /// Progress bar on the Utils screen
    pub progress: ProgressBar,
    /// Last message shown under the menu
    pub status_message: Option<String>,
    /// Render cycle counter for the spinner
    pub frame_count: usize,
    config: TuiConfig,
    http: reqwest::Client,
    action_tx: ActionSender,
    action_rx: ActionReceiver,
}

impl App {
    pub fn new(config: TuiConfig) -> Result<Self> {
        let navigator = Navigator::standard().context("Invalid screen registry")?;
        let (action_tx, action_rx) = actions::create_action_channel();

        Ok(Self {
            should_quit: false,
            show_full_help: false,
            navigator,
            table: InteractiveTable::destinations(),
            timer: Countdown::from_config(&config.timer),
            ping: PingStatus::Idle,
            progress: ProgressBar::from_config(&config.progress),
            status_message: None,
            frame_count: 0,
            http: reqwest::Client::new(),
            config,
            action_tx,
            action_rx,
        })
    }

    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    pub fn current(&self) -> ScreenKey {
        self.navigator.current()
    }

    pub fn snapshot(&self) -> ScreenSnapshot {
        self.navigator.snapshot()
    }

    /// Handles a raw key press.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if let Some(action) = keymap::resolve(code, modifiers) {
            self.handle_action_key(action);
        }
    }

    /// Handles a resolved key action.
    pub fn handle_action_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                info!("quit requested");
                self.should_quit = true;
                return;
            }
            KeyAction::ToggleHelp => {
                self.show_full_help = !self.show_full_help;
                return;
            }
            _ => {}
        }

        if self.table.is_focused() {
            self.handle_table_key(action);
            return;
        }

        if let Some(event) = action.input_event() {
            self.handle_input(event);
        }
    }

    /// Routes a navigator event and carries out the resulting effect.
    pub fn handle_input(&mut self, event: InputEvent) {
        let effect = self.navigator.handle_input(event);
        let changed = self.navigator.apply(effect);

        match effect {
            NavigationEffect::Push(_) | NavigationEffect::Pop if changed => {
                self.status_message = None;
            }
            NavigationEffect::Dispatch { index, tag, latch } => self.dispatch(index, tag, latch),
            _ => {}
        }
    }

    fn handle_table_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Up => self.table.previous(),
            KeyAction::Down => self.table.next(),
            KeyAction::Select => {
                if let Some(city) = self.table.selected_row().and_then(|row| row.get(1)) {
                    info!(city = %city, "destination chosen");
                    self.status_message = Some(format!("Let's go to {city}!"));
                }
            }
            KeyAction::Blur | KeyAction::Back => self.blur_table(),
            KeyAction::ToggleHelp | KeyAction::Quit => {}
        }
    }

    fn blur_table(&mut self) {
        self.table.blur();
        if let Some(index) = self.navigator.position_of(ActionTag::Table) {
            if let Err(e) = self.navigator.set_active(index, false) {
                debug!(error = %e, "could not clear table flag");
            }
        }
    }

    /// Starts or stops the action behind an entry. For latching entries the
    /// navigator has already flipped the flag.
    fn dispatch(&mut self, index: usize, tag: ActionTag, latch: bool) {
        let active = latch && self.navigator.is_active(index);
        let ticket = self.navigator.ticket(tag);
        debug!(%tag, index, active, "dispatch");

        match tag {
            ActionTag::Table => {
                if active {
                    self.table.focus();
                } else {
                    self.table.blur();
                }
            }
            ActionTag::Timer => {
                if active {
                    self.timer.start(&self.action_tx, ticket);
                } else {
                    self.timer.stop();
                }
            }
            ActionTag::Ping => {
                if self.ping.is_waiting_on(&ticket) {
                    return;
                }
                actions::ping::spawn_ping(
                    self.http.clone(),
                    &self.config.ping,
                    self.action_tx.clone(),
                    ticket,
                );
                self.ping = PingStatus::Waiting { ticket, started: Instant::now() };
            }
            ActionTag::Progress => {
                if self.progress.is_complete() {
                    self.status_message = Some("Progress already complete".to_string());
                } else {
                    self.progress.start(&self.action_tx, ticket);
                }
            }
        }
    }

    /// Applies every action result waiting in the channel.
    pub fn drain_actions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.action_rx.try_recv() {
            if self.handle_action_message(message) {
                applied += 1;
            }
        }
        applied
    }

    /// Applies one action result; stale results are dropped.
    pub fn handle_action_message(&mut self, message: ActionMessage) -> bool {
        let ActionMessage { ticket, event } = message;

        if let Err(e) = self.navigator.admit(&ticket) {
            debug!(error = %e, ?event, "dropping action result");
            return false;
        }

        match event {
            ActionEvent::PingFinished(outcome) => {
                if !self.ping.is_waiting_on(&ticket) {
                    return false;
                }
                self.status_message = Some(outcome.label());
                self.ping = PingStatus::Done(outcome);
                true
            }
            ActionEvent::TimerTick { remaining } => self.timer.on_tick(&ticket, remaining),
            ActionEvent::TimerTimeout => {
                if !self.timer.on_timeout(&ticket) {
                    return false;
                }
                if let Some(index) = self.navigator.position_of(ActionTag::Timer) {
                    if let Err(e) = self.navigator.set_active(index, false) {
                        debug!(error = %e, "could not clear timer flag");
                    }
                }
                info!("timer finished");
                true
            }
            ActionEvent::ProgressTick => self.progress.on_tick(&self.action_tx, &ticket),
        }
    }

    /// Advances per-frame counters.
    pub fn tick(&mut self) {
        self.frame_count = self.frame_count.wrapping_add(1);
    }

    /// Sender for injecting action results (used by tests and the event loop).
    pub fn action_sender(&self) -> ActionSender {
        self.action_tx.clone()
    }
}
