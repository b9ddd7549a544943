//! Countdown timer action.

use std::time::Duration;

use golive_core::ActionTicket;
use tokio::task::JoinHandle;
use tracing::debug;

use super::{ActionEvent, ActionSender, send};
use crate::config::TimerConfig;

/// Countdown widget state plus the task driving it.
#[derive(Debug)]
pub struct Countdown {
    duration: Duration,
    interval: Duration,
    remaining: Duration,
    spent: bool,
    task: Option<(ActionTicket, JoinHandle<()>)>,
}

impl Countdown {
    pub fn new(duration: Duration, interval: Duration) -> Self {
        Self {
            duration,
            interval: interval.max(Duration::from_millis(1)),
            remaining: duration,
            spent: false,
            task: None,
        }
    }

    pub fn from_config(config: &TimerConfig) -> Self {
        Self::new(config.duration(), config.interval())
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Whether the countdown reached zero since it was last started.
    pub fn is_spent(&self) -> bool {
        self.spent
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|(_, handle)| !handle.is_finished())
    }

    /// Whether events for `ticket` belong to the current run.
    pub fn owns(&self, ticket: &ActionTicket) -> bool {
        self.task.as_ref().is_some_and(|(t, _)| t == ticket)
    }

    /// Starts or resumes the countdown. A spent countdown restarts from full.
    pub fn start(&mut self, tx: &ActionSender, ticket: ActionTicket) {
        self.stop();
        if self.spent || self.remaining.is_zero() {
            self.remaining = self.duration;
            self.spent = false;
        }
        debug!(remaining_ms = self.remaining.as_millis() as u64, "timer started");
        let handle = spawn_countdown(tx.clone(), ticket, self.remaining, self.interval);
        self.task = Some((ticket, handle));
    }

    /// Pauses the countdown, keeping the remaining time.
    pub fn stop(&mut self) {
        if let Some((_, handle)) = self.task.take() {
            handle.abort();
            debug!(remaining_ms = self.remaining.as_millis() as u64, "timer stopped");
        }
    }

    pub fn on_tick(&mut self, ticket: &ActionTicket, remaining: Duration) -> bool {
        if !self.owns(ticket) {
            return false;
        }
        self.remaining = remaining;
        true
    }

    pub fn on_timeout(&mut self, ticket: &ActionTicket) -> bool {
        if !self.owns(ticket) {
            return false;
        }
        self.task = None;
        self.remaining = Duration::ZERO;
        self.spent = true;
        true
    }

    /// Remaining time as shown in the UI, e.g. "4.9s".
    pub fn display(&self) -> String {
        format!("{:.1}s", self.remaining.as_secs_f64())
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.task.take() {
            handle.abort();
        }
    }
}

fn spawn_countdown(
    tx: ActionSender,
    ticket: ActionTicket,
    from: Duration,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut remaining = from;
        while !remaining.is_zero() {
            let step = interval.min(remaining);
            tokio::time::sleep(step).await;
            remaining = remaining.saturating_sub(step);
            if !send(&tx, ticket, ActionEvent::TimerTick { remaining }) {
                return;
            }
        }
        send(&tx, ticket, ActionEvent::TimerTimeout);
    })
}
