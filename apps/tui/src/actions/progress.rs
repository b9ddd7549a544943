//! Progress bar action: advances one step per tick until full.

use std::time::Duration;

use golive_core::ActionTicket;
use tracing::debug;

use super::{ActionEvent, ActionSender, send};
use crate::config::ProgressConfig;

const MIN_STEP: f64 = 0.01;
const FULL_TOLERANCE: f64 = f64::EPSILON * 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    percent: f64,
    step: f64,
    tick: Duration,
    pending: Option<ActionTicket>,
}

impl ProgressBar {
    pub fn new(step: f64, tick: Duration) -> Self {
        Self {
            percent: 0.0,
            step: step.clamp(MIN_STEP, 1.0),
            tick,
            pending: None,
        }
    }

    pub fn from_config(config: &ProgressConfig) -> Self {
        Self::new(config.step, config.tick())
    }

    /// Fill ratio in [0, 1].
    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 1.0
    }

    /// Whether a tick chain started under `ticket` is in flight.
    pub fn is_running_for(&self, ticket: &ActionTicket) -> bool {
        self.pending.as_ref() == Some(ticket)
    }

    /// Starts a tick chain. Does nothing when full or already running for
    /// this screen instance.
    pub fn start(&mut self, tx: &ActionSender, ticket: ActionTicket) -> bool {
        if self.is_complete() || self.is_running_for(&ticket) {
            return false;
        }
        self.pending = Some(ticket);
        schedule_tick(tx.clone(), ticket, self.tick);
        true
    }

    /// Applies a tick and schedules the next one until full.
    pub fn on_tick(&mut self, tx: &ActionSender, ticket: &ActionTicket) -> bool {
        if !self.is_running_for(ticket) {
            return false;
        }
        self.percent = advance(self.percent, self.step);
        debug!(percent = self.percent, "progress advanced");
        if self.is_complete() {
            self.pending = None;
        } else {
            schedule_tick(tx.clone(), *ticket, self.tick);
        }
        true
    }
}

/// Adds one step, snapping to full when float error leaves a sliver short.
fn advance(percent: f64, step: f64) -> f64 {
    let next = percent + step;
    if 1.0 - next < FULL_TOLERANCE { 1.0 } else { next }
}

fn schedule_tick(tx: ActionSender, ticket: ActionTicket, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        send(&tx, ticket, ActionEvent::ProgressTick);
    });
}
