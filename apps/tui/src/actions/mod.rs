//! Channel-based delivery of action results.
//!
//! Actions run as tokio tasks and report back through one unbounded channel.
//! Every message carries the [`ActionTicket`] captured when the action was
//! dispatched, so the app can drop results for screens that are gone.

pub mod countdown;
pub mod ping;
pub mod progress;

use std::time::Duration;

use golive_core::ActionTicket;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub use countdown::Countdown;
pub use ping::{PingOutcome, PingStatus};
pub use progress::ProgressBar;

/// Events sent from action tasks to the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEvent {
    /// The ping request finished.
    PingFinished(PingOutcome),
    /// The countdown advanced.
    TimerTick { remaining: Duration },
    /// The countdown reached zero.
    TimerTimeout,
    /// The progress bar should advance one step.
    ProgressTick,
}

/// An event tagged with the ticket of the screen that started it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMessage {
    pub ticket: ActionTicket,
    pub event: ActionEvent,
}

impl ActionMessage {
    pub fn new(ticket: ActionTicket, event: ActionEvent) -> Self {
        Self { ticket, event }
    }
}

pub type ActionSender = UnboundedSender<ActionMessage>;
pub type ActionReceiver = UnboundedReceiver<ActionMessage>;

/// Creates a new action channel pair (sender, receiver).
pub fn create_action_channel() -> (ActionSender, ActionReceiver) {
    mpsc::unbounded_channel()
}

/// Send helper for tasks; a closed channel means the app is shutting down.
pub(crate) fn send(tx: &ActionSender, ticket: ActionTicket, event: ActionEvent) -> bool {
    if tx.send(ActionMessage::new(ticket, event)).is_err() {
        tracing::debug!(tag = %ticket.tag, "action channel closed");
        return false;
    }
    true
}
