//! HTTP ping action.

use std::time::{Duration, Instant};

use golive_core::ActionTicket;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::{ActionEvent, ActionSender, send};
use crate::config::PingConfig;

/// Result of a ping request. Any HTTP response counts as reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PingOutcome {
    Ok { status: u16 },
    Failed(String),
}

impl PingOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, PingOutcome::Ok { .. })
    }

    pub fn label(&self) -> String {
        match self {
            PingOutcome::Ok { status } => format!("ping:ok ({status})"),
            PingOutcome::Failed(_) => "ping:err".to_string(),
        }
    }
}

/// Ping widget state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PingStatus {
    #[default]
    Idle,
    Waiting {
        ticket: ActionTicket,
        started: Instant,
    },
    Done(PingOutcome),
}

impl PingStatus {
    /// Whether a request started under `ticket` is still outstanding.
    pub fn is_waiting_on(&self, ticket: &ActionTicket) -> bool {
        matches!(self, PingStatus::Waiting { ticket: t, .. } if t == ticket)
    }
}

/// Sends a GET request to `url`.
pub async fn ping(client: &reqwest::Client, url: &str, timeout: Duration) -> PingOutcome {
    match client.get(url).timeout(timeout).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            info!(url, status, "ping:ok");
            PingOutcome::Ok { status }
        }
        Err(e) => {
            warn!(url, error = %e, "ping:err");
            PingOutcome::Failed(e.to_string())
        }
    }
}

/// Waits the configured delay, pings, and reports the outcome.
pub fn spawn_ping(
    client: reqwest::Client,
    config: &PingConfig,
    tx: ActionSender,
    ticket: ActionTicket,
) -> JoinHandle<()> {
    let url = config.url.clone();
    let delay = config.delay();
    let timeout = config.timeout();

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let outcome = ping(&client, &url, timeout).await;
        send(&tx, ticket, ActionEvent::PingFinished(outcome));
    })
}
