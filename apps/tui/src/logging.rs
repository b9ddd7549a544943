//! Log file setup.
//!
//! The terminal is in raw alternate-screen mode while the menu runs, so logs
//! go to a file instead of stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Installs the global subscriber. Writes to `override_path` when given,
/// otherwise to the configured file when logging is enabled.
pub fn init(config: &LoggingConfig, override_path: Option<&Path>) -> Result<()> {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None if config.enabled => config.file.clone().into(),
        None => {
            tracing_subscriber::registry()
                .with(EnvFilter::new("off"))
                .init();
            return Ok(());
        }
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(())
}
