//! TUI configuration management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// TUI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Startup and layout options
    #[serde(default)]
    pub ui: UiConfig,
    /// Ping action configuration
    #[serde(default)]
    pub ping: PingConfig,
    /// Countdown timer configuration
    #[serde(default)]
    pub timer: TimerConfig,
    /// Progress bar configuration
    #[serde(default)]
    pub progress: ProgressConfig,
    /// Log file configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme preset: "dark" or "light"
    #[serde(default = "default_preset")]
    pub preset: String,
}

fn default_preset() -> String {
    "dark".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { preset: default_preset() }
    }
}

/// Startup and layout options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the splash screen on startup (default: true)
    #[serde(default = "default_splash")]
    pub splash: bool,
    /// Splash duration in milliseconds (default: 800)
    #[serde(default = "default_splash_ms")]
    pub splash_ms: u64,
}

fn default_splash() -> bool {
    true
}

fn default_splash_ms() -> u64 {
    800
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            splash: default_splash(),
            splash_ms: default_splash_ms(),
        }
    }
}

impl UiConfig {
    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }
}

/// Ping action configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingConfig {
    /// URL to request (default: "https://google.com")
    #[serde(default = "default_ping_url")]
    pub url: String,
    /// Delay before the request is sent, in seconds (default: 5)
    #[serde(default = "default_ping_delay_secs")]
    pub delay_secs: u64,
    /// Request timeout in seconds (default: 5)
    #[serde(default = "default_ping_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_ping_url() -> String {
    "https://google.com".to_string()
}

fn default_ping_delay_secs() -> u64 {
    5
}

fn default_ping_timeout_secs() -> u64 {
    5
}

impl Default for PingConfig {
    fn default() -> Self {
        Self {
            url: default_ping_url(),
            delay_secs: default_ping_delay_secs(),
            timeout_secs: default_ping_timeout_secs(),
        }
    }
}

impl PingConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Countdown timer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Countdown length in seconds (default: 5)
    #[serde(default = "default_timer_duration_secs")]
    pub duration_secs: u64,
    /// Tick interval in milliseconds (default: 100)
    #[serde(default = "default_timer_interval_ms")]
    pub interval_ms: u64,
}

fn default_timer_duration_secs() -> u64 {
    5
}

fn default_timer_interval_ms() -> u64 {
    100
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_timer_duration_secs(),
            interval_ms: default_timer_interval_ms(),
        }
    }
}

impl TimerConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    /// Tick interval, never zero.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

/// Progress bar configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Fraction added on every tick (default: 0.25)
    #[serde(default = "default_progress_step")]
    pub step: f64,
    /// Delay between ticks in milliseconds (default: 1000)
    #[serde(default = "default_progress_tick_ms")]
    pub tick_ms: u64,
}

fn default_progress_step() -> f64 {
    0.25
}

fn default_progress_tick_ms() -> u64 {
    1000
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            step: default_progress_step(),
            tick_ms: default_progress_tick_ms(),
        }
    }
}

impl ProgressConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Log file configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether to write a log file (default: true)
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,
    /// Log file path, relative to the working directory (default: "golive.log")
    #[serde(default = "default_log_file")]
    pub file: String,
    /// Filter used when RUST_LOG is not set (default: "golive_tui=debug,golive_core=debug")
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_log_file() -> String {
    "golive.log".to_string()
}

fn default_log_filter() -> String {
    "golive_tui=debug,golive_core=debug".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            file: default_log_file(),
            filter: default_log_filter(),
        }
    }
}

/// Quoted and escaped TOML string literal.
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl TuiConfig {
    /// Get the default config file path.
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(home.join(".golive").join("config.toml"))
    }

    /// Load configuration from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing a default file if none exists.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: TuiConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        fs::write(path, self.to_commented_toml())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Render the configuration as TOML with explanatory comments.
    pub fn to_commented_toml(&self) -> String {
        let mut toml = String::new();
        toml.push_str("# GoLive TUI Configuration\n\n");

        toml.push_str("[theme]\n");
        toml.push_str("# Theme preset: \"dark\" (default) or \"light\"\n");
        toml.push_str(&format!("preset = {}\n\n", toml_string(&self.theme.preset)));

        toml.push_str("[ui]\n");
        toml.push_str("# Show the splash screen on startup (default: true)\n");
        toml.push_str(&format!("splash = {}\n", self.ui.splash));
        toml.push_str("# Splash duration in milliseconds (default: 800)\n");
        toml.push_str(&format!("splash_ms = {}\n\n", self.ui.splash_ms));

        toml.push_str("[ping]\n");
        toml.push_str("# URL requested by \"Ping Google\" (default: https://google.com)\n");
        toml.push_str(&format!("url = {}\n", toml_string(&self.ping.url)));
        toml.push_str("# Seconds to wait before sending the request (default: 5)\n");
        toml.push_str(&format!("delay_secs = {}\n", self.ping.delay_secs));
        toml.push_str("# Request timeout in seconds (default: 5)\n");
        toml.push_str(&format!("timeout_secs = {}\n\n", self.ping.timeout_secs));

        toml.push_str("[timer]\n");
        toml.push_str("# Countdown length in seconds (default: 5)\n");
        toml.push_str(&format!("duration_secs = {}\n", self.timer.duration_secs));
        toml.push_str("# Tick interval in milliseconds (default: 100)\n");
        toml.push_str(&format!("interval_ms = {}\n\n", self.timer.interval_ms));

        toml.push_str("[progress]\n");
        toml.push_str("# Fraction added on every tick (default: 0.25)\n");
        toml.push_str(&format!("step = {:?}\n", self.progress.step));
        toml.push_str("# Delay between ticks in milliseconds (default: 1000)\n");
        toml.push_str(&format!("tick_ms = {}\n\n", self.progress.tick_ms));

        toml.push_str("[logging]\n");
        toml.push_str("# Write a debug log file (default: true)\n");
        toml.push_str(&format!("enabled = {}\n", self.logging.enabled));
        toml.push_str(&format!("file = {}\n", toml_string(&self.logging.file)));
        toml.push_str("# Used when RUST_LOG is not set\n");
        toml.push_str(&format!("filter = {}\n", toml_string(&self.logging.filter)));

        toml
    }
}
