//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// GoLive - pick where to deploy from a terminal menu.
#[derive(Debug, Parser)]
#[command(name = "golive", version, about)]
pub struct Args {
    /// Config file (default: ~/.golive/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file, overriding the config
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Skip the splash screen
    #[arg(long)]
    pub no_splash: bool,
}
