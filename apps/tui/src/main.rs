//! GoLive TUI entry point.

use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use golive_tui::app::App;
use golive_tui::cli::Args;
use golive_tui::config::TuiConfig;
use golive_tui::theme::{GoLiveTheme, update_theme};
use golive_tui::views::{render_app, render_splash};
use golive_tui::logging;

type Term = Terminal<CrosstermBackend<std::io::Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TuiConfig::load_from(path)?,
        None => TuiConfig::load()?,
    };
    logging::init(&config.logging, args.log_file.as_deref())?;
    update_theme(GoLiveTheme::from_preset(&config.theme.preset));

    let show_splash = config.ui.splash && !args.no_splash;
    let mut app = App::new(config).context("Failed to start")?;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run(&mut terminal, &mut app, show_splash);

    // Restore terminal
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);

    if let Err(ref e) = result {
        tracing::error!(error = %e, "exited with error");
    }
    result
}

fn run(terminal: &mut Term, app: &mut App, show_splash: bool) -> Result<()> {
    if show_splash {
        splash(terminal, app.config().ui.splash_duration())?;
    }

    // Main loop
    loop {
        app.drain_actions();
        app.tick();

        terminal.draw(|frame| render_app(frame, app))?;

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, key.modifiers);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn splash(terminal: &mut Term, duration: Duration) -> Result<()> {
    let start_time = Instant::now();

    while start_time.elapsed() < duration {
        terminal.draw(|frame| {
            render_splash(frame, frame.area(), "Loading menu...");
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Skip splash on any key press
                    break;
                }
            }
        }
    }

    Ok(())
}
