//! tictactoe_tui - unified CLI
//!
//! Plays in the terminal by default; `replay` runs the same rules headless.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_tui::{Settings, render_text, replay, report, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&settings),
        Command::Replay { cells, json } => run_replay(&settings, &cells, json),
    }
}

/// Replay moves headless and print the outcome to stdout.
fn run_replay(settings: &Settings, cells: &[usize], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(moves = cells.len(), "Replaying moves");

    if json {
        println!("{}", serde_json::to_string_pretty(&report(cells))?);
    } else {
        println!("{}", render_text(&replay(cells)));
    }
    Ok(())
}
