//! Command-line interface for tictactoe_tui.

use clap::{Parser, Subcommand};

/// Tic-tac-toe for two players sharing one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Hot-seat tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply moves without a UI and print the result
    Replay {
        /// Cell numbers (1-9) in play order; rejected moves are skipped
        #[arg(value_name = "CELLS")]
        cells: Vec<usize>,

        /// Print JSON instead of the text board
        #[arg(long)]
        json: bool,
    },
}
