//! Hot-seat tic-tac-toe for the terminal.
//!
//! # Architecture
//!
//! - **Games**: the copy-on-write game model and the pure win/draw rules
//! - **TUI**: ratatui front end with mouse and keyboard input
//! - **Replay**: headless play from a list of cell numbers
//! - **Config**: optional TOML settings
//!
//! # Example
//!
//! ```
//! use tictactoe_tui::{GameState, GameStatus, Player};
//!
//! let state = [0, 3, 1, 4, 2]
//!     .into_iter()
//!     .fold(GameState::new(), |state, index| state.apply_move(index));
//!
//! assert_eq!(state.status().winner(), Some(Player::X));
//! assert_eq!(state.status_text(), "Winner: X");
//! assert!(matches!(state.apply_move(8).status(), GameStatus::Won { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameState, GameStatus, Player, Position, Square, WINNING_LINES, apply_move,
    check_winner, derive_status, is_draw, is_full, restart, winning_line,
};

// Crate-level exports - Replay
pub use replay::{ReplayReport, render_text, replay, report};

// Crate-level exports - Terminal UI
pub use tui::{
    Action, App, Hit, MovePulse, ScreenLayout, Theme, action_for_hit, action_for_key, draw,
    hit_test, move_cursor, run_tui, screen_layout,
};
