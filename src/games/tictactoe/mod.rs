//! Tic-tac-toe game model and rules.

mod game;
mod position;
pub mod rules;
mod types;

#[cfg(test)]
mod proptests;

pub use game::{GameState, apply_move, derive_status, restart};
pub use position::Position;
pub use rules::{WINNING_LINES, check_winner, is_draw, is_full, winning_line};
pub use types::{Board, GameStatus, Player, Square};
