//! Headless replay: apply a move list and report the outcome.

use crate::games::tictactoe::{Board, GameState, GameStatus, Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Outcome of a replayed move list, shaped for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Final board.
    pub board: Board,
    /// Player to move next.
    pub turn: Player,
    /// Derived status.
    pub status: GameStatus,
    /// Status line as the UI would show it.
    pub status_text: String,
    /// How many of the given moves were accepted.
    pub accepted: usize,
}

/// Plays 1-based cell numbers from a fresh game.
///
/// Numbers outside 1-9, occupied cells, and moves after the game ends are
/// skipped, exactly as the UI ignores them.
#[instrument]
pub fn replay(cells: &[usize]) -> GameState {
    cells.iter().fold(GameState::new(), |state, &cell| {
        let Some(pos) = Position::from_number(cell) else {
            debug!(cell, "Skipping cell outside 1-9");
            return state;
        };
        state.play(pos)
    })
}

/// Replays `cells` and summarises the final state.
#[instrument]
pub fn report(cells: &[usize]) -> ReplayReport {
    let state = replay(cells);
    let accepted = state.board().filled();
    info!(accepted, given = cells.len(), "Replay finished");
    ReplayReport {
        board: *state.board(),
        turn: state.turn(),
        status: state.status(),
        status_text: state.status_text(),
        accepted,
    }
}

/// Renders a replay as the text board followed by the status line.
pub fn render_text(state: &GameState) -> String {
    format!("{}\n\n{}", state.board().display(), state.status_text())
}
