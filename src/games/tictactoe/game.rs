//! Game state model for tic-tac-toe.
//!
//! The model is copy-on-write: every operation takes the current state by
//! reference and hands back a new one. Status is never stored; it is derived
//! from the board each time it is requested, so the board stays the single
//! source of truth.
//!
//! Rejected moves (occupied cell, index off the board, game already over) are
//! not errors. They return the state unchanged.

use super::position::Position;
use super::rules::{find_win, is_full};
use super::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Derives the game status from a board.
///
/// A completed line takes precedence over a full board.
#[instrument]
pub fn derive_status(board: &Board) -> GameStatus {
    if let Some((player, line)) = find_win(board) {
        GameStatus::Won { player, line }
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Applies a move for `turn` at `index`.
///
/// Returns the new board and the next turn on success. If `index` is outside
/// 0-8, the cell is occupied, or the board is already decided, the inputs are
/// returned unchanged.
#[instrument]
pub fn apply_move(board: &Board, turn: Player, index: usize) -> (Board, Player) {
    let Some(pos) = Position::from_index(index) else {
        debug!("Move ignored: index off the board");
        return (*board, turn);
    };
    if board.get(pos) != Square::Empty {
        debug!(position = %pos, "Move ignored: square occupied");
        return (*board, turn);
    }
    if derive_status(board).is_over() {
        debug!("Move ignored: game is over");
        return (*board, turn);
    }

    (board.with_mark(pos, turn), turn.opponent())
}

/// Returns the initial state: an empty board with X to move.
#[instrument]
pub fn restart() -> (Board, Player) {
    (Board::new(), Player::X)
}

/// Board plus whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
}

impl GameState {
    /// Creates a new game with an empty board and X to move.
    pub fn new() -> Self {
        Self::restart()
    }

    /// Resets to the initial state regardless of what came before.
    pub fn restart() -> Self {
        let (board, turn) = restart();
        Self { board, turn }
    }

    /// Returns the state after a move at `index` (0-8).
    ///
    /// Rejected moves return an identical state.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&self, index: usize) -> Self {
        let (board, turn) = apply_move(&self.board, self.turn, index);
        Self { board, turn }
    }

    /// Convenience wrapper over [`GameState::apply_move`] for a named position.
    pub fn play(&self, pos: Position) -> Self {
        self.apply_move(pos.to_index())
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next accepted move places.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Recomputes the status from the board.
    pub fn status(&self) -> GameStatus {
        derive_status(&self.board)
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Returns true if a move at `pos` would be accepted.
    pub fn is_playable(&self, pos: Position) -> bool {
        self.board.is_empty(pos) && !self.is_over()
    }

    /// Status line shown above the board.
    pub fn status_text(&self) -> String {
        match self.status() {
            GameStatus::InProgress => format!("Next player: {}", self.turn),
            GameStatus::Won { player, .. } => format!("Winner: {}", player),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }

    /// Accessibility label for a cell.
    ///
    /// Names the occupant of a filled cell, or the player to move for an
    /// empty one.
    pub fn cell_label(&self, pos: Position) -> String {
        let player = self.board.get(pos).player().unwrap_or(self.turn);
        format!("Square {} for player {}", pos.number(), player)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(indices: &[usize]) -> GameState {
        indices
            .iter()
            .fold(GameState::new(), |state, &index| state.apply_move(index))
    }

    #[test]
    fn test_new_game_is_in_progress() {
        let state = GameState::new();
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.turn(), Player::X);
        assert_eq!(state.status_text(), "Next player: X");
    }

    #[test]
    fn test_move_places_mark_and_flips_turn() {
        let state = GameState::new().apply_move(4);
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(state.turn(), Player::O);
        assert_eq!(state.status_text(), "Next player: O");
    }

    #[test]
    fn test_apply_move_does_not_touch_input_board() {
        let board = Board::new();
        let (next, turn) = apply_move(&board, Player::X, 0);
        assert_eq!(board, Board::new());
        assert_eq!(next.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(turn, Player::O);
    }

    #[test]
    fn test_top_row_win() {
        let state = play_all(&[0, 3, 1, 4, 2]);
        assert_eq!(
            state.status(),
            GameStatus::Won {
                player: Player::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
        assert_eq!(state.status_text(), "Winner: X");
    }

    #[test]
    fn test_full_board_draw() {
        // X: 0,1,5,6,8  O: 2,3,4,7
        let state = play_all(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);
        assert_eq!(state.board().filled(), 9);
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.status_text(), "Draw!");
    }

    #[test]
    fn test_winning_last_move_is_not_draw() {
        // X fills the final cell and completes the main diagonal.
        let state = play_all(&[0, 2, 1, 3, 4, 6, 5, 7, 8]);
        assert_eq!(state.board().filled(), 9);
        assert_eq!(state.status().winner(), Some(Player::X));
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let state = GameState::new().apply_move(4);
        assert_eq!(state.apply_move(4), state);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let state = GameState::new().apply_move(0);
        assert_eq!(state.apply_move(9), state);
        assert_eq!(state.apply_move(usize::MAX), state);
    }

    #[test]
    fn test_moves_after_win_are_ignored() {
        let won = play_all(&[0, 3, 1, 4, 2]);
        for index in 0..9 {
            assert_eq!(won.apply_move(index), won);
        }
        assert!(!won.is_playable(Position::BottomRight));
    }

    #[test]
    fn test_restart_resets_everything() {
        let won = play_all(&[0, 3, 1, 4, 2]);
        assert!(won.is_over());

        let fresh = GameState::restart();
        assert_eq!(fresh, GameState::new());
        assert_eq!(fresh.board().filled(), 0);
        assert_eq!(fresh.turn(), Player::X);
        assert_eq!(fresh.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_cell_label_uses_occupant_or_turn() {
        let state = GameState::new().apply_move(0);
        assert_eq!(state.cell_label(Position::TopLeft), "Square 1 for player X");
        assert_eq!(state.cell_label(Position::BottomRight), "Square 9 for player O");
    }
}
