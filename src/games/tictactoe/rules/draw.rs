//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the game is drawn: full board, no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = Position::ALL
            .iter()
            .fold(Board::new(), |board, &pos| board.with_mark(pos, Player::X));
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ];
        let board = Position::ALL
            .iter()
            .zip(marks)
            .fold(Board::new(), |board, (&pos, player)| board.with_mark(pos, player));

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board where X completes the top row.
        let marks = [
            Player::X,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
        ];
        let board = Position::ALL
            .iter()
            .zip(marks)
            .fold(Board::new(), |board, (&pos, player)| board.with_mark(pos, player));

        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
