//! Property-based tests for the game model
//!
//! These tests check the model invariants across arbitrary boards and
//! arbitrary move sequences.

use super::*;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(arb_square()).prop_map(Board::from_squares)
}

fn arb_moves() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..12, 0..30)
}

fn line_is_complete(board: &Board, line: [Position; 3]) -> bool {
    let sq = board.get(line[0]);
    sq != Square::Empty && sq == board.get(line[1]) && sq == board.get(line[2])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Status is exactly one variant and agrees with the board.
    #[test]
    fn prop_status_matches_board(board in arb_board()) {
        let any_line = WINNING_LINES.iter().any(|line| line_is_complete(&board, *line));
        match derive_status(&board) {
            GameStatus::Won { player, line } => {
                prop_assert!(line_is_complete(&board, line));
                prop_assert_eq!(board.get(line[0]), Square::Occupied(player));
                let first = WINNING_LINES
                    .iter()
                    .position(|l| line_is_complete(&board, *l));
                prop_assert_eq!(first.map(|i| WINNING_LINES[i]), Some(line));
            }
            GameStatus::Draw => {
                prop_assert!(is_full(&board));
                prop_assert!(!any_line);
            }
            GameStatus::InProgress => {
                prop_assert!(!is_full(&board));
                prop_assert!(!any_line);
            }
        }
    }

    // Rejected moves leave board and turn untouched; accepted moves fill
    // exactly one previously empty cell.
    #[test]
    fn prop_apply_move_is_noop_or_single_fill(board in arb_board(), index in 0usize..12) {
        let (next, turn) = apply_move(&board, Player::X, index);
        let acceptable = Position::from_index(index)
            .is_some_and(|pos| board.is_empty(pos))
            && !derive_status(&board).is_over();

        if acceptable {
            prop_assert_eq!(next.filled(), board.filled() + 1);
            prop_assert_eq!(turn, Player::O);
            prop_assert_eq!(next.get(Position::ALL[index]), Square::Occupied(Player::X));
        } else {
            prop_assert_eq!(next, board);
            prop_assert_eq!(turn, Player::X);
        }
    }

    // Turn is X after an even number of accepted moves, O after an odd one;
    // placed cells never change.
    #[test]
    fn prop_turn_alternates(moves in arb_moves()) {
        let mut state = GameState::new();
        let mut accepted = 0usize;

        for index in moves {
            let next = state.apply_move(index);
            for pos in Position::ALL {
                if let Square::Occupied(player) = state.board().get(pos) {
                    prop_assert_eq!(next.board().get(pos), Square::Occupied(player));
                }
            }
            if next != state {
                accepted += 1;
            }
            state = next;

            let expected = if accepted % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(state.turn(), expected);
            prop_assert_eq!(state.board().filled(), accepted);
        }
    }

    // Terminal states absorb every move.
    #[test]
    fn prop_terminal_states_absorb_moves(moves in arb_moves(), extra in 0usize..9) {
        let state = moves
            .into_iter()
            .fold(GameState::new(), |state, index| state.apply_move(index));
        if state.is_over() {
            prop_assert_eq!(state.apply_move(extra), state);
        }
        prop_assert_eq!(GameState::restart(), GameState::new());
    }
}
