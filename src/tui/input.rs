//! Maps keys and clicks to app actions.

use super::ui::Hit;
use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Something the user asked the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the current player's mark.
    Place(Position),
    /// Move the keyboard cursor.
    MoveCursor(Position),
    /// Start a new game.
    Restart,
    /// Leave the app.
    Quit,
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Left => col.checked_sub(1).map(|col| (row, col)),
        KeyCode::Right => Some((row, col + 1)),
        KeyCode::Up => row.checked_sub(1).map(|row| (row, col)),
        KeyCode::Down => Some((row + 1, col)),
        _ => None,
    };

    target
        .and_then(|(row, col)| Position::from_row_col(row, col))
        .unwrap_or(cursor)
}

/// Resolves a key press given the current cursor.
pub fn action_for_key(cursor: Position, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Place(cursor)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| Position::from_number(digit as usize))
            .map(Action::Place),
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Some(Action::MoveCursor(move_cursor(cursor, key)))
        }
        _ => None,
    }
}

/// Resolves a left click on a screen element.
pub fn action_for_hit(hit: Hit) -> Action {
    match hit {
        Hit::Cell(pos) => Action::Place(pos),
        Hit::Restart => Action::Restart,
    }
}
