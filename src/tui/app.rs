//! Application state and logic.

use super::input::Action;
use super::pulse::MovePulse;
use super::theme::Theme;
use crate::config::Settings;
use crate::games::tictactoe::{GameState, Position};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns the one game state plus view-only details: the keyboard cursor, the
/// move pulse and the theme.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    pulse: Option<MovePulse>,
    pulse_duration: Duration,
    theme: Theme,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(settings: &Settings) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            pulse: None,
            pulse_duration: settings.pulse_duration(),
            theme: Theme::light(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The running move pulse, if any.
    pub fn pulse(&self) -> Option<&MovePulse> {
        self.pulse.as_ref()
    }

    /// Palette chosen at startup.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one user action to completion.
    #[instrument(skip(self, now))]
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Place(pos) => self.place(pos, now),
            Action::MoveCursor(pos) => self.cursor = pos,
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Places the current player's mark at `pos`, if the game allows it.
    fn place(&mut self, pos: Position, now: Instant) {
        self.cursor = pos;
        let next = self.game.play(pos);
        if next == self.game {
            debug!(position = %pos, "Move rejected");
            return;
        }

        info!(position = %pos, player = %self.game.turn(), "Move placed");
        self.game = next;
        self.pulse = Some(MovePulse::new(pos, now, self.pulse_duration));
        if self.game.is_over() {
            info!(status = %self.game.status_text(), "Game over");
        }
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = GameState::restart();
        self.pulse = None;
    }

    /// Drops the move pulse once it has run its course.
    #[instrument(skip(self, now))]
    pub fn tick(&mut self, now: Instant) {
        if self.pulse.is_some_and(|pulse| !pulse.is_active(now)) {
            self.pulse = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, Player, Square};

    fn app() -> App {
        App::new(&Settings::default())
    }

    #[test]
    fn test_place_starts_pulse_and_moves_cursor() {
        let mut app = app();
        let now = Instant::now();
        app.apply(Action::Place(Position::TopLeft), now);

        assert_eq!(app.game().board().get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.pulse().map(|p| p.position()), Some(Position::TopLeft));
    }

    #[test]
    fn test_rejected_move_has_no_pulse() {
        let mut app = app();
        let now = Instant::now();
        app.apply(Action::Place(Position::Center), now);
        app.tick(now + Duration::from_secs(1));
        assert!(app.pulse().is_none());

        app.apply(Action::Place(Position::Center), now + Duration::from_secs(2));
        assert!(app.pulse().is_none());
        assert_eq!(app.game().turn(), Player::O);
    }

    #[test]
    fn test_tick_clears_pulse_after_duration() {
        let mut app = app();
        let now = Instant::now();
        app.apply(Action::Place(Position::Center), now);

        app.tick(now + Duration::from_millis(100));
        assert!(app.pulse().is_some());
        app.tick(now + Duration::from_millis(400));
        assert!(app.pulse().is_none());
    }

    #[test]
    fn test_restart_after_win() {
        let mut app = app();
        let now = Instant::now();
        for pos in [0, 3, 1, 4, 2].map(|i| Position::ALL[i]) {
            app.apply(Action::Place(pos), now);
        }
        assert!(matches!(app.game().status(), GameStatus::Won { player: Player::X, .. }));

        app.apply(Action::Restart, now);
        assert_eq!(*app.game(), GameState::new());
        assert!(app.pulse().is_none());
    }

    #[test]
    fn test_quit_and_cursor_actions() {
        let mut app = app();
        let now = Instant::now();
        app.apply(Action::MoveCursor(Position::BottomLeft), now);
        assert_eq!(app.cursor(), Position::BottomLeft);
        assert!(!app.should_quit());

        app.apply(Action::Quit, now);
        assert!(app.should_quit());
    }
}
