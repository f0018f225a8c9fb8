//! Short highlight on the cell that was just filled.
//!
//! Purely cosmetic. The app starts one after each accepted move and drops it
//! on the first tick past its duration; the game model never sees it.

use crate::games::tictactoe::Position;
use std::time::{Duration, Instant};

/// A running move pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePulse {
    position: Position,
    started: Instant,
    duration: Duration,
}

impl MovePulse {
    /// Starts a pulse on `position` at `started`.
    pub fn new(position: Position, started: Instant, duration: Duration) -> Self {
        Self {
            position,
            started,
            duration,
        }
    }

    /// The highlighted cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// True until `duration` has elapsed since the pulse started.
    pub fn is_active(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < self.duration
    }
}
