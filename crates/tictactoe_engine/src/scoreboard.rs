//! Win counters.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Running win counters for both players.
///
/// Lives for the lifetime of the engine: [`crate::GameEngine::restart`]
/// leaves it alone, only [`ScoreBoard::reset`] clears it. Draws are not
/// counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    x_wins: u32,
    o_wins: u32,
}

impl ScoreBoard {
    /// Creates a scoreboard with both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the win count for the given player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Credits the given player with a win.
    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }

    /// Sets both counters back to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
