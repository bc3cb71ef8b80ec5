//! Move outcomes.
//!
//! A move attempt always produces a [`MoveOutcome`], never an error or a
//! panic. Rejection is an expected result: stale or duplicate input events
//! must not be able to corrupt state, so the engine answers them with
//! [`MoveOutcome::Rejected`] and changes nothing.

use crate::rules::WinLine;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Why a move attempt was turned away.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, Serialize, Deserialize,
)]
pub enum RejectReason {
    /// The cell index names no square on the board.
    #[display("position is out of bounds")]
    OutOfBounds,
    /// The square at the position is already occupied.
    #[display("square is already occupied")]
    SquareOccupied,
    /// The game is already over.
    #[display("game is already over")]
    GameOver,
}

/// Result of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was a no-op; state is untouched.
    Rejected(RejectReason),
    /// The move was applied and play passes to the given player.
    Continue(Player),
    /// The move completed a line and won the game.
    Win {
        /// The player who won.
        winner: Player,
        /// The completed line, for highlighting.
        line: WinLine,
    },
    /// The move filled the board with no line completed.
    Draw,
}

impl MoveOutcome {
    /// Returns true if the move was turned away.
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected(_))
    }

    /// Returns the winner if this move ended the game with one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            MoveOutcome::Win { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}
