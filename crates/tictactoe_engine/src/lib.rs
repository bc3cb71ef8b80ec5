//! Pure tic-tac-toe game logic.
//!
//! [`GameEngine`] owns the board, turn order, win/draw evaluation, and the
//! running scoreboard. It depends on no rendering surface: a frontend maps
//! its input events to a [`Position`] (or a raw 0-8 index), calls
//! [`GameEngine::play`], and renders from the returned [`MoveOutcome`] and
//! the query methods. The same engine drives a terminal UI, a command-line
//! harness, or a test suite unchanged.

mod engine;
mod outcome;
mod position;
pub mod rules;
mod scoreboard;
mod types;

pub use engine::GameEngine;
pub use outcome::{MoveOutcome, RejectReason};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, check_winner, is_draw, is_full};
pub use scoreboard::ScoreBoard;
pub use types::{Board, GameStatus, Player, Square};
