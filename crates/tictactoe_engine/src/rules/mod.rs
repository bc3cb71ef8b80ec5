//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating game state according to tic-tac-toe rules.
//! Rules are separated from board storage so they can be tested and reused
//! without an engine instance.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, WinLine, check_winner};
