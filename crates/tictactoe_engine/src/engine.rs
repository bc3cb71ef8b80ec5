//! The tic-tac-toe game engine.

use crate::outcome::{MoveOutcome, RejectReason};
use crate::position::Position;
use crate::rules::{WinLine, check_winner, is_full};
use crate::scoreboard::ScoreBoard;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// Owns all game state and pure logic; holds no reference to any rendering
/// surface. Every operation runs to completion synchronously, so a single
/// owner driving it serially needs no further locking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    scores: ScoreBoard,
    winning_line: Option<WinLine>,
}

impl GameEngine {
    /// Creates a new engine: empty board, X to move, zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            scores: ScoreBoard::new(),
            winning_line: None,
        }
    }

    /// Starts a new round: clears the board, X moves first.
    ///
    /// Scores carry over between rounds; use
    /// [`GameEngine::reset_scores`] to clear them.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        debug!("board reset");
    }

    /// Sets both win counters back to zero.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    /// Attempts a move at the given position for the player whose turn it is.
    ///
    /// Never fails: a move on an occupied square or after the game has ended
    /// comes back as [`MoveOutcome::Rejected`] with all state untouched.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> MoveOutcome {
        if !self.board.is_empty(pos) {
            debug!(%pos, "move rejected: square occupied");
            return MoveOutcome::Rejected(RejectReason::SquareOccupied);
        }
        if self.status.is_terminal() {
            debug!(%pos, "move rejected: game over");
            return MoveOutcome::Rejected(RejectReason::GameOver);
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));

        // Win is evaluated before draw: the move that fills the board while
        // completing a line is a win, never a draw.
        if let Some((winner, line)) = check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
            self.winning_line = Some(line);
            self.scores.record_win(winner);
            debug!(%winner, "game won");
            return MoveOutcome::Win { winner, line };
        }

        if is_full(&self.board) {
            self.status = GameStatus::Draw;
            debug!("game drawn");
            return MoveOutcome::Draw;
        }

        self.current_player = player.opponent();
        MoveOutcome::Continue(self.current_player)
    }

    /// Attempts a move at a raw cell index (0-8, row-major).
    ///
    /// Indices originate from external input, so anything out of range is
    /// rejected rather than treated as a programming error.
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(pos) => self.play(pos),
            None => {
                debug!(index, "move rejected: out of bounds");
                MoveOutcome::Rejected(RejectReason::OutOfBounds)
            }
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Unchanged by the winning move: after a win this still names the
    /// winner until the next restart.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the square at the given position.
    pub fn cell(&self, pos: Position) -> Square {
        self.board.get(pos)
    }

    /// Returns the square at a raw cell index, `None` if out of range.
    pub fn cell_at(&self, index: usize) -> Option<Square> {
        Position::from_index(index).map(|pos| self.board.get(pos))
    }

    /// Returns the win count for the given player.
    pub fn score_of(&self, player: Player) -> u32 {
        self.scores.wins(player)
    }

    /// Returns the scoreboard.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Returns the line that won the current round, if any.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
