//! Application state and logic.

use crate::input;
use crossterm::event::KeyCode;
use tictactoe_engine::{GameEngine, MoveOutcome, Position};
use tracing::debug;

const PROMPT: &str = "Press 1-9, or move with the arrows and Enter.";

/// Main application state.
///
/// Holds the engine and presentation-only state (cursor, status text). All
/// rule decisions are the engine's.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            status_message: format!("Player X's turn. {PROMPT}"),
            should_quit: false,
        }
    }

    /// Gets the current game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cell the keyboard cursor is on.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('c') => self.clear_scores(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let digit = c.to_digit(10).unwrap_or(0) as usize;
                if let Some(pos) = digit.checked_sub(1).and_then(Position::from_index) {
                    self.select(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Attempts a move at the given position and refreshes the status line.
    pub fn select(&mut self, pos: Position) {
        debug!(%pos, "selecting cell");
        self.cursor = pos;

        self.status_message = match self.engine.play(pos) {
            MoveOutcome::Continue(next) => format!("Player {next}'s turn"),
            MoveOutcome::Win { winner, .. } => {
                format!("Player {winner} wins! Press 'r' for a new round or 'q' to quit.")
            }
            MoveOutcome::Draw => {
                "It's a draw! Press 'r' for a new round or 'q' to quit.".to_string()
            }
            MoveOutcome::Rejected(reason) => format!("Invalid move: {reason}. Try again."),
        };
    }

    /// Starts a new round; scores carry over.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.engine.restart();
        self.status_message = format!("Player X's turn. {PROMPT}");
    }

    /// Clears the scoreboard.
    pub fn clear_scores(&mut self) {
        debug!("clearing scores");
        self.engine.reset_scores();
        self.status_message = "Scores cleared.".to_string();
    }
}
