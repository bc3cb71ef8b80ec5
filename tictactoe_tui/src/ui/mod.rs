//! Stateless UI rendering.

pub mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Player, Position};

/// Splits the frame into title / scores / board / status chunks.
///
/// Shared with mouse hit-testing so clicks and pixels agree on geometry.
fn layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(1),  // Scores
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Status
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Renders the whole page.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title_area, score_area, board_area, status_area] = layout(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let engine = app.engine();
    let score_line = Paragraph::new(format!(
        "X: {}   O: {}   ('c' clears scores)",
        engine.score_of(Player::X),
        engine.score_of(Player::O)
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(score_line, score_area);

    board::draw_board(frame, board_area, app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}

/// Maps a click at (column, row) on the full frame to the cell under it.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Position> {
    let [_, _, board_area, _] = layout(area);
    board::hit_test(board_area, column, row)
}
