//! Tic-tac-toe grid rendering and hit-testing.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as Point, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tictactoe_engine::{Player, Position, Square};

const BOARD_WIDTH: u16 = 41;
const BOARD_HEIGHT: u16 = 11;

/// Renders the centered 3x3 grid.
pub fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    draw_grid_lines(frame, area);

    let engine = app.engine();
    let winning = engine.winning_line();

    for (pos, cell_area) in cell_rects(area) {
        let (symbol, base_style) = match engine.cell(pos) {
            // Empty squares show their 1-based number as a hint.
            Square::Empty => (
                (pos.to_index() + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Occupied(Player::X) => (
                "X".to_string(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Square::Occupied(Player::O) => (
                "O".to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };

        let on_winning_line = winning.is_some_and(|line| line.contains(&pos));
        let under_cursor = pos == app.cursor() && !engine.status().is_terminal();
        let style = if on_winning_line {
            base_style.bg(Color::Yellow).fg(Color::Black)
        } else if under_cursor {
            base_style.bg(Color::White).fg(Color::Black)
        } else {
            base_style
        };

        // Center the mark on the middle line of the cell.
        let text_area = Rect {
            y: cell_area.y + cell_area.height / 2,
            height: 1,
            ..cell_area
        };
        let paragraph = Paragraph::new(symbol)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, text_area);
    }
}

/// Screen rectangles for the 9 cells, in position order.
pub fn cell_rects(area: Rect) -> [(Position, Rect); 9] {
    let rows = grid_rows(area);
    let mut out = [(Position::TopLeft, Rect::default()); 9];

    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = grid_cols(row_area);
        for (c, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            let index = r * 3 + c;
            if let Some(pos) = Position::from_index(index) {
                out[index] = (pos, cell_area);
            }
        }
    }
    out
}

/// Maps a click at (column, row) to the cell under it.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Position> {
    let point = Point::new(column, row);
    cell_rects(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(point))
        .map(|(pos, _)| pos)
}

fn draw_grid_lines(frame: &mut Frame, area: Rect) {
    let rows = grid_rows(area);

    for sep_row in [rows[1], rows[3]] {
        let sep = Paragraph::new("─".repeat(BOARD_WIDTH as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, sep_row);
    }

    for row_area in [rows[0], rows[2], rows[4]] {
        let cols = grid_cols(row_area);
        for sep_col in [cols[1], cols[3]] {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, sep_col);
        }
    }
}

fn grid_rows(area: Rect) -> std::rc::Rc<[Rect]> {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area)
}

fn grid_cols(row_area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(row_area)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
