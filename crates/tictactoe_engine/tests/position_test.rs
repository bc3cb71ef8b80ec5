//! Tests for board positions.

use tictactoe_engine::{Board, Player, Position, Square};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_index_round_trip() {
    for index in 0..9 {
        let pos = Position::from_index(index).unwrap();
        assert_eq!(pos.to_index(), index);
        assert_eq!(pos.row() * 3 + pos.col(), index);
    }
}

#[test]
fn test_row_col() {
    assert_eq!((Position::TopLeft.row(), Position::TopLeft.col()), (0, 0));
    assert_eq!((Position::Center.row(), Position::Center.col()), (1, 1));
    assert_eq!(
        (Position::BottomCenter.row(), Position::BottomCenter.col()),
        (2, 1)
    );
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 9); // All positions valid on empty board
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7); // 2 occupied, 7 free
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_display_uses_labels() {
    assert_eq!(Position::TopLeft.to_string(), "Top-left");
    assert_eq!(Position::Center.to_string(), "Center");
}
