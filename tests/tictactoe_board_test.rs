//! Tests for the board, positions and rule checks.

use strum::IntoEnumIterator;
use ttt_match::games::tictactoe::rules::{WINNING_LINES, is_draw};
use ttt_match::{Board, Cell, Marker, Position};

/// Builds a board from nine characters, `.` for empty.
fn board(layout: &str) -> Board {
    let mut board = Board::new();
    for (pos, symbol) in Position::ALL.into_iter().zip(layout.chars()) {
        if symbol != '.' {
            board.place(pos, Marker::new(symbol).unwrap());
        }
    }
    board
}

#[test]
fn test_position_numbers_round_trip() {
    for pos in Position::iter() {
        assert_eq!(Position::from_number(pos.number()), Some(pos));
        assert_eq!(Position::from_index(pos.to_index()), Some(pos));
    }
    assert_eq!(Position::from_number(0), None);
    assert_eq!(Position::from_number(10), None);
    assert_eq!(Position::parse_number(" 5 "), Some(Position::Center));
    assert_eq!(Position::parse_number("five"), None);
}

#[test]
fn test_unmarked_positions_and_full() {
    let mut board = Board::new();
    assert_eq!(board.unmarked_positions().len(), 9);
    assert!(!board.is_full());

    board.place(Position::TopLeft, Marker::X);
    board.place(Position::Center, Marker::O);
    let free = board.unmarked_positions();
    assert_eq!(free.len(), 7);
    assert!(!free.contains(&Position::TopLeft));
    assert!(!free.contains(&Position::Center));

    let full = board_full_draw();
    assert!(full.unmarked_positions().is_empty());
    assert!(full.is_full());
}

fn board_full_draw() -> Board {
    board("XOXXOOOXX")
}

#[test]
fn test_every_line_wins() {
    for line in WINNING_LINES {
        let mut board = Board::new();
        for pos in line {
            board.place(pos, Marker::O);
        }
        assert_eq!(board.winning_marker(), Some(Marker::O));
    }
}

#[test]
fn test_mixed_line_does_not_win() {
    assert_eq!(board("XXO......").winning_marker(), None);
    assert_eq!(board("X...X...O").winning_marker(), None);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = board_full_draw();
    assert_eq!(board.winning_marker(), None);
    assert!(is_draw(&board));
}

#[test]
fn test_full_board_with_line_is_not_draw() {
    let board = board("XXXOOXXOO");
    assert_eq!(board.winning_marker(), Some(Marker::X));
    assert!(!is_draw(&board));
}

#[test]
fn test_opportunity_needs_two_and_an_empty() {
    let board = board("XX.......");
    assert!(board.has_opportunity(Marker::X));
    assert_eq!(board.opportunity_position(Marker::X), Some(Position::TopRight));
    assert!(!board.has_opportunity(Marker::O));

    let blocked = self::board("XXO......");
    assert_eq!(blocked.opportunity_position(Marker::X), None);
}

#[test]
fn test_reset_clears_every_cell() {
    let mut board = board("XO.......");
    board.reset();
    assert!(board.cells().iter().all(|cell| *cell == Cell::Empty));
}

#[test]
fn test_custom_markers_on_board() {
    let star = Marker::new('*').unwrap();
    let board = board("***......");
    assert_eq!(board.winning_marker(), Some(star));
    assert!(board.to_string().contains("[4]"));
}
