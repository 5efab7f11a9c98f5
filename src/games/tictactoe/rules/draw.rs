//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::winning_marker;
use tracing::instrument;

/// Checks if the board is full (no unmarked cells).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_marker(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Marker, Position};

    fn fill(board: &mut Board, layout: &str) {
        for (pos, symbol) in Position::ALL.iter().zip(layout.chars()) {
            if symbol != '.' {
                board.place(*pos, Marker::new(symbol).unwrap());
            }
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert_eq!(board.unmarked_positions().len(), 9);
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Position::Center, Marker::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        fill(&mut board, "XOXOXXOXO");

        assert!(is_full(&board));
        assert!(board.unmarked_positions().is_empty());
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // X wins the top row on a full board
        fill(&mut board, "XXXOOXXOO");

        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
