//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Marker};
use super::WINNING_LINES;
use tracing::instrument;

/// Checks if a marker fills a winning line.
///
/// Lines are scanned rows first, then columns, then diagonals; the first
/// uniformly marked line decides. Returns `None` otherwise.
#[instrument(skip(board))]
pub fn winning_marker(board: &Board) -> Option<Marker> {
    for [a, b, c] in WINNING_LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return cell.marker();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_marker(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Marker::X);
        board.place(Position::TopCenter, Marker::X);
        board.place(Position::TopRight, Marker::X);
        assert_eq!(winning_marker(&board), Some(Marker::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.place(Position::TopRight, Marker::O);
        board.place(Position::Center, Marker::O);
        board.place(Position::BottomLeft, Marker::O);
        assert_eq!(winning_marker(&board), Some(Marker::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Marker::X);
        board.place(Position::TopCenter, Marker::O);
        board.place(Position::TopRight, Marker::X);
        assert_eq!(winning_marker(&board), None);
    }

    #[test]
    fn test_custom_marker_wins_column() {
        let hash = Marker::new('#').unwrap();
        let mut board = Board::new();
        board.place(Position::TopCenter, hash);
        board.place(Position::Center, hash);
        board.place(Position::BottomCenter, hash);
        assert_eq!(winning_marker(&board), Some(hash));
    }
}
