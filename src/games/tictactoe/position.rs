//! Board positions for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the 3x3 board.
///
/// Players see positions numbered 1-9 in row-major order; the board stores
/// them at indices 0-8.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The center cell, preferred by the heuristic opponent.
    pub const CENTER: Position = Position::Center;

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Returns the player-facing cell number (1-9).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Creates position from board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a player-facing cell number (1-9).
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::from_index(index as usize))
    }

    /// Parses a cell number typed by a player, ignoring surrounding whitespace.
    #[instrument]
    pub fn parse_number(input: &str) -> Option<Self> {
        input.trim().parse::<u8>().ok().and_then(Self::from_number)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!(Position::TopLeft.number(), 1);
        assert_eq!(Position::Center.number(), 5);
        assert_eq!(Position::BottomRight.number(), 9);
    }

    #[test]
    fn test_from_number_bounds() {
        assert_eq!(Position::from_number(0), None);
        assert_eq!(Position::from_number(1), Some(Position::TopLeft));
        assert_eq!(Position::from_number(9), Some(Position::BottomRight));
        assert_eq!(Position::from_number(10), None);
    }

    #[test]
    fn test_all_matches_enum_order() {
        let iterated: Vec<Position> = Position::iter().collect();
        assert_eq!(iterated, Position::ALL.to_vec());
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
        }
    }

    #[test]
    fn test_parse_number_trims_input() {
        assert_eq!(Position::parse_number(" 5\n"), Some(Position::Center));
        assert_eq!(Position::parse_number("five"), None);
        assert_eq!(Position::parse_number("-1"), None);
    }
}
