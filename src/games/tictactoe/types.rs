//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Markers that make an automated opponent switch from `O` to `X`.
const LOOKS_LIKE_O: [char; 5] = ['Q', 'D', 'o', 'O', '0'];

/// A single-character symbol identifying a player's marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "char", into = "char")]
pub struct Marker(char);

impl Marker {
    /// The conventional first marker.
    pub const X: Marker = Marker('X');
    /// The conventional second marker.
    pub const O: Marker = Marker('O');

    /// Creates a marker, rejecting digits and whitespace.
    #[instrument]
    pub fn new(symbol: char) -> Result<Self, MarkerError> {
        if symbol.is_ascii_digit() {
            return Err(MarkerError::Digit(symbol));
        }
        if symbol.is_whitespace() || symbol.is_control() {
            return Err(MarkerError::Blank);
        }
        Ok(Self(symbol))
    }

    /// Parses a marker typed by a player.
    ///
    /// Surrounding whitespace is ignored; what remains must be exactly one
    /// character.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, MarkerError> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(MarkerError::Blank),
            (Some(symbol), None) => Self::new(symbol),
            (Some(_), Some(_)) => Err(MarkerError::TooLong(input.trim().to_string())),
        }
    }

    /// Returns the marker's symbol.
    pub fn symbol(self) -> char {
        self.0
    }

    /// Picks the marker an automated opponent uses against `self`.
    ///
    /// `X` when `self` could be mistaken for an `O`, otherwise `O`. The result
    /// never equals `self`.
    pub fn counterpart(self) -> Marker {
        if LOOKS_LIKE_O.contains(&self.0) {
            Marker::X
        } else {
            Marker::O
        }
    }
}

impl TryFrom<char> for Marker {
    type Error = MarkerError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::new(symbol)
    }
}

impl From<Marker> for char {
    fn from(marker: Marker) -> Self {
        marker.0
    }
}

/// Why a marker was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MarkerError {
    /// Nothing but whitespace was supplied.
    #[display("Marker must be a visible character")]
    Blank,
    /// More than one character was supplied.
    #[display("Marker must be one character long, got {:?}", _0)]
    TooLong(String),
    /// Digits would be confused with cell numbers.
    #[display("Marker cannot be a digit, got '{}'", _0)]
    Digit(char),
}

impl std::error::Error for MarkerError {}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Marked(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (indices 0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a position is still unmarked.
    pub fn is_unmarked(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Marks `pos` with `marker`.
    ///
    /// The caller guarantees `pos` is unmarked (it comes from
    /// [`Board::unmarked_positions`]).
    #[instrument(skip_all, fields(position = pos.number(), marker = %marker))]
    pub fn place(&mut self, pos: Position, marker: Marker) {
        debug_assert!(self.is_unmarked(pos), "placing on marked cell {}", pos);
        self.cells[pos.to_index()] = Cell::Marked(marker);
    }

    /// All unmarked positions in ascending order.
    pub fn unmarked_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_unmarked(*pos))
            .collect()
    }

    /// Checks if every position is marked.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the marker filling a winning line, if any.
    pub fn winning_marker(&self) -> Option<Marker> {
        rules::winning_marker(self)
    }

    /// Checks whether `marker` can complete a line with one more mark.
    pub fn has_opportunity(&self, marker: Marker) -> bool {
        self.opportunity_position(marker).is_some()
    }

    /// Returns the empty cell of the first line `marker` can complete.
    pub fn opportunity_position(&self, marker: Marker) -> Option<Position> {
        rules::opportunity_position(self, marker)
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        trace!("Resetting board");
        self.cells = [Cell::Empty; 9];
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    /// Draws the grid, showing free cells as `[n]` so players can see their options.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in Position::ALL.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "-----|-----|-----")?;
            }
            writeln!(f, "     |     |")?;
            let rendered: Vec<String> = chunk
                .iter()
                .map(|pos| match self.get(*pos) {
                    Cell::Empty => format!("[{}]", pos.number()),
                    Cell::Marked(marker) => format!(" {} ", marker),
                })
                .collect();
            writeln!(f, " {} ", rendered.join(" | "))?;
            writeln!(f, "     |     |")?;
        }
        Ok(())
    }
}
