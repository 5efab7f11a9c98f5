//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A player supplies a position;
//! the match turns it into a [`Move`] and applies it to the board.

use super::{Marker, Position};
use crate::prompt::PromptError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a marker placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The marker being placed.
    pub marker: Marker,
    /// The position where the marker is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(marker: Marker, position: Position) -> Self {
        Self { marker, position }
    }

    /// Returns the marker being placed.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.position.label())
    }
}

/// Error that can occur while a player produces a move.
#[derive(Debug, Clone, derive_more::Display)]
pub enum MoveError {
    /// The position is already marked.
    #[display("Position {} is already marked", _0)]
    InvalidMove(Position),

    /// There is nowhere left to play.
    #[display("No unmarked positions remain")]
    NoValidMoves,

    /// The input collaborator failed.
    #[display("{}", _0)]
    Input(PromptError),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Input(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PromptError> for MoveError {
    fn from(err: PromptError) -> Self {
        MoveError::Input(err)
    }
}
