//! Round and match phases.

use super::Marker;
use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The marker completed a line.
    Winner(Marker),
    /// The board filled up without a line.
    Draw,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            RoundOutcome::Winner(marker) => Some(*marker),
            RoundOutcome::Draw => None,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Winner(marker) => write!(f, "{} wins", marker),
            RoundOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where a match currently stands.
///
/// A turn moves `AwaitingMove` through an in-progress placement to either
/// another `AwaitingMove` or a concluded round. A concluded round either
/// resets into the next round or, once a score hits the threshold, concludes
/// the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for `active` to move.
    AwaitingMove {
        /// Marker whose turn it is.
        active: Marker,
    },
    /// The round ended; the match goes on after a reset.
    RoundConcluded {
        /// How the round ended.
        outcome: RoundOutcome,
    },
    /// A player reached the win-score threshold.
    MatchConcluded {
        /// Marker of the match winner.
        winner: Marker,
    },
}

impl MatchPhase {
    /// Returns the marker to move, if a move is expected.
    pub fn active(&self) -> Option<Marker> {
        match self {
            MatchPhase::AwaitingMove { active } => Some(*active),
            _ => None,
        }
    }

    /// Returns the match winner once the match is over.
    pub fn match_winner(&self) -> Option<Marker> {
        match self {
            MatchPhase::MatchConcluded { winner } => Some(*winner),
            _ => None,
        }
    }
}
