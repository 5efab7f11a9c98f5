//! Move selection for automated players.

use super::{Board, Marker, Position};
use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Named move-selection strategies for automated players.
///
/// Selection is a configuration choice; every strategy only looks at the
/// board it is given.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
    /// Win, else block, else take the center, else play anywhere.
    #[default]
    Heuristic,
    /// Uniformly random unmarked cell.
    Random,
    /// Lowest-numbered unmarked cell.
    FirstAvailable,
}

impl Strategy {
    /// Picks a cell for `own` to mark.
    ///
    /// Returns `None` only when the board is full.
    #[instrument(skip_all, fields(strategy = %self, own = %own, opponent = %opponent))]
    pub fn choose<R: Rng + ?Sized>(
        self,
        board: &Board,
        own: Marker,
        opponent: Marker,
        rng: &mut R,
    ) -> Option<Position> {
        match self {
            Strategy::Heuristic => choose_move(board, own, opponent, rng),
            Strategy::Random => random_move(board, rng),
            Strategy::FirstAvailable => board.unmarked_positions().first().copied(),
        }
    }
}

/// The heuristic opponent's decision, in strict priority order:
///
/// 1. Complete one of its own lines.
/// 2. Block the opponent's line.
/// 3. Take the center.
/// 4. Pick uniformly among all currently unmarked cells.
#[instrument(skip_all, fields(own = %own, opponent = %opponent))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    own: Marker,
    opponent: Marker,
    rng: &mut R,
) -> Option<Position> {
    if let Some(pos) = board.opportunity_position(own) {
        debug!(position = pos.number(), "Taking the win");
        return Some(pos);
    }

    if let Some(pos) = board.opportunity_position(opponent) {
        debug!(position = pos.number(), "Blocking opponent");
        return Some(pos);
    }

    if board.is_unmarked(Position::CENTER) {
        debug!("Taking the center");
        return Some(Position::CENTER);
    }

    random_move(board, rng)
}

fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let pos = board.unmarked_positions().choose(rng).copied();
    debug!(position = ?pos.map(Position::number), "Picked random cell");
    pos
}
