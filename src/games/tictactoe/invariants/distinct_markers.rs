//! Distinct markers invariant: the two players never share a marker.

use super::super::Match;
use super::Invariant;

/// Invariant: each marker identifies exactly one player.
pub struct DistinctMarkersInvariant;

impl Invariant<Match> for DistinctMarkersInvariant {
    fn holds(game: &Match) -> bool {
        let [first, second] = game.players();
        first.marker() != second.marker()
    }

    fn description() -> &'static str {
        "Players hold distinct markers"
    }
}
