//! Known markers invariant: the board only holds the players' markers.

use super::super::Match;
use super::Invariant;

/// Invariant: every marked cell belongs to one of the two players.
pub struct KnownMarkersInvariant;

impl Invariant<Match> for KnownMarkersInvariant {
    fn holds(game: &Match) -> bool {
        game.board()
            .cells()
            .iter()
            .filter_map(|cell| cell.marker())
            .all(|marker| game.players().iter().any(|player| player.marker() == marker))
    }

    fn description() -> &'static str {
        "Marked cells belong to a player"
    }
}
