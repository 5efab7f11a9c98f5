//! Bounded scores invariant: no score passes the win threshold.

use super::super::Match;
use super::Invariant;

/// Invariant: scores stay below the threshold while a match is live.
///
/// A score equal to the threshold ends the match and resets both scores, so
/// between turns every score is strictly below it.
pub struct BoundedScoresInvariant;

impl Invariant<Match> for BoundedScoresInvariant {
    fn holds(game: &Match) -> bool {
        game.players()
            .iter()
            .all(|player| player.score() < game.win_score())
    }

    fn description() -> &'static str {
        "Scores stay below the win threshold"
    }
}
