//! Players: identity and score, plus a pluggable source of moves.

mod automated;
mod interactive;

pub use automated::Automated;
pub use interactive::{Interactive, validate_choice};

use super::action::MoveError;
use super::{Board, Marker, Position, Strategy};
use crate::prompt::Prompter;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How a player decides on moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves come from the input collaborator.
    Interactive,
    /// Moves come from a strategy.
    Automated,
}

/// Markers involved in the move being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveContext {
    /// The moving player's marker.
    pub own: Marker,
    /// The other player's marker.
    pub opponent: Marker,
}

/// Something that can pick a cell to mark.
///
/// Implementations only choose; the match applies the choice to the board.
pub trait MoveSource: std::fmt::Debug {
    /// Returns a position that is unmarked on `board`.
    fn produce_move(&mut self, board: &Board, context: MoveContext) -> Result<Position, MoveError>;

    /// Returns what kind of player this source backs.
    fn kind(&self) -> PlayerKind;
}

/// A participant in a match.
#[derive(Debug)]
pub struct Player {
    name: String,
    marker: Marker,
    score: u32,
    source: Box<dyn MoveSource>,
}

impl Player {
    /// Creates a player with a score of zero.
    ///
    /// `name` is trimmed and must not be blank.
    #[instrument(skip_all, fields(name = %name.as_ref(), marker = %marker))]
    pub fn new(name: impl AsRef<str>, marker: Marker, source: Box<dyn MoveSource>) -> Self {
        let name = name.as_ref().trim().to_string();
        debug_assert!(!name.is_empty(), "Player name must not be blank");
        Self {
            name,
            marker,
            score: 0,
            source,
        }
    }

    /// Creates a player whose moves come from `prompter`.
    pub fn interactive(name: impl AsRef<str>, marker: Marker, prompter: impl Prompter + 'static) -> Self {
        Self::new(name, marker, Box::new(Interactive::new(prompter)))
    }

    /// Creates a player driven by `strategy`, seeded for reproducible play when `seed` is set.
    pub fn automated(name: impl AsRef<str>, marker: Marker, strategy: Strategy, seed: Option<u64>) -> Self {
        let source = match seed {
            Some(seed) => Automated::with_seed(strategy, seed),
            None => Automated::new(strategy),
        };
        Self::new(name, marker, Box::new(source))
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Returns the rounds won in the current match.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns how this player picks moves.
    pub fn kind(&self) -> PlayerKind {
        self.source.kind()
    }

    /// Copies out name, marker and score.
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot::new(self.name.clone(), self.marker, self.score)
    }

    #[instrument(skip(self, board), fields(player = %self.name, marker = %self.marker))]
    pub(crate) fn produce_move(&mut self, board: &Board, opponent: Marker) -> Result<Position, MoveError> {
        let context = MoveContext {
            own: self.marker,
            opponent,
        };
        let pos = self.source.produce_move(board, context)?;
        debug!(position = pos.number(), "Player chose position");
        Ok(pos)
    }

    pub(crate) fn record_win(&mut self) {
        self.score += 1;
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }
}

/// A player's name, marker and score at one moment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct PlayerSnapshot {
    /// Player name.
    name: String,
    /// Player marker.
    marker: Marker,
    /// Score at snapshot time.
    score: u32,
}

impl std::fmt::Display for PlayerSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;

    #[test]
    fn test_new_player_starts_at_zero() {
        let player = Player::automated("Computer", Marker::O, Strategy::Heuristic, Some(1));
        assert_eq!(player.score(), 0);
        assert_eq!(player.kind(), PlayerKind::Automated);
    }

    #[test]
    fn test_name_is_trimmed() {
        let player = Player::interactive("  Ann ", Marker::X, ScriptedPrompter::default());
        assert_eq!(player.name(), "Ann");
        assert_eq!(player.kind(), PlayerKind::Interactive);
    }

    #[test]
    fn test_score_changes_only_through_match_hooks() {
        let mut player = Player::automated("Computer", Marker::O, Strategy::Random, Some(3));
        player.record_win();
        player.record_win();
        assert_eq!(player.snapshot().score(), &2);
        player.reset_score();
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_produce_move_does_not_touch_board() {
        let board = Board::new();
        let mut player = Player::automated("Computer", Marker::O, Strategy::Heuristic, Some(9));
        let pos = player.produce_move(&board, Marker::X).unwrap();
        assert_eq!(pos, Position::Center);
        assert_eq!(board, Board::new());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Player name must not be blank")]
    fn test_blank_name_rejected() {
        Player::automated("   ", Marker::O, Strategy::Random, Some(0));
    }

    #[test]
    fn test_snapshot_display() {
        let snapshot = PlayerSnapshot::new("Ann".to_string(), Marker::X, 1);
        assert_eq!(snapshot.to_string(), "Ann (X)");
    }
}
