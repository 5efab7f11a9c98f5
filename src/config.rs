//! Match configuration.

use crate::games::tictactoe::Strategy;
use crate::prompt::{PromptError, Prompter};
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which of the two seats moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The first player passed to the match (the human in a console game).
    First,
    /// The second player passed to the match.
    Second,
}

impl Seat {
    /// Returns whichever of `first` and `second` belongs to this seat.
    pub fn pick<T>(self, first: T, second: T) -> T {
        match self {
            Seat::First => first,
            Seat::Second => second,
        }
    }
}

/// How the first mover of each match is decided.
///
/// Re-applied at the start of every match, so `Random` draws again each time.
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
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FirstMoverPolicy {
    /// Ask whether to choose; pick at random if not.
    #[default]
    Ask,
    /// The first seat always starts.
    PlayerOne,
    /// The second seat always starts.
    PlayerTwo,
    /// Flip a coin.
    Random,
}

impl FirstMoverPolicy {
    /// Decides who starts the next match.
    #[instrument(skip(prompter, rng))]
    pub fn resolve<R: Rng + ?Sized>(
        self,
        prompter: &mut dyn Prompter,
        rng: &mut R,
    ) -> Result<Seat, PromptError> {
        let seat = match self {
            FirstMoverPolicy::PlayerOne => Seat::First,
            FirstMoverPolicy::PlayerTwo => Seat::Second,
            FirstMoverPolicy::Random => random_seat(rng),
            FirstMoverPolicy::Ask => {
                if prompter.request_yes_no("Do you want to decide who makes the first move?")? {
                    if prompter.request_yes_no("Do you want to move first?")? {
                        Seat::First
                    } else {
                        Seat::Second
                    }
                } else {
                    random_seat(rng)
                }
            }
        };
        debug!(?seat, "Resolved first mover");
        Ok(seat)
    }
}

fn random_seat<R: Rng + ?Sized>(rng: &mut R) -> Seat {
    if rng.random_bool(0.5) {
        Seat::First
    } else {
        Seat::Second
    }
}

/// Settings fixed for the lifetime of a match.
///
/// Every deserialized config passes the same validation as the builders.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawMatchConfig")]
pub struct MatchConfig {
    /// Rounds a player must win to take the match.
    win_score: u32,

    /// How the first mover is chosen at each match start.
    first_mover: FirstMoverPolicy,

    /// Strategy for the automated opponent.
    strategy: Strategy,

    /// Seed for the automated opponent and coin flips.
    seed: Option<u64>,

    /// Name for the automated opponent; asked for when absent.
    computer_name: Option<String>,
}

/// Unvalidated config as it appears on disk.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMatchConfig {
    #[serde(default = "default_win_score")]
    win_score: u32,
    #[serde(default)]
    first_mover: FirstMoverPolicy,
    #[serde(default)]
    strategy: Strategy,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    computer_name: Option<String>,
}

impl TryFrom<RawMatchConfig> for MatchConfig {
    type Error = ConfigError;

    fn try_from(raw: RawMatchConfig) -> Result<Self, Self::Error> {
        Self {
            win_score: raw.win_score,
            first_mover: raw.first_mover,
            strategy: raw.strategy,
            seed: raw.seed,
            computer_name: raw.computer_name,
        }
        .validate()
    }
}

#[instrument]
fn default_win_score() -> u32 {
    2
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            win_score: default_win_score(),
            first_mover: FirstMoverPolicy::default(),
            strategy: Strategy::default(),
            seed: None,
            computer_name: None,
        }
    }
}

impl MatchConfig {
    /// Creates a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(win_score = config.win_score, strategy = %config.strategy, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Sets the win threshold.
    pub fn with_win_score(mut self, win_score: u32) -> Result<Self, ConfigError> {
        self.win_score = win_score;
        self.validate()
    }

    /// Sets the first-mover policy.
    pub fn with_first_mover(mut self, first_mover: FirstMoverPolicy) -> Self {
        self.first_mover = first_mover;
        self
    }

    /// Sets the automated opponent's strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the automated opponent's name.
    pub fn with_computer_name(mut self, name: impl Into<String>) -> Self {
        self.computer_name = Some(name.into());
        self
    }

    #[track_caller]
    fn validate(self) -> Result<Self, ConfigError> {
        if self.win_score == 0 {
            return Err(ConfigError::new("win_score must be at least 1"));
        }
        if self
            .computer_name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err(ConfigError::new("computer_name cannot be blank"));
        }
        Ok(self)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{ScriptedAnswer, ScriptedPrompter};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(*config.win_score(), 2);
        assert_eq!(*config.first_mover(), FirstMoverPolicy::Ask);
        assert_eq!(*config.strategy(), Strategy::Heuristic);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = MatchConfig::from_toml_str("win_score = 3\nfirst_mover = \"random\"").unwrap();
        assert_eq!(*config.win_score(), 3);
        assert_eq!(*config.first_mover(), FirstMoverPolicy::Random);
        assert_eq!(*config.strategy(), Strategy::Heuristic);
    }

    #[test]
    fn test_zero_win_score_rejected() {
        assert!(MatchConfig::from_toml_str("win_score = 0").is_err());
        assert!(MatchConfig::new().with_win_score(0).is_err());
    }

    #[test]
    fn test_zero_win_score_rejected_by_every_deserializer() {
        assert!(toml::from_str::<MatchConfig>("win_score = 0").is_err());
        assert!(serde_json::from_str::<MatchConfig>(r#"{"win_score":0}"#).is_err());
        assert!(serde_json::from_str::<MatchConfig>(r#"{"computer_name":" "}"#).is_err());

        let config = serde_json::from_str::<MatchConfig>(r#"{"win_score":1}"#).unwrap();
        assert_eq!(*config.win_score(), 1);
    }

    #[test]
    fn test_match_rejects_zero_win_score() {
        use crate::games::tictactoe::{Marker, Match, MatchError, Player};

        let config = MatchConfig {
            win_score: 0,
            ..MatchConfig::default()
        };
        let x = Player::automated("One", Marker::X, Strategy::Heuristic, Some(1));
        let o = Player::automated("Two", Marker::O, Strategy::Heuristic, Some(2));
        assert!(matches!(
            Match::new(x, o, Marker::O, &config),
            Err(MatchError::InvalidWinScore(0))
        ));
    }

    #[test]
    fn test_seat_pick() {
        assert_eq!(Seat::First.pick('a', 'b'), 'a');
        assert_eq!(Seat::Second.pick('a', 'b'), 'b');
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = MatchConfig::from_toml_str("board_size = 4").unwrap_err();
        assert!(err.message.contains("parse"));
    }

    #[test]
    fn test_ask_policy_with_explicit_choice() {
        let mut prompter =
            ScriptedPrompter::new([ScriptedAnswer::YesNo(true), ScriptedAnswer::YesNo(false)]);
        let mut rng = StdRng::seed_from_u64(0);
        let seat = FirstMoverPolicy::Ask.resolve(&mut prompter, &mut rng).unwrap();
        assert_eq!(seat, Seat::Second);
    }

    #[test]
    fn test_ask_policy_declined_falls_back_to_random() {
        let mut prompter = ScriptedPrompter::new([ScriptedAnswer::YesNo(false)]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(FirstMoverPolicy::Ask.resolve(&mut prompter, &mut rng).is_ok());
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_fixed_policies_do_not_prompt() {
        let mut prompter = ScriptedPrompter::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            FirstMoverPolicy::PlayerOne.resolve(&mut prompter, &mut rng).unwrap(),
            Seat::First
        );
        assert_eq!(
            FirstMoverPolicy::PlayerTwo.resolve(&mut prompter, &mut rng).unwrap(),
            Seat::Second
        );
    }

    #[test]
    fn test_random_policy_reaches_both_seats() {
        let mut prompter = ScriptedPrompter::default();
        let mut rng = StdRng::seed_from_u64(11);
        let seats: Vec<Seat> = (0..32)
            .map(|_| FirstMoverPolicy::Random.resolve(&mut prompter, &mut rng).unwrap())
            .collect();
        assert!(seats.contains(&Seat::First));
        assert!(seats.contains(&Seat::Second));
    }
}
