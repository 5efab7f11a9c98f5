//! Append-only record of finished rounds, grouped by match.

use super::players::PlayerSnapshot;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One finished round, frozen at the moment it concluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RoundRecord {
    /// Round number within its match.
    round_number: u32,
    /// First player after the round's score update.
    first: PlayerSnapshot,
    /// Second player after the round's score update.
    second: PlayerSnapshot,
    /// Human-readable one-line summary.
    summary: String,
}

impl RoundRecord {
    /// Builds a record and its summary line.
    pub fn new(round_number: u32, first: PlayerSnapshot, second: PlayerSnapshot) -> Self {
        let summary = format!(
            "Round {}: Score {} - {}. {}, {}.",
            round_number,
            first.score(),
            second.score(),
            first,
            second
        );
        Self {
            round_number,
            first,
            second,
            summary,
        }
    }
}

impl std::fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary)
    }
}

/// All rounds recorded for one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MatchRecords {
    /// The match these rounds belong to.
    match_number: u32,
    /// Rounds in the order they were recorded.
    rounds: Vec<RoundRecord>,
}

/// Round records keyed by match number, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    matches: Vec<MatchRecords>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a round under `match_number`, starting a new group if needed.
    ///
    /// Numbers are taken as given; callers keep them monotonic.
    #[instrument(skip(self, first, second))]
    pub fn record_round(
        &mut self,
        match_number: u32,
        round_number: u32,
        first: PlayerSnapshot,
        second: PlayerSnapshot,
    ) {
        let record = RoundRecord::new(round_number, first, second);
        debug!(summary = %record.summary, "Recording round");

        match self
            .matches
            .iter_mut()
            .find(|group| group.match_number == match_number)
        {
            Some(group) => group.rounds.push(record),
            None => self.matches.push(MatchRecords {
                match_number,
                rounds: vec![record],
            }),
        }
    }

    /// Every match's rounds, matches in first-recorded order.
    pub fn all_records(&self) -> &[MatchRecords] {
        &self.matches
    }

    /// Rounds recorded for one match, if any.
    pub fn rounds_for(&self, match_number: u32) -> Option<&[RoundRecord]> {
        self.matches
            .iter()
            .find(|group| group.match_number == match_number)
            .map(|group| group.rounds.as_slice())
    }

    /// Number of matches with at least one round.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Total rounds across all matches.
    pub fn round_count(&self) -> usize {
        self.matches.iter().map(|group| group.rounds.len()).sum()
    }

    /// Checks if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
