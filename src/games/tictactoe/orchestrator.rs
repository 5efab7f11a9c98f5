//! Match orchestration: turns, rounds, scores and match completion.
//!
//! A [`Match`] owns the board, both players and the history. It is the only
//! place the board is mutated and the only place scores change.

use super::action::{Move, MoveError};
use super::history::History;
#[cfg(debug_assertions)]
use super::invariants::{InvariantSet, MatchInvariants};
use super::phases::{MatchPhase, RoundOutcome};
use super::players::{Player, PlayerSnapshot};
use super::{Board, Marker};
use crate::config::{MatchConfig, Seat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What a single turn produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// A mark was placed and play passes to `next`.
    Moved {
        /// The move just applied.
        mv: Move,
        /// Marker to move next.
        next: Marker,
    },
    /// A mark was placed and it ended the round.
    RoundConcluded {
        /// The move just applied.
        mv: Move,
        /// Result of the round.
        report: RoundReport,
    },
}

/// Everything a display needs about a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RoundReport {
    /// Match the round belonged to.
    match_number: u32,
    /// Round number within the match.
    round_number: u32,
    /// Win or draw.
    outcome: RoundOutcome,
    /// The board as the round ended.
    final_board: Board,
    /// Both players after the score update.
    scores: [PlayerSnapshot; 2],
    /// Set when this round decided the match.
    match_winner: Option<Marker>,
}

/// Serializable view of a match for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MatchSnapshot {
    /// Current match number.
    match_number: u32,
    /// Current round number.
    round_number: u32,
    /// Rounds needed to win the match.
    win_score: u32,
    /// Current board.
    board: Board,
    /// Both players.
    players: [PlayerSnapshot; 2],
    /// Current phase.
    phase: MatchPhase,
}

/// Errors from driving a match.
#[derive(Debug, Clone, derive_more::Display)]
pub enum MatchError {
    /// Both players were given the same marker.
    #[display("Players cannot share marker '{}'", _0)]
    DuplicateMarker(Marker),

    /// The marker does not belong to either player.
    #[display("No player holds marker '{}'", _0)]
    UnknownMarker(Marker),

    /// A match cannot be won with a threshold below one.
    #[display("Win score must be at least 1, got {}", _0)]
    InvalidWinScore(u32),

    /// The operation does not apply in the current phase.
    #[display("Expected {} but the match is in {:?}", expected, phase)]
    WrongPhase {
        /// What the operation needs.
        expected: &'static str,
        /// Where the match actually is.
        phase: MatchPhase,
    },

    /// The active player could not produce a move.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Move(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveError> for MatchError {
    fn from(err: MoveError) -> Self {
        MatchError::Move(err)
    }
}

/// Two players competing over rounds until one reaches the win score.
///
/// Within a match the first mover is fixed and every round starts from it.
/// When a player reaches the threshold both scores return to zero and the
/// board clears, ready for [`Match::start_next_match`].
#[derive(Debug)]
pub struct Match {
    pub(crate) players: [Player; 2],
    pub(crate) board: Board,
    pub(crate) win_score: u32,
    pub(crate) first_mover: Marker,
    pub(crate) match_number: u32,
    pub(crate) round_number: u32,
    pub(crate) phase: MatchPhase,
    pub(crate) history: History,
}

impl Match {
    /// Starts match 1, round 1 with both scores at zero.
    ///
    /// # Errors
    ///
    /// [`MatchError::DuplicateMarker`] if the players share a marker and
    /// [`MatchError::UnknownMarker`] if `first_mover` belongs to neither.
    /// [`MatchError::InvalidWinScore`] if the threshold is zero.
    #[instrument(skip_all, fields(first = %first.name(), second = %second.name(), first_mover = %first_mover))]
    pub fn new(
        first: Player,
        second: Player,
        first_mover: Marker,
        config: &MatchConfig,
    ) -> Result<Self, MatchError> {
        if first.marker() == second.marker() {
            return Err(MatchError::DuplicateMarker(first.marker()));
        }
        if first_mover != first.marker() && first_mover != second.marker() {
            return Err(MatchError::UnknownMarker(first_mover));
        }
        if *config.win_score() < 1 {
            return Err(MatchError::InvalidWinScore(*config.win_score()));
        }

        let mut players = [first, second];
        for player in &mut players {
            player.reset_score();
        }

        info!(win_score = config.win_score(), "Starting match");
        Ok(Self {
            players,
            board: Board::new(),
            win_score: *config.win_score(),
            first_mover,
            match_number: 1,
            round_number: 1,
            phase: MatchPhase::AwaitingMove {
                active: first_mover,
            },
            history: History::new(),
        })
    }

    /// Lets the active player move once.
    ///
    /// The player picks a cell, the match marks it, then checks for a win or
    /// a full board. A concluded round is scored and recorded in history.
    ///
    /// # Errors
    ///
    /// [`MatchError::WrongPhase`] unless a move is awaited (nothing changes),
    /// or [`MatchError::Move`] if the player could not produce a move.
    #[instrument(skip(self), fields(match_number = self.match_number, round = self.round_number))]
    pub fn play_turn(&mut self) -> Result<TurnEvent, MatchError> {
        let active = self
            .phase
            .active()
            .ok_or_else(|| self.wrong_phase("a move"))?;
        let mover = self.index_of(active);
        let opponent = self.players[1 - mover].marker();

        let position = self.players[mover].produce_move(&self.board, opponent)?;
        self.board.place(position, active);
        let mv = Move::new(active, position);
        debug!(%mv, "Applied move");

        let event = match self.board.winning_marker() {
            Some(winner) => TurnEvent::RoundConcluded {
                mv,
                report: self.conclude_round(RoundOutcome::Winner(winner)),
            },
            None if self.board.is_full() => TurnEvent::RoundConcluded {
                mv,
                report: self.conclude_round(RoundOutcome::Draw),
            },
            None => {
                self.phase = MatchPhase::AwaitingMove { active: opponent };
                TurnEvent::Moved { mv, next: opponent }
            }
        };

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(event)
    }

    /// Plays turns until the current round ends.
    pub fn play_round(&mut self) -> Result<RoundReport, MatchError> {
        loop {
            if let TurnEvent::RoundConcluded { report, .. } = self.play_turn()? {
                return Ok(report);
            }
        }
    }

    /// Clears the board for the next round of the same match.
    ///
    /// Turn order restarts from the match's first mover.
    #[instrument(skip(self), fields(match_number = self.match_number, round = self.round_number))]
    pub fn reset_round(&mut self) -> Result<(), MatchError> {
        if !matches!(self.phase, MatchPhase::RoundConcluded { .. }) {
            return Err(self.wrong_phase("a concluded round"));
        }

        self.board.reset();
        self.round_number += 1;
        self.phase = MatchPhase::AwaitingMove {
            active: self.first_mover,
        };
        debug!(round = self.round_number, "Round reset");
        Ok(())
    }

    /// Begins a new match after the previous one concluded.
    #[instrument(skip(self), fields(match_number = self.match_number))]
    pub fn start_next_match(&mut self, first_mover: Marker) -> Result<(), MatchError> {
        if !matches!(self.phase, MatchPhase::MatchConcluded { .. }) {
            return Err(self.wrong_phase("a concluded match"));
        }
        if self.player(first_mover).is_none() {
            return Err(MatchError::UnknownMarker(first_mover));
        }

        for player in &mut self.players {
            player.reset_score();
        }
        self.board.reset();
        self.match_number += 1;
        self.round_number = 1;
        self.first_mover = first_mover;
        self.phase = MatchPhase::AwaitingMove {
            active: first_mover,
        };
        info!(match_number = self.match_number, "Starting next match");
        Ok(())
    }

    /// Returns the marker of the player in `seat`.
    pub fn seat_marker(&self, seat: Seat) -> Marker {
        seat.pick(self.players[0].marker(), self.players[1].marker())
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players in seat order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player holding `marker`.
    pub fn player(&self, marker: Marker) -> Option<&Player> {
        self.players.iter().find(|player| player.marker() == marker)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Returns the marker to move, if a move is awaited.
    pub fn to_move(&self) -> Option<Marker> {
        self.phase.active()
    }

    /// Returns the marker that opens every round of this match.
    pub fn first_mover(&self) -> Marker {
        self.first_mover
    }

    /// Returns the current match number (starting at 1).
    pub fn match_number(&self) -> u32 {
        self.match_number
    }

    /// Returns the current round number within the match (starting at 1).
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Returns the rounds needed to win the match.
    pub fn win_score(&self) -> u32 {
        self.win_score
    }

    /// Returns every round recorded so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Copies out the state a display needs.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            match_number: self.match_number,
            round_number: self.round_number,
            win_score: self.win_score,
            board: self.board.clone(),
            players: self.player_snapshots(),
            phase: self.phase,
        }
    }

    fn conclude_round(&mut self, outcome: RoundOutcome) -> RoundReport {
        if let Some(winner) = outcome.winner() {
            let index = self.index_of(winner);
            self.players[index].record_win();
        }

        let scores = self.player_snapshots();
        let [first, second] = scores.clone();
        self.history
            .record_round(self.match_number, self.round_number, first, second);

        let final_board = self.board.clone();
        let win_score = self.win_score;
        let match_winner = self
            .players
            .iter()
            .find(|player| player.score() >= win_score)
            .map(Player::marker);

        match match_winner {
            Some(winner) => {
                info!(%winner, match_number = self.match_number, "Match concluded");
                for player in &mut self.players {
                    player.reset_score();
                }
                self.board.reset();
                self.phase = MatchPhase::MatchConcluded { winner };
            }
            None => {
                info!(%outcome, round = self.round_number, "Round concluded");
                self.phase = MatchPhase::RoundConcluded { outcome };
            }
        }

        RoundReport {
            match_number: self.match_number,
            round_number: self.round_number,
            outcome,
            final_board,
            scores,
            match_winner,
        }
    }

    fn player_snapshots(&self) -> [PlayerSnapshot; 2] {
        [self.players[0].snapshot(), self.players[1].snapshot()]
    }

    fn index_of(&self, marker: Marker) -> usize {
        if self.players[0].marker() == marker { 0 } else { 1 }
    }

    fn wrong_phase(&self, expected: &'static str) -> MatchError {
        MatchError::WrongPhase {
            expected,
            phase: self.phase,
        }
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        let result = MatchInvariants::check_all(self);
        debug_assert!(result.is_ok(), "Match invariants violated: {:?}", result);
    }
}
