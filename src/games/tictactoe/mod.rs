//! Tic-tac-toe: board, rules, players and the match state machine.
//!
//! The board and rule checks are pure. Players only choose positions; the
//! [`Match`] applies them, scores finished rounds and records history.

pub mod action;
pub mod history;
pub mod invariants;
pub mod orchestrator;
pub mod phases;
pub mod players;
pub mod position;
pub mod rules;
pub mod strategy;
pub mod types;

pub use action::{Move, MoveError};
pub use history::{History, MatchRecords, RoundRecord};
pub use orchestrator::{Match, MatchError, MatchSnapshot, RoundReport, TurnEvent};
pub use phases::{MatchPhase, RoundOutcome};
pub use players::{
    Automated, Interactive, MoveContext, MoveSource, Player, PlayerKind, PlayerSnapshot,
    validate_choice,
};
pub use position::Position;
pub use strategy::{Strategy, choose_move};
pub use types::{Board, Cell, Marker, MarkerError};
