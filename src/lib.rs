//! Tic-tac-toe match engine.
//!
//! A small library for playing best-of-N tic-tac-toe between a prompted
//! human and a heuristic computer opponent (or two computers).
//!
//! # Architecture
//!
//! - **Games**: board, rule checks, strategies, players and the [`Match`]
//!   state machine
//! - **Prompt**: the [`Prompter`] contract for player input, with a scripted
//!   implementation for tests
//! - **Console**: terminal prompter and text rendering
//! - **Config**: [`MatchConfig`] loaded from TOML
//!
//! # Example
//!
//! ```
//! use ttt_match::{Marker, Match, MatchConfig, Player, Strategy};
//!
//! let first = Player::automated("One", Marker::X, Strategy::Heuristic, Some(1));
//! let second = Player::automated("Two", Marker::O, Strategy::Heuristic, Some(2));
//! let mut game = Match::new(first, second, Marker::X, &MatchConfig::default())?;
//! let report = game.play_round()?;
//! assert_eq!(*report.round_number(), 1);
//! # Ok::<(), ttt_match::MatchError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod console;
pub mod games;
pub mod prompt;

// Crate-level exports - Configuration
pub use config::{ConfigError, FirstMoverPolicy, MatchConfig, Seat};

// Crate-level exports - Console front end
pub use console::{Console, join_or, render_history, render_match, render_round};

// Crate-level exports - Player input
pub use prompt::{PromptError, Prompter, ScriptedAnswer, ScriptedPrompter, SharedPrompter};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, History, Marker, MarkerError, Match, MatchError, MatchPhase, MatchRecords,
    MatchSnapshot, Move, MoveError, Player, PlayerKind, PlayerSnapshot, Position, RoundOutcome,
    RoundRecord, RoundReport, Strategy, TurnEvent,
};
