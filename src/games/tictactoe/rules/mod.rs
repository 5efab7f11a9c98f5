//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from board storage so the opponent strategies and the match
//! state machine can share them.

pub mod draw;
pub mod lines;
pub mod opportunity;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{Line, WINNING_LINES};
pub use opportunity::opportunity_position;
pub use win::winning_marker;
