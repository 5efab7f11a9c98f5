//! Contract between the game engine and whatever collects player input.
//!
//! The engine never re-prompts. Implementations own their retry loops and
//! hand back values that already satisfy the request (a cell from the
//! offered list, a yes/no answer, non-empty text when asked for it).

use crate::games::tictactoe::Position;
use derive_more::{Display, Error};
use std::cell::{RefCell, RefMut};
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, instrument};

/// Supplies validated player decisions to the engine.
pub trait Prompter: std::fmt::Debug {
    /// Asks for one of `valid` (never empty) and returns a member of it.
    fn request_cell_choice(&mut self, valid: &[Position]) -> Result<Position, PromptError>;

    /// Asks a yes/no question.
    fn request_yes_no(&mut self, prompt: &str) -> Result<bool, PromptError>;

    /// Asks for free text, non-blank when `non_empty` is set.
    fn request_free_text(&mut self, prompt: &str, non_empty: bool) -> Result<String, PromptError>;
}

/// Input could not be obtained from the collaborator.
#[derive(Debug, Clone, Display, Error)]
#[display("Prompt error: {} at {}:{}", message, file, line)]
pub struct PromptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PromptError {
    /// Creates a new prompt error with caller location tracking.
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

impl From<std::io::Error> for PromptError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// One pre-recorded answer for a [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    /// Answer to a cell request.
    Cell(Position),
    /// Answer to a yes/no question.
    YesNo(bool),
    /// Answer to a free-text request.
    Text(String),
}

/// Plays back a fixed script of answers, in order.
///
/// A request that does not match the next answer's kind, or that arrives
/// after the script runs out, fails with [`PromptError`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<ScriptedAnswer>,
}

impl ScriptedPrompter {
    /// Creates a prompter that replays `answers`.
    pub fn new(answers: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    /// Creates a prompter that only answers cell requests.
    pub fn cells(cells: impl IntoIterator<Item = Position>) -> Self {
        Self::new(cells.into_iter().map(ScriptedAnswer::Cell))
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    #[track_caller]
    fn next_answer(&mut self, wanted: &str) -> Result<ScriptedAnswer, PromptError> {
        self.answers
            .pop_front()
            .ok_or_else(|| PromptError::new(format!("Script exhausted while waiting for {}", wanted)))
    }
}

impl Prompter for ScriptedPrompter {
    #[instrument(skip(self))]
    fn request_cell_choice(&mut self, valid: &[Position]) -> Result<Position, PromptError> {
        match self.next_answer("a cell")? {
            ScriptedAnswer::Cell(pos) => {
                debug!(position = pos.number(), "Scripted cell");
                Ok(pos)
            }
            other => Err(PromptError::new(format!("Expected a cell, script had {:?}", other))),
        }
    }

    #[instrument(skip(self))]
    fn request_yes_no(&mut self, prompt: &str) -> Result<bool, PromptError> {
        match self.next_answer("yes/no")? {
            ScriptedAnswer::YesNo(answer) => Ok(answer),
            other => Err(PromptError::new(format!("Expected yes/no, script had {:?}", other))),
        }
    }

    #[instrument(skip(self))]
    fn request_free_text(&mut self, prompt: &str, non_empty: bool) -> Result<String, PromptError> {
        match self.next_answer("text")? {
            ScriptedAnswer::Text(text) if non_empty && text.trim().is_empty() => {
                Err(PromptError::new("Scripted text is blank"))
            }
            ScriptedAnswer::Text(text) => Ok(text),
            other => Err(PromptError::new(format!("Expected text, script had {:?}", other))),
        }
    }
}

/// A prompter shared between a player and the shell that owns the terminal.
///
/// Clones hand out the same underlying prompter. Borrows are short: one per
/// request.
#[derive(Debug)]
pub struct SharedPrompter<P> {
    inner: Rc<RefCell<P>>,
}

impl<P> SharedPrompter<P> {
    /// Wraps `prompter` for sharing.
    pub fn new(prompter: P) -> Self {
        Self {
            inner: Rc::new(RefCell::new(prompter)),
        }
    }

    /// Borrows the wrapped prompter mutably.
    ///
    /// Panics if a request is already in flight on this prompter.
    pub fn borrow_mut(&self) -> RefMut<'_, P> {
        self.inner.borrow_mut()
    }
}

impl<P> Clone for SharedPrompter<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<P: Prompter> Prompter for SharedPrompter<P> {
    fn request_cell_choice(&mut self, valid: &[Position]) -> Result<Position, PromptError> {
        self.inner.borrow_mut().request_cell_choice(valid)
    }

    fn request_yes_no(&mut self, prompt: &str) -> Result<bool, PromptError> {
        self.inner.borrow_mut().request_yes_no(prompt)
    }

    fn request_free_text(&mut self, prompt: &str, non_empty: bool) -> Result<String, PromptError> {
        self.inner.borrow_mut().request_free_text(prompt, non_empty)
    }
}
