//! Player whose moves come from the input collaborator.

use super::{MoveContext, MoveSource, PlayerKind};
use crate::games::tictactoe::action::MoveError;
use crate::games::tictactoe::{Board, Position};
use crate::prompt::Prompter;
use tracing::{instrument, warn};

/// Moves chosen by a person through a [`Prompter`].
#[derive(Debug)]
pub struct Interactive {
    prompter: Box<dyn Prompter>,
}

impl Interactive {
    /// Creates an interactive source backed by `prompter`.
    pub fn new(prompter: impl Prompter + 'static) -> Self {
        Self {
            prompter: Box::new(prompter),
        }
    }
}

/// Accepts `pos` only if it is still unmarked on `board`.
pub fn validate_choice(board: &Board, pos: Position) -> Result<Position, MoveError> {
    if board.is_unmarked(pos) {
        Ok(pos)
    } else {
        Err(MoveError::InvalidMove(pos))
    }
}

impl MoveSource for Interactive {
    /// Offers every unmarked cell and returns the chosen one.
    ///
    /// A collaborator that answers with a marked cell is asked again.
    #[instrument(skip(self, board))]
    fn produce_move(&mut self, board: &Board, context: MoveContext) -> Result<Position, MoveError> {
        let valid = board.unmarked_positions();
        if valid.is_empty() {
            return Err(MoveError::NoValidMoves);
        }

        loop {
            let choice = self.prompter.request_cell_choice(&valid)?;
            match validate_choice(board, choice) {
                Ok(pos) => return Ok(pos),
                Err(err) => warn!(error = %err, "Rejected cell choice, asking again"),
            }
        }
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Marker;
    use crate::prompt::ScriptedPrompter;

    fn context() -> MoveContext {
        MoveContext {
            own: Marker::X,
            opponent: Marker::O,
        }
    }

    #[test]
    fn test_returns_scripted_cell() {
        let board = Board::new();
        let mut source = Interactive::new(ScriptedPrompter::cells([Position::BottomLeft]));
        assert_eq!(
            source.produce_move(&board, context()).unwrap(),
            Position::BottomLeft
        );
    }

    #[test]
    fn test_marked_cell_is_requested_again() {
        let mut board = Board::new();
        board.place(Position::Center, Marker::O);
        let mut source = Interactive::new(ScriptedPrompter::cells([
            Position::Center,
            Position::TopRight,
        ]));
        assert_eq!(
            source.produce_move(&board, context()).unwrap(),
            Position::TopRight
        );
    }

    #[test]
    fn test_exhausted_input_propagates() {
        let board = Board::new();
        let mut source = Interactive::new(ScriptedPrompter::default());
        assert!(matches!(
            source.produce_move(&board, context()),
            Err(MoveError::Input(_))
        ));
    }

    #[test]
    fn test_validate_choice() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Marker::X);
        assert!(matches!(
            validate_choice(&board, Position::TopLeft),
            Err(MoveError::InvalidMove(Position::TopLeft))
        ));
        assert_eq!(validate_choice(&board, Position::Center).unwrap(), Position::Center);
    }
}
