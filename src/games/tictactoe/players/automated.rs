//! Player whose moves come from a [`Strategy`].

use super::{MoveContext, MoveSource, PlayerKind};
use crate::games::tictactoe::action::MoveError;
use crate::games::tictactoe::{Board, Position, Strategy};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, instrument};

/// Moves chosen by a strategy with its own random source.
#[derive(Debug, Clone)]
pub struct Automated {
    strategy: Strategy,
    rng: StdRng,
}

impl Automated {
    /// Creates an automated source seeded from the OS.
    #[instrument]
    pub fn new(strategy: Strategy) -> Self {
        Self::with_seed(strategy, rand::random::<u64>())
    }

    /// Creates an automated source with a fixed seed.
    #[instrument]
    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        debug!("Seeding automated player");
        Self {
            strategy,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for Automated {
    #[instrument(skip(self, board), fields(strategy = %self.strategy))]
    fn produce_move(&mut self, board: &Board, context: MoveContext) -> Result<Position, MoveError> {
        self.strategy
            .choose(board, context.own, context.opponent, &mut self.rng)
            .ok_or(MoveError::NoValidMoves)
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Automated
    }
}
