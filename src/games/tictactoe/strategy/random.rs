//! Random strategy: uniform over the empty squares.

use super::super::{Board, GameError, Move, Side};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks a uniformly random empty square.
pub(super) fn random_cell<R>(board: &Board, side: Side, rng: &mut R) -> Result<usize, GameError>
where
    R: Rng + ?Sized,
{
    board
        .empty_cells()
        .choose(rng)
        .copied()
        .ok_or(GameError::NoMovesAvailable(side))
}

/// Strategy that plays any empty square with equal probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomStrategy {
    side: Side,
}

impl RandomStrategy {
    /// Creates a random strategy for `side`.
    pub fn new(side: Side) -> Self {
        Self { side }
    }

    /// Side this strategy plays.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Selects a random empty square.
    #[instrument(skip(self, board, rng), fields(side = %self.side))]
    pub fn select_move<R>(&self, board: &Board, rng: &mut R) -> Result<Move, GameError>
    where
        R: Rng + ?Sized,
    {
        let index = random_cell(board, self.side, rng)?;
        debug!(index, "Random choice");
        Move::from_index(index).ok_or(GameError::NoMovesAvailable(self.side))
    }
}
