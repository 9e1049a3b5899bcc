//! Heuristic strategy: one-ply lookahead.
//!
//! Priority order:
//! 1. Complete a line for our side.
//! 2. Occupy the square that would complete a line for the opponent.
//! 3. Any empty square at random.
//!
//! It does not look past the opponent's immediate reply, so forks still beat it.

use super::super::rules::has_three;
use super::super::{Board, GameError, Move, Side};
use super::random::random_cell;
use rand::Rng;
use tracing::{debug, instrument};

/// First empty square (ascending) that gives `side` three in a row.
pub fn winning_cell(board: &Board, side: Side) -> Option<usize> {
    board
        .empty_cells()
        .into_iter()
        .find(|&i| has_three(&board.apply(i, side), side))
}

/// Strategy that wins when it can, blocks when it must, otherwise plays randomly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heuristic {
    side: Side,
}

impl Heuristic {
    /// Creates a heuristic strategy for `side`.
    pub fn new(side: Side) -> Self {
        Self { side }
    }

    /// Side this strategy plays.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Selects a move by the win / block / random priority.
    #[instrument(skip(self, board, rng), fields(side = %self.side))]
    pub fn select_move<R>(&self, board: &Board, rng: &mut R) -> Result<Move, GameError>
    where
        R: Rng + ?Sized,
    {
        let index = if let Some(i) = winning_cell(board, self.side) {
            debug!(index = i, "Taking winning square");
            i
        } else if let Some(i) = winning_cell(board, self.side.opponent()) {
            debug!(index = i, "Blocking opponent");
            i
        } else {
            let i = random_cell(board, self.side, rng)?;
            debug!(index = i, "No threats, random choice");
            i
        };

        Move::from_index(index).ok_or(GameError::NoMovesAvailable(self.side))
    }
}
