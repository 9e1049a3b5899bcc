//! Minimax strategy: exhaustive game-tree search without pruning.

use super::super::rules::has_three;
use super::super::types::BOARD_SIZE;
use super::super::{Board, GameError, Move, Side};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Score of a position the searching side has won.
pub const WIN_SCORE: i32 = 10;
/// Score of a position the searching side has lost.
pub const LOSS_SCORE: i32 = -10;
/// Score of a full board with no winner.
pub const DRAW_SCORE: i32 = 0;

const CENTER: Move = Move { row: 1, col: 1 };

/// Scores `board` from `me`'s point of view with `to_move` about to play.
///
/// `me` maximizes, the opponent minimizes.
pub fn score(board: &Board, to_move: Side, me: Side) -> i32 {
    if has_three(board, me) {
        return WIN_SCORE;
    }
    if has_three(board, me.opponent()) {
        return LOSS_SCORE;
    }

    let children = (0..BOARD_SIZE)
        .filter(|&i| board.is_empty(i))
        .map(|i| score(&board.apply(i, to_move), to_move.opponent(), me));

    let best = if to_move == me {
        children.max()
    } else {
        children.min()
    };

    best.unwrap_or(DRAW_SCORE)
}

/// Strategy that plays a move with the best guaranteed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    side: Side,
}

impl Minimax {
    /// Creates a minimax strategy for `side`.
    pub fn new(side: Side) -> Self {
        Self { side }
    }

    /// Side this strategy plays.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Scores every empty square for this side, ascending by index.
    pub fn scored_cells(&self, board: &Board) -> Vec<(usize, i32)> {
        board
            .empty_cells()
            .into_iter()
            .map(|i| {
                let child = board.apply(i, self.side);
                (i, score(&child, self.side.opponent(), self.side))
            })
            .collect()
    }

    /// Selects a best-scoring square, breaking ties at random.
    ///
    /// An empty board always gets the center.
    #[instrument(skip(self, board, rng), fields(side = %self.side))]
    pub fn select_move<R>(&self, board: &Board, rng: &mut R) -> Result<Move, GameError>
    where
        R: Rng + ?Sized,
    {
        if board.empty_cells().len() == BOARD_SIZE {
            debug!("Opening in the center");
            return Ok(CENTER);
        }

        let scored = self.scored_cells(board);
        let best = scored
            .iter()
            .map(|&(_, s)| s)
            .max()
            .ok_or(GameError::NoMovesAvailable(self.side))?;
        let ties: Vec<usize> = scored
            .iter()
            .filter(|&&(_, s)| s == best)
            .map(|&(i, _)| i)
            .collect();

        let index = *ties
            .choose(rng)
            .ok_or(GameError::NoMovesAvailable(self.side))?;
        debug!(index, best, candidates = ties.len(), "Minimax choice");

        Move::from_index(index).ok_or(GameError::NoMovesAvailable(self.side))
    }
}
