//! Interactive strategy backed by an external input provider.

use super::super::{Board, GameError, Move, Side};
use tracing::{debug, instrument};

/// Supplies moves for an interactive side.
///
/// Implementors own all input validation: a returned move must be on the
/// board and target an empty square. Re-prompting on bad input happens
/// inside the implementation, never in the engine.
pub trait MoveSource {
    /// Requests the next move for `side` on `board`.
    fn request_move(&mut self, board: &Board, side: Side) -> Result<Move, GameError>;
}

impl<T: MoveSource + ?Sized> MoveSource for &mut T {
    fn request_move(&mut self, board: &Board, side: Side) -> Result<Move, GameError> {
        (**self).request_move(board, side)
    }
}

/// Strategy that forwards every decision to a [`MoveSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interactive {
    side: Side,
}

impl Interactive {
    /// Creates an interactive strategy for `side`.
    pub fn new(side: Side) -> Self {
        Self { side }
    }

    /// Side this strategy plays.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Asks the input provider for a move.
    #[instrument(skip(self, board, input), fields(side = %self.side))]
    pub fn select_move<I>(&self, board: &Board, input: &mut I) -> Result<Move, GameError>
    where
        I: MoveSource + ?Sized,
    {
        let mv = input.request_move(board, self.side)?;
        debug!(%mv, "Input provider chose move");
        Ok(mv)
    }
}
