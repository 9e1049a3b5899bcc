//! Moves and move errors for tic-tac-toe.
//!
//! A move is just a coordinate. Which side plays it is decided by the
//! controller from the board, never by the move itself.

use super::types::{BOARD_SIZE, Side};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a (row, col) pair, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row from the top (0-2).
    pub row: usize,
    /// Column from the left (0-2).
    pub col: usize,
}

impl Move {
    /// Creates a new move. Bounds are checked when the move is played.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a board index (0-8) into a move.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < BOARD_SIZE).then(|| Self::new(index / 3, index % 3))
    }

    /// Board index of this move, if it lies on the board.
    pub fn index(&self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then(|| self.row * 3 + self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error raised while selecting or applying a move.
///
/// Apart from `InputClosed`, these signal that a caller broke the move
/// contract. They abort the turn rather than being coerced into a legal move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The game has already reached a terminal state.
    #[display("Game is already over")]
    GameOver,

    /// The move points outside the 3x3 grid.
    #[display("Move {} is outside the board", _0)]
    OutOfBounds(Move),

    /// The targeted square is already taken.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Move),

    /// A strategy was asked to move on a full board.
    #[display("No empty squares left for {}", _0)]
    NoMovesAvailable(Side),

    /// An interactive side was asked to move but no input is attached.
    #[display("No input source attached for {}", _0)]
    NoInputSource(Side),

    /// The input provider ran out of input before producing a move.
    #[display("Input closed before {} made a move", _0)]
    InputClosed(Side),
}

impl std::error::Error for GameError {}
