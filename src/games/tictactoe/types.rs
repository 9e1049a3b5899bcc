//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Side of the board a player marks with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Side {
    /// Side X (moves first).
    X,
    /// Side O (moves second).
    O,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a side.
    Occupied(Side),
}

impl Square {
    /// Single-character symbol used by text renderers.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Side::X) => 'X',
            Square::Occupied(Side::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: [`Board::apply`] returns a new board and leaves
/// the original untouched, so strategies can explore hypothetical positions
/// without cloning game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE],
        }
    }

    /// Builds a board from row-major squares.
    pub fn from_squares(squares: [Square; BOARD_SIZE]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Indices of every empty square, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..BOARD_SIZE).filter(|&i| self.is_empty(i)).collect()
    }

    /// Returns a copy of this board with `side` placed at `index`.
    ///
    /// The square must be empty. Callers choose from [`Board::empty_cells`];
    /// anything else is a bug in the caller.
    pub fn apply(&self, index: usize, side: Side) -> Board {
        debug_assert!(self.is_empty(index), "square {index} is not empty");
        let mut next = *self;
        next.squares[index] = Square::Occupied(side);
        next
    }

    /// Number of squares occupied by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(side))
            .count()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Side whose turn it is: X moves whenever it has not placed more marks than O.
    pub fn side_to_move(&self) -> Side {
        if self.count(Side::X) <= self.count(Side::O) {
            Side::X
        } else {
            Side::O
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.squares
            .iter()
            .try_for_each(|square| write!(f, "{}", square.symbol()))
    }
}
