//! Line detection for tic-tac-toe.

use super::super::{Board, Side, Square};
use tracing::instrument;

/// The eight winning lines as board indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Contents of every line, in the order of [`LINES`].
pub fn line_values(board: &Board) -> [[Square; 3]; 8] {
    let squares = board.squares();
    LINES.map(|line| line.map(|i| squares[i]))
}

/// Returns true if `side` owns a complete line.
///
/// The same check answers "did I win" and, with the opponent's side,
/// "did I lose".
pub fn has_three(board: &Board, side: Side) -> bool {
    let mark = Square::Occupied(side);
    line_values(board)
        .iter()
        .any(|line| line.iter().all(|&sq| sq == mark))
}

/// Checks if there is a winner on the board.
///
/// X is checked first. Boards reached by alternating legal moves never
/// have two winners.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Side> {
    [Side::X, Side::O]
        .into_iter()
        .find(|&side| has_three(board, side))
}
