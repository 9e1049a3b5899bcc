//! Text rendering of boards and results.

use crate::games::tictactoe::{BOARD_SIZE, Board};

const RULE: &str = "---------";

/// Renders a board as a framed 3x3 grid.
///
/// ```text
/// ---------
/// | X O   |
/// |   X   |
/// |     O |
/// ---------
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(64);
    out.push_str(RULE);
    out.push('\n');
    for row in board.squares().chunks(BOARD_SIZE / 3) {
        let cells: Vec<String> = row.iter().map(|sq| sq.symbol().to_string()).collect();
        out.push_str("| ");
        out.push_str(&cells.join(" "));
        out.push_str(" |\n");
    }
    out.push_str(RULE);
    out.push('\n');
    out
}
