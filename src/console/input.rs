//! Coordinate parsing for interactive play.
//!
//! Players type `<col> <row>`: columns count 1-3 from the left, rows
//! count 1-3 from the bottom.

use crate::games::tictactoe::{Board, Move};

/// Reasons a line of coordinate input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InputProblem {
    /// Not exactly two numbers.
    #[display("You should enter numbers!")]
    NotNumbers,
    /// A number outside 1-3.
    #[display("Coordinates should be from 1 to 3!")]
    OutOfRange,
    /// The square is taken.
    #[display("This cell is occupied! Choose another one!")]
    Occupied,
}

impl std::error::Error for InputProblem {}

/// Parses a `<col> <row>` line into a move on `board`.
pub fn parse_coordinates(line: &str, board: &Board) -> Result<Move, InputProblem> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[x, y] = tokens.as_slice() else {
        return Err(InputProblem::NotNumbers);
    };
    if ![x, y]
        .iter()
        .all(|token| token.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(InputProblem::NotNumbers);
    }

    // All-digit tokens too large for u32 are out of range, not malformed.
    let (Ok(x), Ok(y)) = (x.parse::<u32>(), y.parse::<u32>()) else {
        return Err(InputProblem::OutOfRange);
    };
    if !(1..=3).contains(&x) || !(1..=3).contains(&y) {
        return Err(InputProblem::OutOfRange);
    }

    let mv = Move::new((3 - y) as usize, (x - 1) as usize);
    match mv.index() {
        Some(index) if board.is_empty(index) => Ok(mv),
        _ => Err(InputProblem::Occupied),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Side;

    #[test]
    fn test_bottom_left_origin() {
        let board = Board::new();
        assert_eq!(parse_coordinates("1 1", &board), Ok(Move::new(2, 0)));
        assert_eq!(parse_coordinates("1 3", &board), Ok(Move::new(0, 0)));
        assert_eq!(parse_coordinates("3 3", &board), Ok(Move::new(0, 2)));
        assert_eq!(parse_coordinates(" 2   2 ", &board), Ok(Move::new(1, 1)));
    }

    #[test]
    fn test_rejects_non_numbers() {
        let board = Board::new();
        assert_eq!(parse_coordinates("one two", &board), Err(InputProblem::NotNumbers));
        assert_eq!(parse_coordinates("1", &board), Err(InputProblem::NotNumbers));
        assert_eq!(parse_coordinates("1 2 3", &board), Err(InputProblem::NotNumbers));
        assert_eq!(parse_coordinates("", &board), Err(InputProblem::NotNumbers));
        assert_eq!(parse_coordinates("-1 2", &board), Err(InputProblem::NotNumbers));
    }

    #[test]
    fn test_rejects_signed_numbers() {
        let board = Board::new();
        assert_eq!(parse_coordinates("+1 2", &board), Err(InputProblem::NotNumbers));
        assert_eq!(parse_coordinates("1 +2", &board), Err(InputProblem::NotNumbers));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let board = Board::new();
        assert_eq!(parse_coordinates("0 1", &board), Err(InputProblem::OutOfRange));
        assert_eq!(parse_coordinates("2 4", &board), Err(InputProblem::OutOfRange));
        assert_eq!(
            parse_coordinates("99999999999 1", &board),
            Err(InputProblem::OutOfRange)
        );
    }

    #[test]
    fn test_rejects_occupied() {
        let board = Board::new().apply(4, Side::X);
        assert_eq!(parse_coordinates("2 2", &board), Err(InputProblem::Occupied));
    }
}
