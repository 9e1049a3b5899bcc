//! Move-selection strategies.
//!
//! The set of strategies is closed, so dispatch is a plain enum match
//! rather than a trait object.

mod difficulty;
mod heuristic;
mod interactive;
mod minimax;
mod random;

pub use difficulty::Difficulty;
pub use heuristic::{Heuristic, winning_cell};
pub use interactive::{Interactive, MoveSource};
pub use minimax::{DRAW_SCORE, LOSS_SCORE, Minimax, WIN_SCORE, score};
pub use random::RandomStrategy;

use super::{Board, GameError, Move, Side};
use rand::Rng;
use tracing::instrument;

/// A side's move-selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Moves come from a [`MoveSource`].
    Interactive(Interactive),
    /// Uniformly random moves.
    Random(RandomStrategy),
    /// Win, else block, else random.
    Heuristic(Heuristic),
    /// Exhaustive minimax.
    Minimax(Minimax),
}

impl Strategy {
    /// Builds the strategy for a difficulty level.
    #[instrument]
    pub fn new(difficulty: Difficulty, side: Side) -> Self {
        match difficulty {
            Difficulty::Interactive => Strategy::Interactive(Interactive::new(side)),
            Difficulty::Easy => Strategy::Random(RandomStrategy::new(side)),
            Difficulty::Medium => Strategy::Heuristic(Heuristic::new(side)),
            Difficulty::Hard => Strategy::Minimax(Minimax::new(side)),
        }
    }

    /// Side this strategy plays.
    pub fn side(&self) -> Side {
        match self {
            Strategy::Interactive(s) => s.side(),
            Strategy::Random(s) => s.side(),
            Strategy::Heuristic(s) => s.side(),
            Strategy::Minimax(s) => s.side(),
        }
    }

    /// Difficulty level this strategy corresponds to.
    pub fn difficulty(&self) -> Difficulty {
        match self {
            Strategy::Interactive(_) => Difficulty::Interactive,
            Strategy::Random(_) => Difficulty::Easy,
            Strategy::Heuristic(_) => Difficulty::Medium,
            Strategy::Minimax(_) => Difficulty::Hard,
        }
    }

    /// Selects a move for this strategy's side.
    ///
    /// `input` is only consulted by interactive strategies; `rng` only by
    /// the automated ones.
    pub fn select_move<R, I>(
        &self,
        board: &Board,
        rng: &mut R,
        input: &mut I,
    ) -> Result<Move, GameError>
    where
        R: Rng + ?Sized,
        I: MoveSource + ?Sized,
    {
        match self {
            Strategy::Interactive(s) => s.select_move(board, input),
            Strategy::Random(s) => s.select_move(board, rng),
            Strategy::Heuristic(s) => s.select_move(board, rng),
            Strategy::Minimax(s) => s.select_move(board, rng),
        }
    }
}

/// Builds a strategy from a difficulty token.
///
/// Unknown tokens produce an interactive strategy.
pub fn create_strategy(difficulty: &str, side: Side) -> Strategy {
    Strategy::new(Difficulty::from_token(difficulty), side)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_maps_difficulties() {
        assert!(matches!(create_strategy("easy", Side::X), Strategy::Random(_)));
        assert!(matches!(create_strategy("medium", Side::X), Strategy::Heuristic(_)));
        assert!(matches!(create_strategy("hard", Side::O), Strategy::Minimax(_)));
        assert!(matches!(
            create_strategy("interactive", Side::O),
            Strategy::Interactive(_)
        ));
    }

    #[test]
    fn test_factory_falls_back_to_interactive() {
        let strategy = create_strategy("grandmaster", Side::O);
        assert_eq!(strategy, Strategy::Interactive(Interactive::new(Side::O)));
    }

    #[test]
    fn test_side_and_difficulty_preserved() {
        let strategy = Strategy::new(Difficulty::Medium, Side::O);
        assert_eq!(strategy.side(), Side::O);
        assert_eq!(strategy.difficulty(), Difficulty::Medium);
    }
}
