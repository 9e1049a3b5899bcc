//! Game controller for tic-tac-toe.
//!
//! The controller owns the board and one strategy per side. Each turn it
//! asks the side to move for a coordinate, checks it against the board,
//! applies it and then evaluates the position. Once a win or draw has been
//! observed the game is latched terminal and refuses further moves.

use super::rules::{Outcome, evaluate};
use super::strategy::{Difficulty, MoveSource, Strategy};
use super::{Board, GameError, Move, Side};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

/// Output collaborator notified as the game progresses.
pub trait Renderer {
    /// Shows the current board. Called once before the first move and after every move.
    fn display(&mut self, board: &Board);

    /// Announces that an automated side is about to move.
    fn announce(&mut self, _side: Side, _difficulty: Difficulty) {}

    /// Reports a finished game. Called exactly once per game.
    fn report(&mut self, outcome: Outcome);
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn display(&mut self, board: &Board) {
        (**self).display(board)
    }

    fn announce(&mut self, side: Side, difficulty: Difficulty) {
        (**self).announce(side, difficulty)
    }

    fn report(&mut self, outcome: Outcome) {
        (**self).report(outcome)
    }
}

/// Collaborator for games without a human: renders nothing and has no input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl MoveSource for Headless {
    fn request_move(&mut self, _board: &Board, side: Side) -> Result<Move, GameError> {
        Err(GameError::NoInputSource(side))
    }
}

impl Renderer for Headless {
    fn display(&mut self, _board: &Board) {}

    fn report(&mut self, _outcome: Outcome) {}
}

/// Tic-tac-toe game controller.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    player_x: Strategy,
    player_o: Strategy,
    outcome: Outcome,
    terminal: bool,
    history: Vec<Move>,
    rng: StdRng,
}

impl Game {
    /// Creates a new game with an OS-seeded random generator.
    #[instrument]
    pub fn new(player_x: Difficulty, player_o: Difficulty) -> Self {
        Self::with_rng(player_x, player_o, StdRng::from_os_rng())
    }

    /// Creates a new game whose random choices are reproducible from `seed`.
    #[instrument]
    pub fn with_seed(player_x: Difficulty, player_o: Difficulty, seed: u64) -> Self {
        Self::with_rng(player_x, player_o, StdRng::seed_from_u64(seed))
    }

    /// Creates a new game drawing random choices from `rng`.
    #[instrument(skip(rng))]
    pub fn with_rng(player_x: Difficulty, player_o: Difficulty, rng: StdRng) -> Self {
        info!(%player_x, %player_o, "Starting new game");
        Self {
            board: Board::new(),
            player_x: Strategy::new(player_x, Side::X),
            player_o: Strategy::new(player_o, Side::O),
            outcome: Outcome::InProgress,
            terminal: false,
            history: Vec::new(),
            rng,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the last evaluated outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once a win or draw has been observed.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns the moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Side whose turn it is.
    pub fn side_to_move(&self) -> Side {
        self.board.side_to_move()
    }

    /// Strategy playing `side`.
    pub fn strategy(&self, side: Side) -> &Strategy {
        match side {
            Side::X => &self.player_x,
            Side::O => &self.player_o,
        }
    }

    /// Plays one ply for the side to move.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the position is already won or drawn.
    /// - `OutOfBounds` / `SquareOccupied` if the strategy broke its contract.
    /// - Any error raised by the strategy or its input provider.
    #[instrument(skip(self, input), fields(side = %self.board.side_to_move()))]
    pub fn next_move<I>(&mut self, input: &mut I) -> Result<Move, GameError>
    where
        I: MoveSource + ?Sized,
    {
        if self.terminal || evaluate(&self.board).is_terminal() {
            return Err(GameError::GameOver);
        }

        let side = self.board.side_to_move();
        let strategy = *self.strategy(side);
        let mv = strategy.select_move(&self.board, &mut self.rng, input)?;

        let index = mv.index().ok_or(GameError::OutOfBounds(mv))?;
        if !self.board.is_empty(index) {
            return Err(GameError::SquareOccupied(mv));
        }

        self.board = self.board.apply(index, side);
        self.history.push(mv);
        debug!(%mv, %side, board = %self.board, "Move applied");

        Ok(mv)
    }

    /// Evaluates the board and latches the terminal state.
    ///
    /// The first time a win or draw is seen it is reported to `renderer`.
    #[instrument(skip(self, renderer))]
    pub fn check_terminal<R>(&mut self, renderer: &mut R) -> Outcome
    where
        R: Renderer + ?Sized,
    {
        if self.terminal {
            return self.outcome;
        }

        self.outcome = evaluate(&self.board);
        if self.outcome.is_terminal() {
            self.terminal = true;
            info!(outcome = %self.outcome, moves = self.history.len(), "Game over");
            renderer.report(self.outcome);
        }

        self.outcome
    }

    /// Runs the game to completion.
    ///
    /// `console` provides input for interactive sides and receives every
    /// board and the final result.
    #[instrument(skip(self, console))]
    pub fn play<C>(&mut self, console: &mut C) -> Result<Outcome, GameError>
    where
        C: MoveSource + Renderer + ?Sized,
    {
        console.display(&self.board);
        self.check_terminal(console);

        while !self.terminal {
            let strategy = *self.strategy(self.side_to_move());
            if strategy.difficulty().is_automated() {
                console.announce(strategy.side(), strategy.difficulty());
            }

            self.next_move(console)?;
            console.display(&self.board);
            self.check_terminal(console);
        }

        Ok(self.outcome)
    }
}
