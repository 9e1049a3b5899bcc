//! Strictly Tic-Tac-Toe library - game engine and computer opponents
//!
//! # Architecture
//!
//! - **Board**: value-type 3x3 board with line detection
//! - **Rules**: pure win/draw evaluation
//! - **Strategies**: interactive, random, heuristic and minimax move selection
//! - **Game**: turn controller driving two strategies
//! - **Console**: text front end (command loop, coordinates, rendering)
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Difficulty, Game, Headless, Outcome};
//!
//! let mut game = Game::with_seed(Difficulty::Hard, Difficulty::Hard, 7);
//! let outcome = game.play(&mut Headless).unwrap();
//! assert_eq!(outcome, Outcome::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;
mod simulation;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Console front end
pub use console::{
    Command, InputProblem, TextConsole, parse_command, parse_coordinates, render_board,
};

// Crate-level exports - Simulation
pub use simulation::{MatchSummary, run_match};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, Difficulty, Game, GameError, Headless, Move, MoveSource, Outcome,
    Renderer, Side, Square, Strategy, create_strategy, evaluate, has_three, line_values,
};

// Crate-level exports - Rules and strategy internals
pub use games::tictactoe::rules;
pub use games::tictactoe::strategy;
