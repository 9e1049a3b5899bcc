//! Tic-tac-toe engine: board, rules, strategies and the game controller.

mod action;
mod game;
pub mod rules;
pub mod strategy;
mod types;

pub use action::{GameError, Move};
pub use game::{Game, Headless, Renderer};
pub use rules::{Outcome, evaluate, has_three, line_values};
pub use strategy::{Difficulty, MoveSource, Strategy, create_strategy};
pub use types::{BOARD_SIZE, Board, Side, Square};
