//! Line-oriented console front end.
//!
//! This is the only code that touches text I/O. It plays both collaborator
//! roles for the engine: a [`MoveSource`] that prompts for coordinates and a
//! [`Renderer`] that prints boards and results.

mod command;
mod input;
mod render;

pub use command::{Command, parse_command};
pub use input::{InputProblem, parse_coordinates};
pub use render::render_board;

use crate::games::tictactoe::{
    Board, Difficulty, Game, GameError, Move, MoveSource, Outcome, Renderer, Side,
};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Console bound to a reader and a writer.
#[derive(Debug)]
pub struct TextConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    /// Creates a console over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console and returns its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Prints `prompt` and reads one line. `None` means end of input.
    fn prompt(&mut self, prompt: &str) -> Option<String> {
        self.write_str(prompt);
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                warn!(error = %e, "Failed to read console input");
                None
            }
        }
    }

    fn write_str(&mut self, text: &str) {
        if let Err(e) = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
        {
            warn!(error = %e, "Failed to write console output");
        }
    }

    fn write_line(&mut self, text: &str) {
        self.write_str(&format!("{}\n", text));
    }

    /// Runs the command loop until `exit` or end of input.
    ///
    /// With a `seed`, game `n` of the session is seeded with `seed + n` so a
    /// whole session can be replayed.
    #[instrument(skip(self))]
    pub fn run_session(&mut self, seed: Option<u64>) -> Result<(), GameError> {
        let mut games_played: u64 = 0;

        while let Some(line) = self.prompt("Input command: ") {
            let Some(command) = parse_command(&line) else {
                self.write_line("Bad parameters!");
                continue;
            };

            let (player_x, player_o) = match command {
                Command::Exit => break,
                Command::Start { player_x, player_o } => (player_x, player_o),
            };

            let mut game = match seed {
                Some(seed) => Game::with_seed(player_x, player_o, seed.wrapping_add(games_played)),
                None => Game::new(player_x, player_o),
            };
            games_played += 1;

            match game.play(self) {
                Ok(outcome) => debug!(%outcome, "Session game finished"),
                Err(GameError::InputClosed(side)) => {
                    info!(%side, "Input closed mid-game, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }

        info!(games_played, "Session ended");
        Ok(())
    }
}

impl<R: BufRead, W: Write> MoveSource for TextConsole<R, W> {
    fn request_move(&mut self, board: &Board, side: Side) -> Result<Move, GameError> {
        loop {
            let line = self
                .prompt("Enter the coordinates: ")
                .ok_or(GameError::InputClosed(side))?;
            match parse_coordinates(&line, board) {
                Ok(mv) => return Ok(mv),
                Err(problem) => {
                    debug!(%problem, input = line.trim(), "Rejected coordinates");
                    self.write_line(&problem.to_string());
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Renderer for TextConsole<R, W> {
    fn display(&mut self, board: &Board) {
        self.write_str(&render_board(board));
    }

    fn announce(&mut self, _side: Side, difficulty: Difficulty) {
        self.write_line(&format!("Making move level \"{}\"", difficulty));
    }

    fn report(&mut self, outcome: Outcome) {
        self.write_line(&outcome.to_string());
    }
}
