//! Top-level console commands.

use crate::games::tictactoe::Difficulty;

/// A command typed at the `Input command:` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a game with the given difficulty for each side.
    Start {
        /// Difficulty for X.
        player_x: Difficulty,
        /// Difficulty for O.
        player_o: Difficulty,
    },
    /// Leave the command loop.
    Exit,
}

/// Parses a command line. Returns `None` for anything malformed.
///
/// Unlike [`Difficulty::from_token`], unknown difficulty tokens are rejected here.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["exit"] => Some(Command::Exit),
        ["start", x, o] => Some(Command::Start {
            player_x: x.parse().ok()?,
            player_o: o.parse().ok()?,
        }),
        _ => None,
    }
}
