//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use strictly_tictactoe::Difficulty;

/// Strictly Tic-Tac-Toe - play against random, heuristic or minimax opponents
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe with three computer difficulty levels", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive command loop (`start <x> <o>`, `exit`)
    Play {
        /// Seed for reproducible computer moves
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play a batch of computer-vs-computer games and print the tally
    Simulate {
        /// Path to a match config TOML file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Difficulty for X (easy, medium, hard)
        #[arg(long)]
        player_x: Option<Difficulty>,

        /// Difficulty for O (easy, medium, hard)
        #[arg(long)]
        player_o: Option<Difficulty>,

        /// Number of games to play
        #[arg(short, long)]
        games: Option<u32>,

        /// Base seed for reproducible matches
        #[arg(long)]
        seed: Option<u64>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
