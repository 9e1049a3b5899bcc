//! Strictly Tic-Tac-Toe - console front end.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::path::PathBuf;
use strictly_tictactoe::{Difficulty, MatchConfig, TextConsole, run_match};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { seed } => run_play(seed),
        Command::Simulate {
            config,
            player_x,
            player_o,
            games,
            seed,
            json,
        } => run_simulate(config, player_x, player_o, games, seed, json),
    }
}

/// Run the interactive command loop on stdin/stdout
#[instrument]
fn run_play(seed: Option<u64>) -> Result<()> {
    info!("Starting console session");
    let stdin = io::stdin();
    let mut console = TextConsole::new(stdin.lock(), io::stdout());
    console.run_session(seed)?;
    Ok(())
}

/// Run a batch of unattended games
#[instrument]
fn run_simulate(
    config: Option<PathBuf>,
    player_x: Option<Difficulty>,
    player_o: Option<Difficulty>,
    games: Option<u32>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut config = match config {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    };
    if let Some(player_x) = player_x {
        config = config.with_player_x(player_x);
    }
    if let Some(player_o) = player_o {
        config = config.with_player_o(player_o);
    }
    if let Some(games) = games {
        config = config.with_games(games);
    }
    if seed.is_some() {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let summary = run_match(&config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} vs {} over {} games",
            config.player_x(),
            config.player_o(),
            summary.games()
        );
        println!("{}", summary);
    }

    Ok(())
}
