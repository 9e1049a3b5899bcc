//! Batches of unattended games.

use crate::config::MatchConfig;
use crate::games::tictactoe::{Game, GameError, Headless, Outcome, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tally of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl MatchSummary {
    /// Adds a finished game to the tally. Unfinished games are ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Side::X) => self.x_wins += 1,
            Outcome::Win(Side::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Number of games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Games won by `side`.
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::X => self.x_wins,
            Side::O => self.o_wins,
        }
    }
}

impl std::fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays every game described by `config` without rendering.
///
/// # Errors
///
/// Fails if a side needs input, which [`MatchConfig::validate`] rules out.
#[instrument(skip(config), fields(player_x = %config.player_x(), player_o = %config.player_o(), games = config.games()))]
pub fn run_match(config: &MatchConfig) -> Result<MatchSummary, GameError> {
    let mut summary = MatchSummary::default();

    for n in 0..*config.games() {
        let mut game = match config.seed() {
            Some(seed) => Game::with_seed(
                *config.player_x(),
                *config.player_o(),
                seed.wrapping_add(u64::from(n)),
            ),
            None => Game::new(*config.player_x(), *config.player_o()),
        };
        let outcome = game.play(&mut Headless)?;
        debug!(game = n, %outcome, "Game finished");
        summary.record(outcome);
    }

    info!(%summary, "Match finished");
    Ok(summary)
}
