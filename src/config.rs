//! Match configuration for batches of automated games.

use crate::games::tictactoe::Difficulty;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a simulated match between two automated players.
///
/// ```toml
/// player_x = "hard"
/// player_o = "medium"
/// games = 200
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct MatchConfig {
    /// Difficulty for X.
    player_x: Difficulty,

    /// Difficulty for O.
    player_o: Difficulty,

    /// Number of games to play.
    #[serde(default = "default_games")]
    games: u32,

    /// Base seed; game `n` uses `seed + n`. Unseeded matches use OS entropy.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_games() -> u32 {
    100
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_x: Difficulty::Hard,
            player_o: Difficulty::Easy,
            games: default_games(),
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Creates a match configuration.
    #[instrument]
    pub fn new(player_x: Difficulty, player_o: Difficulty, games: u32, seed: Option<u64>) -> Self {
        Self {
            player_x,
            player_o,
            games,
            seed,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(player_x = %config.player_x, player_o = %config.player_o, games = config.games, "Config loaded successfully");
        Ok(config)
    }

    /// Checks that the match can run unattended.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (side, difficulty) in [("player_x", self.player_x), ("player_o", self.player_o)] {
            if !difficulty.is_automated() {
                return Err(ConfigError::new(format!(
                    "{} must be easy, medium or hard for a simulated match",
                    side
                )));
            }
        }
        if self.games == 0 {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
