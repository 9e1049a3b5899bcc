//! Difficulty levels selectable for each side.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{instrument, warn};

/// Difficulty of the strategy playing a side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Moves come from an external input provider.
    #[default]
    #[strum(to_string = "interactive", serialize = "user")]
    #[serde(alias = "user")]
    Interactive,
    /// Uniformly random moves.
    Easy,
    /// One-ply lookahead: win, else block, else random.
    Medium,
    /// Exhaustive minimax search.
    Hard,
}

impl Difficulty {
    /// Parses a difficulty token, falling back to [`Difficulty::Interactive`]
    /// for anything unrecognised.
    #[instrument]
    pub fn from_token(token: &str) -> Self {
        token.parse().unwrap_or_else(|_| {
            warn!(token, "Unknown difficulty, falling back to interactive");
            Difficulty::Interactive
        })
    }

    /// Returns true if moves are chosen without outside input.
    pub fn is_automated(self) -> bool {
        !matches!(self, Difficulty::Interactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_parse() {
        assert_eq!(Difficulty::from_token("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_token("medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_token("hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_token("interactive"), Difficulty::Interactive);
        assert_eq!(Difficulty::from_token("user"), Difficulty::Interactive);
    }

    #[test]
    fn test_unknown_token_falls_back() {
        assert_eq!(Difficulty::from_token("nightmare"), Difficulty::Interactive);
        assert!("nightmare".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(Difficulty::Hard.to_string(), "hard");
        assert_eq!(Difficulty::Interactive.to_string(), "interactive");
    }
}
