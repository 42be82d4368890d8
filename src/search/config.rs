//! Search configuration parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Depth that never cuts the search short; recursion still stops when the
/// board fills up.
pub const UNBOUNDED_DEPTH: u32 = u32::MAX;

/// Invalid search or self-play configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `max_depth` was zero.
    #[error("search depth must be at least 1")]
    ZeroDepth,

    /// A difficulty name that is not easy, medium or hard.
    #[error("unknown difficulty {0:?}, expected easy, medium or hard (or 1-3)")]
    UnknownDifficulty(String),

    /// Malformed JSON config.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Engine strength, mapped to a search depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Looks two plies ahead.
    Easy,
    /// Looks four plies ahead.
    Medium,
    /// Searches to the end of the game.
    #[default]
    Hard,
}

impl Difficulty {
    /// Search depth used at this difficulty.
    #[must_use]
    pub const fn max_depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => UNBOUNDED_DEPTH,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Minimax search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to look ahead before scoring a position as neutral.
    /// Must be at least 1.
    pub max_depth: u32,

    /// Skip branches that cannot change the result (alpha-beta).
    /// Never changes the chosen move or its score.
    pub pruning: bool,

    /// Search root moves on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

impl SearchConfig {
    /// Config searching at the depth of the given difficulty.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            max_depth: difficulty.max_depth(),
            pruning: false,
            parallel: false,
        }
    }

    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Create a new config with custom max depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Create a new config with pruning switched on or off.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Create a new config with parallel root search switched on or off.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check the config is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}
