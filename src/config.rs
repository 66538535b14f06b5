//! Engine configuration.
//!
//! Every tuning knob lives here instead of in the search code: search depth
//! per difficulty, breadth limits, neighbor radius, cache bound, opening
//! book usage, and the move-ordering and evaluation weights. Values can be
//! loaded from a TOML file; missing keys fall back to the defaults.
//!
//! ```
//! use gomoku::config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str("root_breadth = 12\n[depths]\nhard = 7\n").unwrap();
//! assert_eq!(config.root_breadth, 12);
//! assert_eq!(config.depths.hard, 7);
//! assert_eq!(config.ply_breadth, 10);
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ParseNameError};
use crate::eval::{EvalWeights, ThreatWeights};

/// Difficulty level. Selects the search depth only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseNameError {
                kind: "difficulty",
                value: s.to_string(),
            })
    }
}

/// Whose side a search leaf is scored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafPerspective {
    /// Always the root mover, with a depth-scaled bonus for a five on the
    /// board. Max and min plies compare the same quantity.
    #[default]
    Root,
    /// The side to move at the leaf, with no win bonus. Scores from
    /// different plies are mixed as-is.
    SideToMove,
}

/// Search depth (in plies, root move included) for each difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Depths {
    pub easy: u8,
    pub medium: u8,
    pub hard: u8,
}

impl Default for Depths {
    fn default() -> Self {
        Self {
            easy: 4,
            medium: 5,
            hard: 6,
        }
    }
}

impl Depths {
    pub fn for_difficulty(&self, difficulty: Difficulty) -> u8 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub depths: Depths,
    /// Candidates explored at the root
    pub root_breadth: usize,
    /// Candidates explored at every deeper ply
    pub ply_breadth: usize,
    /// Empty cells within this square radius of a stone are candidates
    pub neighbor_radius: u8,
    /// Maximum cached positions; the cache stops growing once full
    pub cache_capacity: usize,
    pub use_opening_book: bool,
    /// The book is consulted while fewer than this many engine moves were made
    pub book_plies: u32,
    /// Optional wall-clock budget per move
    pub time_limit_ms: Option<u64>,
    /// Added to the evaluation of a node where a five is on the board
    pub win_score: i64,
    pub leaf_perspective: LeafPerspective,
    pub threats: ThreatWeights,
    pub eval: EvalWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depths: Depths::default(),
            root_breadth: 20,
            ply_breadth: 10,
            neighbor_radius: 2,
            cache_capacity: 10_000,
            use_opening_book: true,
            book_plies: 4,
            time_limit_ms: None,
            win_score: 1_000_000_000,
            leaf_perspective: LeafPerspective::Root,
            threats: ThreatWeights::default(),
            eval: EvalWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for difficulty in Difficulty::ALL {
            if self.depths.for_difficulty(difficulty) == 0 {
                return Err(ConfigError::Invalid {
                    field: "depths",
                    reason: format!("{difficulty} depth must be at least 1"),
                });
            }
        }
        if self.root_breadth == 0 {
            return Err(ConfigError::Invalid {
                field: "root_breadth",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.ply_breadth == 0 {
            return Err(ConfigError::Invalid {
                field: "ply_breadth",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.neighbor_radius == 0 {
            return Err(ConfigError::Invalid {
                field: "neighbor_radius",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.eval.outer_margin > self.eval.inner_margin {
            return Err(ConfigError::Invalid {
                field: "eval.outer_margin",
                reason: "the outer zone must contain the inner zone".to_string(),
            });
        }
        if self.win_score <= self.eval.own_runs[0].max(self.eval.opponent_runs[0]) {
            return Err(ConfigError::Invalid {
                field: "win_score",
                reason: "must exceed the five-run evaluation bonus".to_string(),
            });
        }
        self.threats.validate()
    }

    /// Search depth for a difficulty.
    #[inline]
    pub fn depth(&self, difficulty: Difficulty) -> u8 {
        self.depths.for_difficulty(difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.depth(Difficulty::Easy), 4);
        assert_eq!(config.depth(Difficulty::Medium), 5);
        assert_eq!(config.depth(Difficulty::Hard), 6);
        assert_eq!(config.root_breadth, 20);
        assert_eq!(config.ply_breadth, 10);
        assert_eq!(config.cache_capacity, 10_000);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml = r#"
            ply_breadth = 6
            time_limit_ms = 750

            [threats]
            open_two = 2500
        "#;
        let config = EngineConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.ply_breadth, 6);
        assert_eq!(config.time_limit_ms, Some(750));
        assert_eq!(config.threats.open_two, 2_500);
        assert_eq!(config.threats.five, ThreatWeights::default().five);
        assert_eq!(config.depths, Depths::default());
    }

    #[test]
    fn test_zero_breadth_rejected() {
        let err = EngineConfig::from_toml_str("root_breadth = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "root_breadth", .. }));
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = EngineConfig::from_toml_str("[depths]\neasy = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "depths", .. }));
    }

    #[test]
    fn test_bad_weights_rejected() {
        let err = EngineConfig::from_toml_str("[threats]\nblock_five = 5000000").unwrap_err();
        assert!(matches!(err, ConfigError::WeightOrdering { higher: "five" }));
    }

    #[test]
    fn test_malformed_toml() {
        let err = EngineConfig::from_toml_str("root_breadth = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load("/nonexistent/gomoku.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_leaf_perspective_from_toml() {
        assert_eq!(EngineConfig::default().leaf_perspective, LeafPerspective::Root);
        let config = EngineConfig::from_toml_str("leaf_perspective = \"side_to_move\"").unwrap();
        assert_eq!(config.leaf_perspective, LeafPerspective::SideToMove);
        let err = EngineConfig::from_toml_str("leaf_perspective = \"mover\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("brutal".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
