//! Engine configuration
//!
//! [`EngineConfig`] is what a [`ChessAi`](crate::ChessAi) is built from. It
//! deserializes from JSON (every field optional, falling back to the
//! defaults) so a driver can keep settings in a file and override them from
//! the command line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DEPTH, DEFAULT_TT_CAPACITY, MAX_DEPTH};
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::Color;

/// AI difficulty levels corresponding to search depth
///
/// The engine searches a fixed number of plies, so difficulty maps directly
/// to depth. Each extra ply multiplies the work by roughly the branching
/// factor, even with pruning.
///
/// ```rust
/// use chess_ai::Difficulty;
///
/// assert_eq!(Difficulty::Hard.depth(), 4);
/// assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Two plies: sees its own capture and the immediate reply
    Easy,
    /// Three plies
    #[default]
    Medium,
    /// Four plies, noticeably slower in busy middlegames
    Hard,
}

impl Difficulty {
    /// Search depth in plies
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Human-readable description for menus and logs
    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy (2 ply)",
            Difficulty::Medium => "Medium (3 ply)",
            Difficulty::Hard => "Hard (4 ply)",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for Difficulty {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ChessEngineError::InvalidConfig {
                message: format!("unknown difficulty {s:?}"),
            }),
        }
    }
}

/// Settings for one engine instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched per decision
    pub depth: u8,
    /// Side the engine plays
    pub color: Color,
    /// Transposition table buckets, rounded up to a power of two
    pub tt_capacity: usize,
}

impl Default for EngineConfig {
    /// Black at medium depth, like a fresh game against the computer
    fn default() -> Self {
        EngineConfig {
            depth: DEFAULT_DEPTH,
            color: Color::Black,
            tt_capacity: DEFAULT_TT_CAPACITY,
        }
    }
}

impl EngineConfig {
    pub fn new(depth: u8, color: Color) -> Self {
        EngineConfig {
            depth,
            color,
            ..EngineConfig::default()
        }
    }

    pub fn from_difficulty(difficulty: Difficulty, color: Color) -> Self {
        EngineConfig::new(difficulty.depth(), color)
    }

    /// Reject settings the engine cannot search with
    pub fn validate(&self) -> ChessEngineResult<()> {
        if self.depth == 0 {
            return Err(ChessEngineError::InvalidDepth { depth: self.depth });
        }
        if self.depth > MAX_DEPTH {
            return Err(ChessEngineError::InvalidConfig {
                message: format!("depth {} exceeds maximum of {MAX_DEPTH}", self.depth),
            });
        }
        if self.tt_capacity == 0 {
            return Err(ChessEngineError::InvalidConfig {
                message: "transposition table capacity must be positive".to_string(),
            });
        }
        Ok(())
    }
}
