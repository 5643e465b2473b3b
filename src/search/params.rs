#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Objective used to pick the engine's move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchMode {
    /// Fixed-depth minimax over material.
    #[default]
    BestMove,
    /// Uniform choice among the legal moves.
    RandomMove,
    /// Candidate with the highest static score of the current position.
    WorstMove,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Plies searched below each root move
    pub depth: u32,
    pub mode: SearchMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            mode: SearchMode::BestMove,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub const fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }
}
