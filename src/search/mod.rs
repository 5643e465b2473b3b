//! Fixed-depth move selection.
//!
//! [`SearchEngine`] scores every legal root move with a plain minimax over
//! material, adds a small random jitter at the leaves so repeated games
//! vary, and returns the chosen move as an [`Evaluation`].
//!
//! # Example
//! ```
//! use chess_core::{Position, SearchConfig, SearchEngine, Side};
//!
//! let mut engine = SearchEngine::with_seed(SearchConfig::default().with_depth(1), 7);
//! let eval = engine.evaluate(&Position::starting(), Side::White).unwrap();
//! assert!(Position::starting()
//!     .legal_moves(Side::White)
//!     .unwrap()
//!     .contains(&eval.best_move));
//! ```

mod eval;
mod minimax;
mod params;

pub use params::{SearchConfig, SearchMode};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Move, Position, SearchError, Side};

/// Result of a search: the chosen move and its score from the searching
/// side's point of view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub best_move: Move,
    pub score: f64,
}

/// Move picker holding its configuration and the jitter RNG.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    config: SearchConfig,
    rng: StdRng,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchEngine {
    /// Engine seeded from OS entropy
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        SearchEngine {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine with a reproducible jitter and random-move sequence
    #[must_use]
    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        SearchEngine {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        self.config.mode = mode;
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.config.depth = depth;
    }

    /// Depth-zero score for `side`: material balance plus jitter in
    /// (-0.5, 0.5).
    pub fn evaluate_static(&mut self, position: &Position, side: Side) -> f64 {
        eval::material_balance(position, side) + self.jitter()
    }

    fn jitter(&mut self) -> f64 {
        self.rng.gen::<f64>() / 2.0 - self.rng.gen::<f64>() / 2.0
    }

    /// Choose a move for `side` according to the configured mode.
    ///
    /// Failures while scoring in `BestMove` or `WorstMove` fall back to a
    /// random legal move.
    ///
    /// # Errors
    /// `SearchError::NoLegalMoves` when `side` has no legal move (the caller
    /// should check the game result first), or `SearchError::Position` when
    /// the root position itself is corrupted.
    pub fn evaluate(&mut self, position: &Position, side: Side) -> Result<Evaluation, SearchError> {
        let moves = position.legal_moves(side)?;
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves { side });
        }

        let outcome = match self.config.mode {
            SearchMode::RandomMove => return self.random_move(position, side, &moves),
            SearchMode::BestMove => self.best_move(position, side, &moves),
            SearchMode::WorstMove => self.worst_move(position, side, &moves),
        };

        match outcome {
            Ok(evaluation) => {
                log_debug!(
                    "{:?} for {} picked {} ({:.2})",
                    self.config.mode,
                    side,
                    evaluation.best_move,
                    evaluation.score
                );
                Ok(evaluation)
            }
            Err(err) => {
                log_warn!("{:?} search failed ({}), playing a random move", self.config.mode, err);
                self.random_move(position, side, &moves)
            }
        }
    }
}
