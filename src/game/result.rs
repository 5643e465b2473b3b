//! Game outcome classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Side;

/// State of a game. `Ongoing` is the only non-terminal state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    #[default]
    Ongoing,
    WhiteWins,
    BlackWins,
    Stalemate,
    FiftyMoveDraw,
    RepetitionDraw,
    InsufficientMaterial,
}

impl GameResult {
    /// Win for the given side
    #[must_use]
    pub const fn win_for(side: Side) -> Self {
        match side {
            Side::White => GameResult::WhiteWins,
            Side::Black => GameResult::BlackWins,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameResult::WhiteWins => Some(Side::White),
            GameResult::BlackWins => Some(Side::Black),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        self.is_terminal() && self.winner().is_none()
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameResult::Ongoing => "Ongoing",
            GameResult::WhiteWins => "White wins",
            GameResult::BlackWins => "Black wins",
            GameResult::Stalemate => "Draw by stalemate",
            GameResult::FiftyMoveDraw => "Draw by the fifty-move rule",
            GameResult::RepetitionDraw => "Draw by repetition",
            GameResult::InsufficientMaterial => "Draw by insufficient material",
        };
        f.write_str(text)
    }
}
