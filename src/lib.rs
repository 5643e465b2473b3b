//! Chess rules and fixed-depth search.
//!
//! `board` models legal positions and every rule of standard chess,
//! `game` sequences turns and classifies results, and `search` picks a move
//! with a brute-force minimax over material.
//!
//! # Example
//! ```
//! use chess_core::{Game, GameResult, Square};
//!
//! let mut game = Game::new();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! assert!(game.submit_move(e2, e4).unwrap());
//! assert_eq!(game.result(), GameResult::Ongoing);
//! ```

// Log macros compile to nothing unless the `logging` feature is on.
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)+) => { log::debug!($($arg)+) };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        if false {
            let _ = format!($($arg)+);
        }
    };
}

#[cfg(feature = "logging")]
macro_rules! log_warn {
    ($($arg:tt)+) => { log::warn!($($arg)+) };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        if false {
            let _ = format!($($arg)+);
        }
    };
}

pub mod board;
pub mod game;
pub mod search;

pub use board::{
    ChessError, Move, Piece, PieceKind, Position, PositionBuilder, PositionError, SearchError,
    Side, Square, SquareError,
};
pub use game::{Game, GameResult};
pub use search::{Evaluation, SearchConfig, SearchEngine, SearchMode};
