//! Chess board representation and rules.
//!
//! A [`Position`] owns every piece by value in a 64-slot array keyed by
//! square. Rule queries take the position as an explicit parameter, so
//! pieces never point back at the board that holds them. Moves are applied
//! with [`Position::apply`], which returns a new position and leaves the
//! receiver untouched.
//!
//! # Example
//! ```
//! use chess_core::board::{Position, Side};
//!
//! let position = Position::starting();
//! let moves = position.legal_moves(Side::White).unwrap();
//! assert_eq!(moves.len(), 20);
//! ```

mod apply;
mod attacks;
mod builder;
mod error;
mod legality;
mod material;
pub(crate) mod movegen;
mod notation;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{ChessError, PositionError, SearchError, SquareError};
pub use movegen::{squares_between, SquaresBetween};
pub use notation::movetext;
pub use state::Position;
pub use types::{Move, Piece, PieceKind, Side, Square, ALL_SQUARES};
