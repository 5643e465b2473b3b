//! Core chess types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `PieceKind`, `Side` and `Piece` - piece kinds, owners and placed pieces
//! - `Square` - file/rank board square
//! - `Move` - from/to pair with notation metadata

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Piece, PieceKind, Side};
pub use square::{Square, ALL_SQUARES};
