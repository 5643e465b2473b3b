//! Fluent builder for constructing chess positions.
//!
//! Allows setting up arbitrary positions piece by piece, e.g. endgames or
//! positions reached mid-game.
//!
//! # Example
//! ```
//! use chess_core::board::{PieceKind, PositionBuilder, Side, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let a2: Square = "a2".parse().unwrap();
//! let position = PositionBuilder::new()
//!     .piece(e1, Side::White, PieceKind::King)
//!     .piece(e8, Side::Black, PieceKind::King)
//!     .piece(a2, Side::White, PieceKind::Pawn)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.material(Side::White), 1);
//! ```

use super::{Piece, PieceKind, Position, PositionError, Side, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug, Default)]
pub struct PositionBuilder {
    pieces: Vec<Piece>,
    ply_counter: u32,
}

impl PositionBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder::default()
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            pieces: Position::starting().pieces().copied().collect(),
            ply_counter: 0,
        }
    }

    /// Place an unmoved piece, replacing whatever stood on `square`.
    #[must_use]
    pub fn piece(self, square: Square, side: Side, kind: PieceKind) -> Self {
        self.placed(Piece::new(kind, side, square))
    }

    /// Place a fully specified piece, e.g. one marked as moved.
    #[must_use]
    pub fn placed(mut self, piece: Piece) -> Self {
        self.pieces.retain(|p| p.square() != piece.square());
        self.pieces.push(piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|p| p.square() != square);
        self
    }

    /// Set the number of plies already played.
    #[must_use]
    pub const fn ply_counter(mut self, plies: u32) -> Self {
        self.ply_counter = plies;
        self
    }

    /// Build the position.
    ///
    /// # Errors
    /// `MissingKing` or `DuplicateKing` unless each side has exactly one
    /// King.
    pub fn build(self) -> Result<Position, PositionError> {
        let mut position = Position::empty();
        for piece in self.pieces {
            position.put(piece);
        }
        position.ply_counter = self.ply_counter;

        for side in Side::BOTH {
            position.king_square(side)?;
        }
        Ok(position)
    }
}
