//! Full legality: pseudo-legal movement that does not leave the mover's
//! own King in check.

use super::{Move, Piece, Position, PositionError, Side, Square, ALL_SQUARES};

impl Position {
    fn leaves_king_safe(&self, piece: &Piece, to: Square) -> Result<bool, PositionError> {
        let next = self.apply(&Move::new(piece.square(), to))?;
        Ok(!next.in_check(piece.side())?)
    }

    /// Whether the piece on `from` may legally move to `to`.
    ///
    /// Returns `Ok(false)` for an empty origin. The mover's side is taken
    /// from the piece; turn order is the caller's concern.
    ///
    /// # Errors
    /// A [`PositionError`] if the hypothetical position has no King.
    pub fn is_legal(&self, from: Square, to: Square) -> Result<bool, PositionError> {
        let Some(piece) = self.piece_at(from) else {
            return Ok(false);
        };
        if !piece.pseudo_legal(to, self) {
            return Ok(false);
        }
        self.leaves_king_safe(&piece, to)
    }

    /// Every legal destination of the piece on `from`, in square order.
    ///
    /// # Errors
    /// See [`is_legal`](Self::is_legal).
    pub fn legal_destinations(&self, from: Square) -> Result<Vec<Square>, PositionError> {
        let mut destinations = Vec::new();
        for &to in ALL_SQUARES.iter() {
            if self.is_legal(from, to)? {
                destinations.push(to);
            }
        }
        Ok(destinations)
    }

    /// All legal moves for `side`, grouped by origin in square order.
    ///
    /// # Errors
    /// See [`is_legal`](Self::is_legal).
    pub fn legal_moves(&self, side: Side) -> Result<Vec<Move>, PositionError> {
        let mut moves = Vec::new();
        for piece in self.pieces_of(side) {
            for &to in ALL_SQUARES.iter() {
                if piece.pseudo_legal(to, self) && self.leaves_king_safe(piece, to)? {
                    moves.push(Move::new(piece.square(), to));
                }
            }
        }
        Ok(moves)
    }

    /// Stops at the first legal move found.
    ///
    /// # Errors
    /// See [`is_legal`](Self::is_legal).
    pub fn has_no_legal_moves(&self, side: Side) -> Result<bool, PositionError> {
        for piece in self.pieces_of(side) {
            for &to in ALL_SQUARES.iter() {
                if piece.pseudo_legal(to, self) && self.leaves_king_safe(piece, to)? {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }
}
