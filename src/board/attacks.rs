//! Attack detection and check queries.

use super::{Piece, PieceKind, Position, PositionError, Side, Square};

impl Position {
    /// Every piece of `by_side` whose capture reach covers `target`.
    ///
    /// Occupancy of `target` is ignored, so empty squares and squares held
    /// by `by_side` itself can be attacked too. Pieces are returned in
    /// square order.
    #[must_use]
    pub fn attackers_of(&self, target: Square, by_side: Side) -> Vec<Piece> {
        self.pieces_of(by_side)
            .filter(|piece| piece.attacks(target, self))
            .copied()
            .collect()
    }

    /// Attackers of the square `piece` stands on, from its opponent.
    #[must_use]
    pub fn attackers_of_piece(&self, piece: &Piece) -> Vec<Piece> {
        self.attackers_of(piece.square(), piece.side().opponent())
    }

    /// Short-circuiting form of [`attackers_of`](Self::attackers_of).
    #[must_use]
    pub fn is_attacked(&self, target: Square, by_side: Side) -> bool {
        self.pieces_of(by_side)
            .any(|piece| piece.attacks(target, self))
    }

    /// Square of `side`'s King.
    ///
    /// # Errors
    /// `MissingKing` or `DuplicateKing` when the position does not hold
    /// exactly one King for `side`.
    pub fn king_square(&self, side: Side) -> Result<Square, PositionError> {
        let mut kings = self
            .pieces_of(side)
            .filter(|piece| piece.kind() == PieceKind::King);
        let king = kings.next().ok_or(PositionError::MissingKing { side })?;
        if kings.next().is_some() {
            return Err(PositionError::DuplicateKing { side });
        }
        Ok(king.square())
    }

    /// True when `side`'s King is attacked by the opponent.
    ///
    /// # Errors
    /// Propagates [`king_square`](Self::king_square) failures.
    pub fn in_check(&self, side: Side) -> Result<bool, PositionError> {
        let king = self.king_square(side)?;
        Ok(self.is_attacked(king, side.opponent()))
    }
}
