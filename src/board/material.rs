use super::{PieceKind, Position, Side};

impl Position {
    /// Sum of piece values owned by `side`. Kings count zero.
    #[must_use]
    pub fn material(&self, side: Side) -> u32 {
        self.pieces_of(side).map(|piece| piece.value()).sum()
    }

    /// Whether `side` keeps enough force to deliver mate.
    ///
    /// Any Pawn, Rook or Queen on the board, for either side, counts as
    /// sufficient for both. Otherwise a side needs at least two minor
    /// pieces of its own.
    #[must_use]
    pub fn has_mating_material(&self, side: Side) -> bool {
        let heavy_or_pawn = self.pieces().any(|piece| {
            matches!(
                piece.kind(),
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen
            )
        });
        if heavy_or_pawn {
            return true;
        }
        self.pieces_of(side)
            .filter(|piece| piece.kind().is_minor())
            .count()
            >= 2
    }

    /// True when neither side can force mate.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        Side::BOTH
            .iter()
            .all(|&side| !self.has_mating_material(side))
    }
}
