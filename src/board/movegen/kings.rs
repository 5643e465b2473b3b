use super::super::{Piece, PieceKind, Position, Square};
use super::{can_land_on, path_is_clear};

const KING_FILE: i8 = 4;
const SHORT_CASTLE_FILE: i8 = 6;
const LONG_CASTLE_FILE: i8 = 2;

/// Chebyshev distance one.
pub(crate) fn king_reaches(from: Square, to: Square) -> bool {
    let (df, dr) = from.delta_to(to);
    from != to && df.abs() <= 1 && dr.abs() <= 1
}

pub(crate) fn king_move(king: &Piece, to: Square, position: &Position) -> bool {
    if king_reaches(king.square(), to) {
        return can_land_on(king, to, position);
    }
    can_castle(king, to, position)
}

/// Rook origin and destination squares of a castling King move, if `to`
/// is a castling destination for a King standing on `from`.
pub(crate) fn castling_rook_squares(from: Square, to: Square) -> Option<(Square, Square)> {
    let (df, dr) = from.delta_to(to);
    if dr != 0 || df.abs() != 2 || from.file_index() != KING_FILE {
        return None;
    }
    let rank = from.rank_index();
    match to.file_index() {
        SHORT_CASTLE_FILE => Some((Square::from_coords(7, rank)?, Square::from_coords(5, rank)?)),
        LONG_CASTLE_FILE => Some((Square::from_coords(0, rank)?, Square::from_coords(3, rank)?)),
        _ => None,
    }
}

/// Castling needs an unmoved King on its home square, an unmoved Rook of
/// the same side in the corner, an empty path between them, and no enemy
/// attack on the King's square, the square it crosses or its landing
/// square.
pub(crate) fn can_castle(king: &Piece, to: Square, position: &Position) -> bool {
    if king.has_moved() || king.square().rank_index() != king.side().back_rank() {
        return false;
    }
    let Some((rook_from, _)) = castling_rook_squares(king.square(), to) else {
        return false;
    };

    let rook_ready = position.piece_at(rook_from).map_or(false, |rook| {
        rook.kind() == PieceKind::Rook && rook.side() == king.side() && !rook.has_moved()
    });
    if !rook_ready || !path_is_clear(king.square(), rook_from, position) {
        return false;
    }

    let step = (to.file_index() - king.square().file_index()).signum();
    let enemy = king.side().opponent();
    let crossed = king.square().offset(step, 0);
    [Some(king.square()), crossed, Some(to)]
        .into_iter()
        .flatten()
        .all(|square| !position.is_attacked(square, enemy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PositionBuilder, Side};

    fn sq(text: &str) -> Square {
        text.parse().unwrap()
    }

    fn castling_setup() -> PositionBuilder {
        PositionBuilder::new()
            .piece(sq("e1"), Side::White, PieceKind::King)
            .piece(sq("a1"), Side::White, PieceKind::Rook)
            .piece(sq("h1"), Side::White, PieceKind::Rook)
            .piece(sq("e8"), Side::Black, PieceKind::King)
    }

    #[test]
    fn test_adjacent_moves() {
        assert!(king_reaches(sq("e4"), sq("f5")));
        assert!(king_reaches(sq("e4"), sq("e3")));
        assert!(!king_reaches(sq("e4"), sq("e4")));
        assert!(!king_reaches(sq("e4"), sq("e6")));
    }

    #[test]
    fn test_both_castles_available() {
        let position = castling_setup().build().unwrap();
        let king = position.piece_at(sq("e1")).unwrap();
        assert!(king.pseudo_legal(sq("g1"), &position));
        assert!(king.pseudo_legal(sq("c1"), &position));
        assert!(!king.pseudo_legal(sq("b1"), &position));
        assert!(!king.pseudo_legal(sq("h1"), &position));
    }

    #[test]
    fn test_castle_blocked_by_piece() {
        let position = castling_setup()
            .piece(sq("b1"), Side::White, PieceKind::Knight)
            .build()
            .unwrap();
        let king = position.piece_at(sq("e1")).unwrap();
        assert!(!king.pseudo_legal(sq("c1"), &position));
        assert!(king.pseudo_legal(sq("g1"), &position));
    }

    #[test]
    fn test_castle_through_attack() {
        let position = castling_setup()
            .piece(sq("f8"), Side::Black, PieceKind::Rook)
            .build()
            .unwrap();
        let king = position.piece_at(sq("e1")).unwrap();
        assert!(!king.pseudo_legal(sq("g1"), &position));
        assert!(king.pseudo_legal(sq("c1"), &position));
    }

    #[test]
    fn test_castle_out_of_check() {
        let position = castling_setup()
            .piece(sq("e5"), Side::Black, PieceKind::Rook)
            .build()
            .unwrap();
        let king = position.piece_at(sq("e1")).unwrap();
        assert!(!king.pseudo_legal(sq("g1"), &position));
        assert!(!king.pseudo_legal(sq("c1"), &position));
    }

    #[test]
    fn test_castle_needs_unmoved_rook() {
        let position = castling_setup()
            .placed(Piece::new(PieceKind::Rook, Side::White, sq("h1")).moved())
            .build()
            .unwrap();
        let king = position.piece_at(sq("e1")).unwrap();
        assert!(!king.pseudo_legal(sq("g1"), &position));
    }

    #[test]
    fn test_castling_never_counts_as_attack() {
        let position = castling_setup().build().unwrap();
        let king = position.piece_at(sq("e1")).unwrap();
        assert!(!king.attacks(sq("g1"), &position));
    }
}
