use super::super::{Piece, PieceKind, Position, Square};
use super::can_land_on;

/// Forward pushes onto empty squares, double step from the unmoved start
/// rank, diagonal captures and en passant.
pub(crate) fn pawn_move(pawn: &Piece, to: Square, position: &Position) -> bool {
    let side = pawn.side();
    let dir = side.pawn_direction();
    let from = pawn.square();
    let (df, dr) = from.delta_to(to);

    if df == 0 {
        if position.piece_at(to).is_some() {
            return false;
        }
        if dr == dir {
            return true;
        }
        if dr == 2 * dir && !pawn.has_moved() && from.rank_index() == side.pawn_start_rank() {
            return from
                .offset(0, dir)
                .map_or(false, |middle| position.piece_at(middle).is_none());
        }
        return false;
    }

    if df.abs() == 1 && dr == dir {
        if position.piece_at(to).is_some() {
            return can_land_on(pawn, to, position);
        }
        return en_passant_victim(pawn, to, position).is_some();
    }

    false
}

/// Diagonal forward reach, whatever stands on the target.
pub(crate) fn pawn_attacks(pawn: &Piece, target: Square) -> bool {
    let (df, dr) = pawn.square().delta_to(target);
    df.abs() == 1 && dr == pawn.side().pawn_direction()
}

/// The enemy pawn removed by an en passant capture onto the empty `to`.
///
/// It sits on the destination file one rank behind the destination and
/// must have double-stepped on its side's latest move.
pub(crate) fn en_passant_victim(pawn: &Piece, to: Square, position: &Position) -> Option<Piece> {
    let behind = to.offset(0, -pawn.side().pawn_direction())?;
    let victim = position.piece_at(behind)?;
    let capturable = victim.kind() == PieceKind::Pawn
        && victim.side() != pawn.side()
        && victim.en_passant_vulnerable();
    capturable.then_some(victim)
}
