use super::super::{Piece, PieceKind, Position, Square};
use super::{can_land_on, path_is_clear};

fn on_line(kind: PieceKind, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta_to(to);
    let straight = (df == 0) != (dr == 0);
    let diagonal = df != 0 && df.abs() == dr.abs();
    match kind {
        PieceKind::Rook => straight,
        PieceKind::Bishop => diagonal,
        PieceKind::Queen => straight || diagonal,
        _ => false,
    }
}

/// Rook, Bishop or Queen line with every square in between empty.
pub(crate) fn slider_reaches(kind: PieceKind, from: Square, to: Square, position: &Position) -> bool {
    on_line(kind, from, to) && path_is_clear(from, to, position)
}

pub(crate) fn slider_move(slider: &Piece, to: Square, position: &Position) -> bool {
    slider_reaches(slider.kind(), slider.square(), to, position) && can_land_on(slider, to, position)
}
