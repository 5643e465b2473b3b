//! Pseudo-legal movement rules, one file per piece family.
//!
//! Every rule answers "may this piece go from its square to `to`" using
//! geometry and occupancy only; self-check is handled by
//! [`Position::is_legal`](crate::board::Position::is_legal).

pub(crate) mod kings;
pub(crate) mod knights;
pub(crate) mod pawns;
pub(crate) mod sliders;

use super::{Piece, PieceKind, Position, Square};

/// Iterator over the squares strictly between two aligned squares.
#[derive(Clone, Debug)]
pub struct SquaresBetween {
    next: Square,
    step: (i8, i8),
    remaining: u8,
}

impl Iterator for SquaresBetween {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next = current.offset(self.step.0, self.step.1)?;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl ExactSizeIterator for SquaresBetween {}

/// Squares strictly between `from` and `to`.
///
/// Defined for pairs on a shared rank, file or diagonal only; any other
/// pair (including `from == to`) yields `None`.
#[must_use]
pub fn squares_between(from: Square, to: Square) -> Option<SquaresBetween> {
    let (df, dr) = from.delta_to(to);
    let straight = (df == 0) != (dr == 0);
    let diagonal = df != 0 && df.abs() == dr.abs();
    if !straight && !diagonal {
        return None;
    }

    let step = (df.signum(), dr.signum());
    let distance = df.abs().max(dr.abs()) as u8;
    let next = match from.offset(step.0, step.1) {
        Some(square) => square,
        None => return None,
    };

    Some(SquaresBetween {
        next,
        step,
        remaining: distance - 1,
    })
}

/// Whether every square strictly between the two squares is empty.
/// Unaligned pairs have no path and report false.
pub(crate) fn path_is_clear(from: Square, to: Square, position: &Position) -> bool {
    squares_between(from, to)
        .map_or(false, |mut between| between.all(|sq| position.piece_at(sq).is_none()))
}

/// A piece may finish on an empty square or on an enemy piece other than
/// the King.
pub(crate) fn can_land_on(piece: &Piece, to: Square, position: &Position) -> bool {
    match position.piece_at(to) {
        None => true,
        Some(target) => target.side() != piece.side() && target.kind() != PieceKind::King,
    }
}
