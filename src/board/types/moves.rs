//! Move type.

use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::Square;

/// A from/to square pair plus notation metadata.
///
/// The metadata (capture, moved piece, check, checkmate) is only filled in
/// by [`crate::Game`] once the move has been accepted; a freshly built move
/// carries none. Two moves are equal when they travel between the same
/// squares, whatever their metadata.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    is_capture: bool,
    moved_piece_kind: Option<PieceKind>,
    is_check: bool,
    is_checkmate: bool,
}

impl Move {
    /// Create a move without metadata
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            is_capture: false,
            moved_piece_kind: None,
            is_check: false,
            is_checkmate: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.is_capture
    }

    /// Kind of the piece that moved, once the move has been played
    #[inline]
    #[must_use]
    pub const fn moved_piece_kind(&self) -> Option<PieceKind> {
        self.moved_piece_kind
    }

    #[inline]
    #[must_use]
    pub const fn is_check(&self) -> bool {
        self.is_check
    }

    #[inline]
    #[must_use]
    pub const fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }

    /// Copy of this move with every metadata field reset
    #[inline]
    #[must_use]
    pub(crate) const fn stripped(&self) -> Self {
        Move::new(self.from, self.to)
    }

    pub(crate) fn record_played(&mut self, kind: PieceKind, is_capture: bool) {
        self.moved_piece_kind = Some(kind);
        self.is_capture = is_capture;
    }

    pub(crate) fn record_outcome(&mut self, is_check: bool, is_checkmate: bool) {
        self.is_check = is_check;
        self.is_checkmate = is_checkmate;
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        text.parse().unwrap()
    }

    #[test]
    fn test_new_move_has_no_metadata() {
        let mv = Move::new(sq("e2"), sq("e4"));
        assert!(!mv.is_capture());
        assert!(!mv.is_check());
        assert!(!mv.is_checkmate());
        assert_eq!(mv.moved_piece_kind(), None);
    }

    #[test]
    fn test_equality_ignores_metadata() {
        let plain = Move::new(sq("g1"), sq("f3"));
        let mut played = plain;
        played.record_played(PieceKind::Knight, false);
        played.record_outcome(true, false);
        assert_eq!(plain, played);
        assert_ne!(plain, Move::new(sq("f3"), sq("g1")));
    }

    #[test]
    fn test_stripped_clears_metadata() {
        let mut mv = Move::new(sq("d1"), sq("h5"));
        mv.record_played(PieceKind::Queen, true);
        mv.record_outcome(true, true);
        let stripped = mv.stripped();
        assert!(!stripped.is_capture());
        assert!(!stripped.is_checkmate());
        assert_eq!(stripped.moved_piece_kind(), None);
    }
}
