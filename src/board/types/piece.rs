//! Piece kinds, sides and pieces.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::movegen::{kings, knights, pawns, sliders};
use crate::board::Position;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value: Pawn 1, Knight/Bishop 3, Rook 5, Queen 9, King 0.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Upper-case notation letter
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Returns true for Bishop and Knight
    #[inline]
    #[must_use]
    pub const fn is_minor(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Knight)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        f.write_str(name)
    }
}

/// The two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides in index order (White=0, Black=1)
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    /// Returns the opposite side
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Back rank for this side (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn back_rank(self) -> i8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_rank(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_promotion_rank(self) -> i8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on the board.
///
/// Pieces carry their own square and history flags but never a reference to
/// the position holding them; rule queries take the position as a parameter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    side: Side,
    square: Square,
    has_moved: bool,
    en_passant_vulnerable: bool,
}

impl Piece {
    /// A piece that has not moved yet
    #[must_use]
    pub const fn new(kind: PieceKind, side: Side, square: Square) -> Self {
        Piece {
            kind,
            side,
            square,
            has_moved: false,
            en_passant_vulnerable: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// True for a pawn that double-stepped on its side's latest move
    #[inline]
    #[must_use]
    pub const fn en_passant_vulnerable(&self) -> bool {
        self.en_passant_vulnerable
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.kind.value()
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        self.kind.letter()
    }

    /// Mark the piece as moved, e.g. for positions set up mid-game
    #[must_use]
    pub const fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }

    pub(crate) fn relocate(&mut self, to: Square) {
        self.square = to;
        self.has_moved = true;
    }

    pub(crate) fn set_en_passant_vulnerable(&mut self, vulnerable: bool) {
        self.en_passant_vulnerable = vulnerable && self.kind == PieceKind::Pawn;
    }

    pub(crate) fn promote(&mut self, kind: PieceKind) {
        self.kind = kind;
        self.en_passant_vulnerable = false;
    }

    /// Geometry and occupancy check for moving to `to`, ignoring self-check.
    #[must_use]
    pub fn pseudo_legal(&self, to: Square, position: &Position) -> bool {
        if to == self.square {
            return false;
        }
        match self.kind {
            PieceKind::Pawn => pawns::pawn_move(self, to, position),
            PieceKind::Knight => knights::knight_move(self, to, position),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                sliders::slider_move(self, to, position)
            }
            PieceKind::King => kings::king_move(self, to, position),
        }
    }

    /// Whether this piece would capture on `target` if an enemy stood there.
    #[must_use]
    pub fn attacks(&self, target: Square, position: &Position) -> bool {
        if target == self.square {
            return false;
        }
        match self.kind {
            PieceKind::Pawn => pawns::pawn_attacks(self, target),
            PieceKind::Knight => knights::knight_reaches(self.square, target),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                sliders::slider_reaches(self.kind, self.square, target, position)
            }
            PieceKind::King => kings::king_reaches(self.square, target),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.side {
            Side::White => "(Wh)",
            Side::Black => "(Bl)",
        };
        write!(f, "{prefix}{}{}", self.kind.letter(), self.square)
    }
}
