use std::fmt;

use once_cell::sync::Lazy;

use super::{Piece, PieceKind, Side, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

static STARTING_POSITION: Lazy<Position> = Lazy::new(|| {
    let mut position = Position::empty();
    for (file, kind) in (0i8..).zip(BACK_RANK) {
        for (side, back, pawns) in [(Side::White, 0, 1), (Side::Black, 7, 6)] {
            if let Some(square) = Square::from_coords(file, back) {
                position.put(Piece::new(kind, side, square));
            }
            if let Some(square) = Square::from_coords(file, pawns) {
                position.put(Piece::new(PieceKind::Pawn, side, square));
            }
        }
    }
    position
});

/// A snapshot of the board after some number of plies.
///
/// Pieces are owned by value in a 64-slot array indexed by square, so no
/// two pieces can share a square and cloning is a plain copy of the array
/// plus the captured lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) captured: [Vec<Piece>; 2],
    pub(crate) ply_counter: u32,
}

impl Position {
    /// The standard starting arrangement.
    #[must_use]
    pub fn starting() -> Self {
        STARTING_POSITION.clone()
    }

    pub(crate) fn empty() -> Self {
        Position {
            squares: [None; 64],
            captured: [Vec::new(), Vec::new()],
            ply_counter: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Every piece on the board in square order (a1, b1, ..., h8)
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten()
    }

    /// Pieces owned by `side` in square order
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.side() == side)
    }

    /// Pieces captured by `side`, oldest first
    #[must_use]
    pub fn captured(&self, side: Side) -> &[Piece] {
        &self.captured[side.index()]
    }

    /// Plies applied since the position was set up
    #[inline]
    #[must_use]
    pub fn ply_counter(&self) -> u32 {
        self.ply_counter
    }

    /// Turn number starting at 1, advanced by every ply
    #[inline]
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.ply_counter + 1
    }

    pub(crate) fn put(&mut self, piece: Piece) {
        self.squares[piece.square().index()] = Some(piece);
    }

    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let symbol = Square::from_coords(file, rank)
                    .and_then(|square| self.piece_at(square))
                    .map_or('.', |piece| match piece.side() {
                        Side::White => piece.letter(),
                        Side::Black => piece.letter().to_ascii_lowercase(),
                    });
                write!(f, "{symbol} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
