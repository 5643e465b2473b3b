//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal move counts and perft
//! - `special_moves.rs` - Castling, en passant and promotion
//! - `draw.rs` - Stalemate and material sufficiency
//! - `proptest.rs` - Property-based tests over random playouts

mod movegen;

use crate::board::{Piece, PieceKind, Position, PositionBuilder, Side, Square};

pub(super) fn sq(text: &str) -> Square {
    text.parse().unwrap()
}

/// Build a position from the piece-placement field of a FEN string.
/// Every piece starts out unmoved.
pub(super) fn placement(board: &str) -> Position {
    let mut builder = PositionBuilder::new();
    for (row, line) in board.split('/').enumerate() {
        let rank = 7 - row as i8;
        let mut file = 0i8;
        for c in line.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as i8;
                continue;
            }
            let side = if c.is_ascii_uppercase() { Side::White } else { Side::Black };
            let kind = match c.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                other => panic!("unknown piece letter {other}"),
            };
            let square = Square::from_coords(file, rank).unwrap();
            builder = builder.placed(Piece::new(kind, side, square));
            file += 1;
        }
    }
    builder.build().unwrap()
}

/// Count leaf nodes of the legal move tree.
pub(super) fn perft(position: &Position, side: Side, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = position.legal_moves(side).unwrap();
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|mv| perft(&position.apply(mv).unwrap(), side.opponent(), depth - 1))
        .sum()
}
