//! Coordinate move notation.
//!
//! A move renders as the piece letter (omitted for pawns), the origin
//! square, `x` for a capture, the destination square and a `+` or `#`
//! suffix, e.g. `Ng1f3`, `e4xd5`, `Qd1h5#`.

use std::fmt;

use super::{Move, PieceKind};

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.moved_piece_kind() {
            Some(PieceKind::Pawn) | None => {}
            Some(kind) => write!(f, "{}", kind.letter())?,
        }
        write!(f, "{}", self.from())?;
        if self.is_capture() {
            f.write_str("x")?;
        }
        write!(f, "{}", self.to())?;
        if self.is_checkmate() {
            f.write_str("#")?;
        } else if self.is_check() {
            f.write_str("+")?;
        }
        Ok(())
    }
}

/// Numbered movetext for a move list that starts with White,
/// e.g. `1. e2e4 e7e5 2. Ng1f3`.
#[must_use]
pub fn movetext(moves: &[Move]) -> String {
    moves
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let mut entry = format!("{}. {}", i + 1, pair[0]);
            if let Some(reply) = pair.get(1) {
                entry.push(' ');
                entry.push_str(&reply.to_string());
            }
            entry
        })
        .collect::<Vec<_>>()
        .join(" ")
}
