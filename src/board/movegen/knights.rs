use super::super::{Piece, Position, Square};
use super::can_land_on;

/// One axis differs by two and the other by one.
pub(crate) fn knight_reaches(from: Square, to: Square) -> bool {
    let (df, dr) = from.delta_to(to);
    matches!((df.abs(), dr.abs()), (1, 2) | (2, 1))
}

pub(crate) fn knight_move(knight: &Piece, to: Square, position: &Position) -> bool {
    knight_reaches(knight.square(), to) && can_land_on(knight, to, position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        text.parse().unwrap()
    }

    #[test]
    fn test_knight_geometry() {
        assert!(knight_reaches(sq("a1"), sq("b3")));
        assert!(knight_reaches(sq("a1"), sq("c2")));
        assert!(knight_reaches(sq("c2"), sq("a1")));
        assert!(!knight_reaches(sq("b2"), sq("b2")));
        assert!(!knight_reaches(sq("a1"), sq("a8")));
        assert!(!knight_reaches(sq("e6"), sq("f6")));
        assert!(!knight_reaches(sq("a1"), sq("c3")));
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let position = Position::starting();
        let knight = position.piece_at(sq("g1")).unwrap();
        assert!(knight.pseudo_legal(sq("f3"), &position));
        assert!(knight.pseudo_legal(sq("h3"), &position));
        assert!(!knight.pseudo_legal(sq("e2"), &position));
    }
}
