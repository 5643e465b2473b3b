//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Every square of the board in index order (a1, b1, ..., h8).
pub static ALL_SQUARES: Lazy<[Square; 64]> =
    Lazy::new(|| std::array::from_fn(Square::from_index));

/// A square on the chess board.
///
/// Stored 0-indexed internally; the public API speaks files 'a'..='h' and
/// ranks 1..=8. Ordering follows the board index (a1 < b1 < ... < h8).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Create a square from a file letter and a rank number.
    pub fn new(file: char, rank: u8) -> Result<Self, SquareError> {
        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if !(1..=8).contains(&rank) {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square {
            rank: rank - 1,
            file: file as u8 - b'a',
        })
    }

    /// Create a square from 0-indexed file and rank, if both are on the board
    #[must_use]
    pub fn from_coords(file: i8, rank: i8) -> Option<Self> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Create a square from an index (0-63, a1=0, b1=1, ..., h8=63)
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Square {
            rank: (idx / 8) as u8,
            file: (idx % 8) as u8,
        }
    }

    /// File letter ('a'..='h')
    #[inline]
    #[must_use]
    pub const fn file(self) -> char {
        (b'a' + self.file) as char
    }

    /// Rank number (1..=8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank + 1
    }

    /// 0-indexed file (0 = file a)
    #[inline]
    #[must_use]
    pub const fn file_index(self) -> i8 {
        self.file as i8
    }

    /// 0-indexed rank (0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank_index(self) -> i8 {
        self.rank as i8
    }

    /// The square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// The square shifted by file and rank deltas, if it stays on the board
    #[must_use]
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file_index().checked_add(file_delta)?;
        let rank = self.rank_index().checked_add(rank_delta)?;
        Square::from_coords(file, rank)
    }

    /// (file delta, rank delta) from `self` to `other`
    #[inline]
    #[must_use]
    pub(crate) const fn delta_to(self, other: Square) -> (i8, i8) {
        (
            other.file_index() - self.file_index(),
            other.rank_index() - self.rank_index(),
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl TryFrom<String> for Square {
    type Error = SquareError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}

impl TryFrom<(char, u8)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (char, u8)) -> Result<Self, Self::Error> {
        Square::new(file, rank)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }

        let rank = match chars[1] {
            '1'..='8' => chars[1] as u8 - b'0',
            _ => return Err(invalid()),
        };

        Square::new(chars[0], rank).map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_roundtrip() {
        let square: Square = "e4".parse().unwrap();
        assert_eq!(square.file(), 'e');
        assert_eq!(square.rank(), 4);
        assert_eq!(square.to_string(), "e4");
    }

    #[test]
    fn test_parse_rejects_bad_text() {
        for text in ["", "e", "e44", "i1", "a0", "a9", "44", "ee"] {
            assert!(
                matches!(
                    text.parse::<Square>(),
                    Err(SquareError::InvalidNotation { .. })
                ),
                "{text} should not parse"
            );
        }
    }

    #[test]
    fn test_new_bounds() {
        assert_eq!(
            Square::new('j', 1),
            Err(SquareError::FileOutOfBounds { file: 'j' })
        );
        assert_eq!(
            Square::new('a', 9),
            Err(SquareError::RankOutOfBounds { rank: 9 })
        );
        assert_eq!(Square::new('H', 8).unwrap().to_string(), "h8");
    }

    #[test]
    fn test_ordering_follows_index() {
        let a1: Square = "a1".parse().unwrap();
        let h1: Square = "h1".parse().unwrap();
        let a2: Square = "a2".parse().unwrap();
        assert!(a1 < h1);
        assert!(h1 < a2);
        assert_eq!(a2.index(), 8);
    }

    #[test]
    fn test_all_squares_table() {
        assert_eq!(ALL_SQUARES.len(), 64);
        assert_eq!(ALL_SQUARES[0].to_string(), "a1");
        assert_eq!(ALL_SQUARES[63].to_string(), "h8");
        assert!(ALL_SQUARES.iter().enumerate().all(|(i, sq)| sq.index() == i));
    }

    #[test]
    fn test_offset_stays_on_board() {
        let h8: Square = "h8".parse().unwrap();
        assert_eq!(h8.offset(1, 0), None);
        assert_eq!(h8.offset(-1, -1).unwrap().to_string(), "g7");
    }

    #[test]
    fn test_offset_extreme_deltas() {
        let h8: Square = "h8".parse().unwrap();
        let a1: Square = "a1".parse().unwrap();
        assert_eq!(h8.offset(i8::MAX, 0), None);
        assert_eq!(h8.offset(0, i8::MAX), None);
        assert_eq!(a1.offset(i8::MIN, 0), None);
        assert_eq!(a1.offset(0, i8::MIN), None);
    }
}
