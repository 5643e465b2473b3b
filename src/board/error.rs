//! Error types for board, game and search operations.

use std::fmt;

use super::{Side, Square};

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File outside 'a'..='h'
    FileOutOfBounds { file: char },
    /// Rank outside 1..=8
    RankOutOfBounds { rank: u8 },
    /// Text that is not exactly a file letter followed by a rank digit
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File '{file}' out of bounds (must be a-h)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 1-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for positions that break the board invariants.
///
/// `MissingKing`, `DuplicateKing` and `KingCapture` mean the position is
/// corrupted and cannot be played from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// The side has no King on the board
    MissingKing { side: Side },
    /// The side has more than one King on the board
    DuplicateKing { side: Side },
    /// A move was applied from an empty square
    EmptyOrigin { square: Square },
    /// A move would remove a King from the board
    KingCapture { square: Square },
    /// A move would land on a piece of the mover's own side
    SquareOccupied { square: Square },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { side } => {
                write!(f, "Corrupted position: no {side} king")
            }
            PositionError::DuplicateKing { side } => {
                write!(f, "Corrupted position: more than one {side} king")
            }
            PositionError::EmptyOrigin { square } => {
                write!(f, "No piece to move on {square}")
            }
            PositionError::KingCapture { square } => {
                write!(f, "Move would capture the king on {square}")
            }
            PositionError::SquareOccupied { square } => {
                write!(f, "Move lands on own piece on {square}")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for search failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The search was asked to move in a position without legal moves
    NoLegalMoves { side: Side },
    /// The searched position is corrupted
    Position(PositionError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoLegalMoves { side } => {
                write!(f, "Needed a legal move for {side}, but none exist")
            }
            SearchError::Position(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Position(err) => Some(err),
            SearchError::NoLegalMoves { .. } => None,
        }
    }
}

impl From<PositionError> for SearchError {
    fn from(err: PositionError) -> Self {
        SearchError::Position(err)
    }
}

/// Any error the crate can report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    Square(SquareError),
    Position(PositionError),
    Search(SearchError),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::Square(err) => write!(f, "{err}"),
            ChessError::Position(err) => write!(f, "{err}"),
            ChessError::Search(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ChessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChessError::Square(err) => Some(err),
            ChessError::Position(err) => Some(err),
            ChessError::Search(err) => Some(err),
        }
    }
}

impl From<SquareError> for ChessError {
    fn from(err: SquareError) -> Self {
        ChessError::Square(err)
    }
}

impl From<PositionError> for ChessError {
    fn from(err: PositionError) -> Self {
        ChessError::Position(err)
    }
}

impl From<SearchError> for ChessError {
    fn from(err: SearchError) -> Self {
        ChessError::Search(err)
    }
}
