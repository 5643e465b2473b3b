//! Turn sequencing, move history and result classification.
//!
//! A [`Game`] holds the one live [`Position`] and swaps it for the result
//! of [`Position::apply`] on every accepted move.

mod result;

pub use result::GameResult;

use crate::board::{
    movetext, ChessError, Move, Piece, PieceKind, Position, PositionError, Side, Square,
    SquareError,
};

/// Quiet moves (no pawn move, no capture) that end the game in a draw.
const FIFTY_MOVE_LIMIT: u32 = 50;

/// History length from which the repetition pattern is examined.
const REPETITION_WINDOW: usize = 8;

/// Repetition heuristic over the raw move list.
///
/// Compares the last move with the one two plies earlier, the one before
/// last with the one three plies earlier, and the moves four and six plies
/// back. Moves compare by origin and destination only.
fn repeats(history: &[Move]) -> bool {
    if history.len() < REPETITION_WINDOW {
        return false;
    }
    let last = history.len() - 1;
    history[last] == history[last - 2]
        && history[last - 1] == history[last - 3]
        && history[last - 4] == history[last - 6]
}

/// A game in progress from a starting position.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    side_to_move: Side,
    history: Vec<Move>,
    halfmove_clock: u32,
    result: GameResult,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game {
            position: Position::starting(),
            side_to_move: Side::White,
            history: Vec::new(),
            halfmove_clock: 0,
            result: GameResult::Ongoing,
        }
    }

    /// Start from an arbitrary position with `side` to move.
    ///
    /// The result is classified immediately, so a position that is already
    /// mate, stalemate or a dead draw starts out terminal.
    ///
    /// # Errors
    /// A [`PositionError`] if either side does not have exactly one King.
    pub fn from_position(position: Position, side: Side) -> Result<Self, PositionError> {
        for s in Side::BOTH {
            position.king_square(s)?;
        }
        let no_moves = position.has_no_legal_moves(side)?;
        let in_check = position.in_check(side)?;
        let mut game = Game {
            position,
            side_to_move: side,
            history: Vec::new(),
            halfmove_clock: 0,
            result: GameResult::Ongoing,
        };
        game.result = game.classify(no_moves, in_check);
        Ok(game)
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.piece_at(square)
    }

    #[inline]
    #[must_use]
    pub fn current_position(&self) -> &Position {
        &self.position
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.result.is_terminal()
    }

    /// Every accepted move, oldest first, with notation metadata filled in.
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Plies since the last pawn move or capture.
    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Numbered movetext of the history, e.g. `1. e2e4 e7e5 2. Ng1f3`.
    ///
    /// Numbering assumes White moved first.
    #[must_use]
    pub fn movetext(&self) -> String {
        movetext(&self.history)
    }

    /// Play a move for the side to move.
    ///
    /// Returns `Ok(false)` and leaves the game untouched when the origin is
    /// empty, holds an enemy piece, the move is not legal, or the game is
    /// already over.
    ///
    /// # Errors
    /// A [`PositionError`] only when the position is corrupted (a King is
    /// missing or duplicated).
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<bool, PositionError> {
        if self.result.is_terminal() {
            log_debug!("Rejected {}{}: game is over ({})", from, to, self.result);
            return Ok(false);
        }
        let Some(piece) = self.position.piece_at(from) else {
            log_debug!("Rejected {}{}: no piece on {}", from, to, from);
            return Ok(false);
        };
        if piece.side() != self.side_to_move {
            log_debug!("Rejected {}{}: {} is not to move", from, to, piece.side());
            return Ok(false);
        }
        if !self.position.is_legal(from, to)? {
            log_debug!("Rejected {}{}: illegal for {}", from, to, piece);
            return Ok(false);
        }

        let mut mv = Move::new(from, to);
        let is_capture = self.position.capture_target(&piece, to).is_some();
        mv.record_played(piece.kind(), is_capture);

        let next = self.position.apply(&mv)?;
        let opponent = self.side_to_move.opponent();
        let no_moves = next.has_no_legal_moves(opponent)?;
        let in_check = next.in_check(opponent)?;
        mv.record_outcome(in_check, in_check && no_moves);

        self.position = next;
        self.side_to_move = opponent;
        if piece.kind() == PieceKind::Pawn || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        self.history.push(mv);
        self.result = self.classify(no_moves, in_check);

        log_debug!("Played {} ({} to move, {})", mv, self.side_to_move, self.result);
        Ok(true)
    }

    /// Submit a caller-built move. Any metadata it carries is discarded and
    /// recomputed.
    ///
    /// # Errors
    /// See [`submit_move`](Self::submit_move).
    pub fn submit(&mut self, mv: Move) -> Result<bool, PositionError> {
        let mv = mv.stripped();
        self.submit_move(mv.from(), mv.to())
    }

    /// Play a move given in coordinate text such as `"e2e4"`.
    ///
    /// # Errors
    /// `ChessError::Square` for malformed text, `ChessError::Position` for a
    /// corrupted position.
    pub fn play(&mut self, text: &str) -> Result<bool, ChessError> {
        let text = text.trim();
        let (from, to) = match (text.get(..2), text.get(2..)) {
            (Some(from), Some(to)) => (from.parse::<Square>()?, to.parse::<Square>()?),
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: text.to_string(),
                }
                .into())
            }
        };
        Ok(self.submit_move(from, to)?)
    }

    /// Classify the current state. Each later rule overrides an earlier
    /// verdict.
    fn classify(&self, no_moves: bool, in_check: bool) -> GameResult {
        let mut result = GameResult::Ongoing;
        if no_moves {
            result = if in_check {
                GameResult::win_for(self.side_to_move.opponent())
            } else {
                GameResult::Stalemate
            };
        }
        if self.position.is_insufficient_material() {
            result = GameResult::InsufficientMaterial;
        }
        if self.halfmove_clock >= FIFTY_MOVE_LIMIT {
            result = GameResult::FiftyMoveDraw;
        }
        if repeats(&self.history) {
            result = GameResult::RepetitionDraw;
        }
        result
    }
}
