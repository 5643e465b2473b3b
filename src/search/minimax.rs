use rand::seq::SliceRandom;

use super::{eval, Evaluation, SearchEngine};
use crate::board::{Move, Position, PositionError, SearchError, Side};

impl SearchEngine {
    /// Score `position` for `optimize_for` with `to_move` on move and
    /// `depth` plies left.
    ///
    /// A ply without legal moves scores `+inf` for either side; checkmate
    /// and stalemate are not told apart here.
    fn minimax(
        &mut self,
        position: &Position,
        to_move: Side,
        optimize_for: Side,
        depth: u32,
    ) -> Result<f64, PositionError> {
        if depth == 0 {
            return Ok(self.evaluate_static(position, optimize_for));
        }
        let moves = position.legal_moves(to_move)?;
        if moves.is_empty() {
            return Ok(f64::INFINITY);
        }

        let maximizing = to_move == optimize_for;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for mv in &moves {
            let child = position.apply(mv)?;
            let score = self.minimax(&child, to_move.opponent(), optimize_for, depth - 1)?;
            if (maximizing && score > best) || (!maximizing && score < best) {
                best = score;
            }
        }
        Ok(best)
    }

    pub(super) fn best_move(
        &mut self,
        position: &Position,
        side: Side,
        moves: &[Move],
    ) -> Result<Evaluation, SearchError> {
        let mut best: Option<Evaluation> = None;
        for mv in moves {
            let child = position.apply(mv)?;
            let mut score = self.minimax(&child, side.opponent(), side, self.config.depth)?;
            if let Some(piece) = position.piece_at(mv.from()) {
                score += eval::development_bonus(position, &piece);
            }
            if best.map_or(true, |b| score > b.score) {
                best = Some(Evaluation {
                    best_move: *mv,
                    score,
                });
            }
        }
        best.ok_or(SearchError::NoLegalMoves { side })
    }

    /// Keeps the candidate with the highest depth-zero score of the root
    /// position itself; candidates are not played out.
    pub(super) fn worst_move(
        &mut self,
        position: &Position,
        side: Side,
        moves: &[Move],
    ) -> Result<Evaluation, SearchError> {
        let mut best: Option<Evaluation> = None;
        for mv in moves {
            let score = self.evaluate_static(position, side);
            if best.map_or(true, |b| score > b.score) {
                best = Some(Evaluation {
                    best_move: *mv,
                    score,
                });
            }
        }
        best.ok_or(SearchError::NoLegalMoves { side })
    }

    pub(super) fn random_move(
        &mut self,
        position: &Position,
        side: Side,
        moves: &[Move],
    ) -> Result<Evaluation, SearchError> {
        let best_move = *moves
            .choose(&mut self.rng)
            .ok_or(SearchError::NoLegalMoves { side })?;
        Ok(Evaluation {
            best_move,
            score: self.evaluate_static(position, side),
        })
    }
}
