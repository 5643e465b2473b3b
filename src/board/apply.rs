use super::movegen::kings::castling_rook_squares;
use super::movegen::pawns::en_passant_victim;
use super::{Move, Piece, PieceKind, Position, PositionError, Square};

impl Position {
    /// The piece a move by `mover` to `to` would remove from the board.
    ///
    /// This is the piece standing on `to`, or the passed pawn for a
    /// diagonal pawn step onto an empty square.
    pub(crate) fn capture_target(&self, mover: &Piece, to: Square) -> Option<Piece> {
        if let Some(target) = self.piece_at(to) {
            return Some(target);
        }
        let (df, _) = mover.square().delta_to(to);
        if mover.kind() == PieceKind::Pawn && df != 0 {
            return en_passant_victim(mover, to, self);
        }
        None
    }

    /// Apply `mv` and return the resulting position.
    ///
    /// The receiver is left untouched. Legality is not checked here; the
    /// move is carried out as given, including the castling Rook hop, the
    /// en passant removal and automatic promotion to a Queen.
    ///
    /// # Errors
    /// `EmptyOrigin` when nothing stands on `mv.from()`, `SquareOccupied`
    /// when the destination holds a piece of the mover's side, and
    /// `KingCapture` when the move would remove a King.
    pub fn apply(&self, mv: &Move) -> Result<Position, PositionError> {
        let (from, to) = (mv.from(), mv.to());
        let mut next = self.clone();
        let mut mover = next
            .take(from)
            .ok_or(PositionError::EmptyOrigin { square: from })?;

        for piece in next.squares.iter_mut().flatten() {
            if piece.side() == mover.side() {
                piece.set_en_passant_vulnerable(false);
            }
        }
        mover.set_en_passant_vulnerable(false);

        let castle = match mover.kind() {
            PieceKind::King if !mover.has_moved() && next.piece_at(to).is_none() => {
                castling_rook_squares(from, to)
            }
            _ => None,
        };

        if let Some((rook_from, rook_to)) = castle {
            if let Some(mut rook) = next.take(rook_from) {
                rook.relocate(rook_to);
                next.put(rook);
            }
        } else if let Some(victim) = next.capture_target(&mover, to) {
            if victim.side() == mover.side() {
                return Err(PositionError::SquareOccupied { square: to });
            }
            if victim.kind() == PieceKind::King {
                return Err(PositionError::KingCapture {
                    square: victim.square(),
                });
            }
            next.take(victim.square());
            next.captured[mover.side().index()].push(victim);
        }

        if mover.kind() == PieceKind::Pawn {
            let (_, dr) = from.delta_to(to);
            if dr.abs() == 2 {
                mover.set_en_passant_vulnerable(true);
            }
            if to.rank_index() == mover.side().pawn_promotion_rank() {
                mover.promote(PieceKind::Queen);
            }
        }

        mover.relocate(to);
        next.put(mover);
        next.ply_counter += 1;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Move, Piece, PieceKind, Position, PositionBuilder, PositionError, Side, Square};

    fn sq(text: &str) -> Square {
        text.parse().unwrap()
    }

    fn mv(from: &str, to: &str) -> Move {
        Move::new(sq(from), sq(to))
    }

    #[test]
    fn test_apply_is_pure() {
        let start = Position::starting();
        let next = start.apply(&mv("e2", "e4")).unwrap();
        assert!(start.piece_at(sq("e2")).is_some());
        assert!(start.piece_at(sq("e4")).is_none());
        assert!(next.piece_at(sq("e2")).is_none());

        let pawn = next.piece_at(sq("e4")).unwrap();
        assert!(pawn.has_moved());
        assert!(pawn.en_passant_vulnerable());
        assert_eq!(next.ply_counter(), 1);
    }

    #[test]
    fn test_vulnerability_cleared_on_owner_next_move() {
        let position = Position::starting()
            .apply(&mv("e2", "e4"))
            .unwrap()
            .apply(&mv("g8", "f6"))
            .unwrap();
        assert!(position.piece_at(sq("e4")).unwrap().en_passant_vulnerable());

        let position = position.apply(&mv("b1", "c3")).unwrap();
        assert!(!position.piece_at(sq("e4")).unwrap().en_passant_vulnerable());
    }

    #[test]
    fn test_capture_is_credited_to_capturer() {
        let position = PositionBuilder::new()
            .piece(sq("e1"), Side::White, PieceKind::King)
            .piece(sq("e8"), Side::Black, PieceKind::King)
            .piece(sq("d1"), Side::White, PieceKind::Rook)
            .piece(sq("d7"), Side::Black, PieceKind::Knight)
            .build()
            .unwrap();
        let next = position.apply(&mv("d1", "d7")).unwrap();
        assert_eq!(next.captured(Side::White).len(), 1);
        assert_eq!(next.captured(Side::White)[0].kind(), PieceKind::Knight);
        assert!(next.captured(Side::Black).is_empty());
        assert_eq!(next.piece_at(sq("d7")).unwrap().kind(), PieceKind::Rook);
    }

    #[test]
    fn test_castling_moves_rook() {
        let position = PositionBuilder::new()
            .piece(sq("e1"), Side::White, PieceKind::King)
            .piece(sq("h1"), Side::White, PieceKind::Rook)
            .piece(sq("a1"), Side::White, PieceKind::Rook)
            .piece(sq("e8"), Side::Black, PieceKind::King)
            .build()
            .unwrap();

        let short = position.apply(&mv("e1", "g1")).unwrap();
        assert_eq!(short.piece_at(sq("g1")).unwrap().kind(), PieceKind::King);
        assert_eq!(short.piece_at(sq("f1")).unwrap().kind(), PieceKind::Rook);
        assert!(short.piece_at(sq("h1")).is_none());

        let long = position.apply(&mv("e1", "c1")).unwrap();
        assert_eq!(long.piece_at(sq("d1")).unwrap().kind(), PieceKind::Rook);
        assert!(long.piece_at(sq("a1")).is_none());
    }

    #[test]
    fn test_en_passant_removes_passed_pawn() {
        let position = PositionBuilder::new()
            .piece(sq("e1"), Side::White, PieceKind::King)
            .piece(sq("e8"), Side::Black, PieceKind::King)
            .placed(Piece::new(PieceKind::Pawn, Side::White, sq("e5")).moved())
            .piece(sq("d7"), Side::Black, PieceKind::Pawn)
            .build()
            .unwrap();
        let position = position.apply(&mv("d7", "d5")).unwrap();
        let next = position.apply(&mv("e5", "d6")).unwrap();
        assert!(next.piece_at(sq("d5")).is_none());
        assert_eq!(next.piece_at(sq("d6")).unwrap().side(), Side::White);
        assert_eq!(next.captured(Side::White)[0].square(), sq("d5"));
    }

    #[test]
    fn test_promotion_to_queen() {
        let position = PositionBuilder::new()
            .piece(sq("e1"), Side::White, PieceKind::King)
            .piece(sq("h8"), Side::Black, PieceKind::King)
            .placed(Piece::new(PieceKind::Pawn, Side::Black, sq("b2")).moved())
            .build()
            .unwrap();
        let next = position.apply(&mv("b2", "b1")).unwrap();
        let queen = next.piece_at(sq("b1")).unwrap();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.side(), Side::Black);
    }

    #[test]
    fn test_apply_errors() {
        let start = Position::starting();
        assert_eq!(
            start.apply(&mv("e4", "e5")),
            Err(PositionError::EmptyOrigin { square: sq("e4") })
        );
        assert_eq!(
            start.apply(&mv("a1", "a2")),
            Err(PositionError::SquareOccupied { square: sq("a2") })
        );

        let facing = PositionBuilder::new()
            .piece(sq("e1"), Side::White, PieceKind::King)
            .piece(sq("e8"), Side::Black, PieceKind::King)
            .piece(sq("e5"), Side::White, PieceKind::Rook)
            .build()
            .unwrap();
        assert_eq!(
            facing.apply(&mv("e5", "e8")),
            Err(PositionError::KingCapture { square: sq("e8") })
        );
    }
}
