//! Legal move counts for known positions.

use super::{perft, placement, sq};
use crate::board::{Move, Position, Side};

struct TestPosition {
    name: &'static str,
    board: &'static str,
    side: Side,
    depths: &'static [(u32, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        board: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        side: Side::White,
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Position 3",
        board: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        side: Side::White,
        depths: &[(1, 14), (2, 191)],
    },
    TestPosition {
        name: "Castling",
        board: "r3k2r/8/8/8/8/8/8/R3K2R",
        side: Side::White,
        depths: &[(1, 26), (2, 568)],
    },
];

#[test]
fn test_perft_positions() {
    for test in TEST_POSITIONS {
        let position = placement(test.board);
        for &(depth, expected) in test.depths {
            let nodes = perft(&position, test.side, depth);
            assert_eq!(nodes, expected, "{} depth {}", test.name, depth);
        }
    }
}

#[test]
fn test_starting_moves_are_pawns_and_knights() {
    let moves = Position::starting().legal_moves(Side::White).unwrap();
    let knight_moves = moves
        .iter()
        .filter(|mv| mv.from() == sq("b1") || mv.from() == sq("g1"))
        .count();
    assert_eq!(moves.len(), 20);
    assert_eq!(knight_moves, 4);
}

#[test]
fn test_black_has_twenty_replies() {
    for first in ["e2e4", "a2a3", "g1f3"] {
        let (from, to) = first.split_at(2);
        let position = Position::starting()
            .apply(&Move::new(sq(from), sq(to)))
            .unwrap();
        assert_eq!(position.legal_moves(Side::Black).unwrap().len(), 20, "{first}");
    }
}

#[test]
fn test_legal_moves_match_legal_destinations() {
    let position = placement("r3k2r/8/8/8/8/8/8/R3K2R");
    let from_king: Vec<_> = position
        .legal_moves(Side::White)
        .unwrap()
        .into_iter()
        .filter(|mv| mv.from() == sq("e1"))
        .map(|mv| mv.to())
        .collect();
    assert_eq!(from_king, position.legal_destinations(sq("e1")).unwrap());
    assert!(from_king.contains(&sq("g1")));
    assert!(from_king.contains(&sq("c1")));
}
