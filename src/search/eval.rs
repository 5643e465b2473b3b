//! Static evaluation terms.

use crate::board::{Piece, Position, Side};

/// First turn on which undeveloped minor pieces earn a bonus.
const DEVELOPMENT_START_TURN: u32 = 3;
const DEVELOPMENT_BASE: f64 = 0.25;
const DEVELOPMENT_PER_TURN: f64 = 0.10;
const DEVELOPMENT_CAP: f64 = 1.50;

/// Material of `side` minus material of its opponent.
pub(crate) fn material_balance(position: &Position, side: Side) -> f64 {
    f64::from(position.material(side)) - f64::from(position.material(side.opponent()))
}

/// Bonus for moving a Knight or Bishop off its starting square.
///
/// Zero before turn 3; afterwards it grows by 0.10 per turn from 0.25 and
/// is capped at 1.50.
pub(crate) fn development_bonus(position: &Position, piece: &Piece) -> f64 {
    let turn = position.turn();
    if turn < DEVELOPMENT_START_TURN || piece.has_moved() || !piece.kind().is_minor() {
        return 0.0;
    }
    let elapsed = f64::from(turn - DEVELOPMENT_START_TURN);
    (DEVELOPMENT_BASE + DEVELOPMENT_PER_TURN * elapsed).min(DEVELOPMENT_CAP)
}
