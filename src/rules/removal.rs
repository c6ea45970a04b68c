//! Capture (removal) rules after a completed mill
//!
//! Forming a mill grants one removal of an opponent piece. Pieces inside a
//! formed mill are protected unless every opponent piece is milled at once
//! (the standard "no capturing from a mill unless forced" exception).
//! Eligibility is recomputed fresh from the board on every query.

use super::mill::is_in_mill;
use crate::board::{GameState, Side, NUM_POSITIONS};
use crate::bomb::Bomb;
use crate::error::{GameError, GameResult};

/// Check whether the piece at `pos` may be removed by `capturing`.
#[must_use]
pub fn capture_eligible(state: &GameState, pos: usize, capturing: Side) -> bool {
    let opponent = capturing.opponent();
    if pos >= NUM_POSITIONS || state.cell(pos) != Some(opponent) {
        return false;
    }
    if !is_in_mill(state, pos, opponent) {
        return true;
    }
    // Milled piece: only removable when every opponent piece is milled.
    state
        .piece_positions(opponent)
        .all(|p| is_in_mill(state, p, opponent))
}

/// All capture-eligible positions for `capturing`, ascending.
#[must_use]
pub fn eligible_captures(state: &GameState, capturing: Side) -> Vec<usize> {
    (0..NUM_POSITIONS)
        .filter(|&pos| capture_eligible(state, pos, capturing))
        .collect()
}

/// Remove the opponent piece at `pos` permanently (a mill capture).
///
/// Any bomb riding the captured piece is disarmed and returned so the
/// search can reattach it on unmake; the session simply drops it. Fails
/// without mutation if the position is not capture-eligible.
pub fn apply_capture(
    state: &mut GameState,
    pos: usize,
    capturing: Side,
) -> GameResult<Option<Bomb>> {
    if !capture_eligible(state, pos, capturing) {
        return Err(GameError::IllegalRemoval { pos });
    }
    let bomb = state.bombs.disarm_at(pos);
    let opponent = capturing.opponent();
    state.board[pos] = None;
    state.side_mut(opponent).on_board -= 1;
    Ok(bomb)
}

/// Exact inverse of [`apply_capture`], reattaching the disarmed bomb.
pub fn undo_capture(state: &mut GameState, pos: usize, capturing: Side, bomb: Option<Bomb>) {
    let opponent = capturing.opponent();
    debug_assert!(state.is_empty(pos));
    state.board[pos] = Some(opponent);
    state.side_mut(opponent).on_board += 1;
    if let Some(b) = bomb {
        state.bombs.reattach(b);
    }
}
