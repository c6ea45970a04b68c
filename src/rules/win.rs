//! Terminal conditions
//!
//! A side loses as soon as it has finished placing and either holds fewer
//! than three pieces or has no legal action left. Checked before every
//! action application; bomb blasts can end the game the same way.

use super::moves::legal_actions;
use crate::board::{GameState, Side, FLYING_THRESHOLD};

/// Determine the winner of a finished game, or `None` while play goes on.
#[must_use]
pub fn winner(state: &GameState) -> Option<Side> {
    let human = state.side(Side::Human);
    let ai = state.side(Side::Ai);

    if human.done_placing() && human.on_board < FLYING_THRESHOLD {
        return Some(Side::Ai);
    }
    if ai.done_placing() && ai.on_board < FLYING_THRESHOLD {
        return Some(Side::Human);
    }
    if human.done_placing() && legal_actions(state, Side::Human).is_empty() {
        return Some(Side::Ai);
    }
    if ai.done_placing() && legal_actions(state, Side::Ai).is_empty() {
        return Some(Side::Human);
    }
    None
}

/// Check whether the game is over.
#[inline]
#[must_use]
pub fn is_game_over(state: &GameState) -> bool {
    winner(state).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put(state: &mut GameState, pos: usize, side: Side) {
        state.board[pos] = Some(side);
        state.side_mut(side).on_board += 1;
    }

    #[test]
    fn test_fresh_game_not_over() {
        let state = GameState::new();
        assert!(!is_game_over(&state));
    }

    #[test]
    fn test_under_three_pieces_loses_immediately() {
        let mut state = GameState::new();
        state.side_mut(Side::Human).to_place = 0;
        put(&mut state, 0, Side::Human);
        put(&mut state, 1, Side::Human);
        // Regardless of whose turn it is.
        for turn in [Side::Human, Side::Ai] {
            state.turn = turn;
            assert_eq!(winner(&state), Some(Side::Ai));
        }
    }

    #[test]
    fn test_under_three_allowed_while_still_placing() {
        let mut state = GameState::new();
        put(&mut state, 0, Side::Human);
        state.side_mut(Side::Human).to_place = 8;
        assert!(!is_game_over(&state));
    }

    #[test]
    fn test_immobilized_side_loses() {
        let mut state = GameState::new();
        state.side_mut(Side::Human).to_place = 0;
        state.side_mut(Side::Ai).to_place = 0;
        // Human pieces at 0, 1, 9 with every neighbor blocked by the AI.
        for pos in [0, 1, 9] {
            put(&mut state, pos, Side::Human);
        }
        for pos in [2, 4, 10, 21] {
            put(&mut state, pos, Side::Ai);
        }
        // Keep the human above the flying threshold is impossible with 3
        // pieces; give it a fourth, still boxed in.
        put(&mut state, 22, Side::Human);
        put(&mut state, 19, Side::Ai);
        put(&mut state, 23, Side::Ai);
        assert_eq!(winner(&state), Some(Side::Ai));
    }

    #[test]
    fn test_mobile_sides_keep_playing() {
        let mut state = GameState::new();
        state.side_mut(Side::Human).to_place = 0;
        state.side_mut(Side::Ai).to_place = 0;
        for pos in [0, 1, 2, 9] {
            put(&mut state, pos, Side::Human);
        }
        for pos in [21, 22, 23, 14] {
            put(&mut state, pos, Side::Ai);
        }
        assert_eq!(winner(&state), None);
    }
}
