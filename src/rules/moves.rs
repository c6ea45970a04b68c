//! Placement and movement legality, action application and unmake
//!
//! `apply_action` / `undo_action` are the make/unmake pair the search
//! backtracks with: `undo_action` is the exact structural inverse of
//! `apply_action`, including the relocation of a bomb riding the moved
//! piece. Neither touches bomb timers, bomb availability of other actions,
//! last-move records, or the session's undo snapshots.

use super::mill::forms_mill;
use super::removal::undo_capture;
use crate::board::{Action, CompoundAction, GameState, Side, ADJACENT, NUM_POSITIONS};
use crate::bomb::Bomb;
use crate::error::{GameError, GameResult};

/// Check whether a reserve piece may be placed on `to`.
#[inline]
#[must_use]
pub fn is_valid_place(state: &GameState, to: usize) -> bool {
    to < NUM_POSITIONS && state.is_empty(to)
}

/// Check whether `side` may move a piece from `from` to `to`.
///
/// Requires the side to have finished placing. Destinations are adjacent
/// empty cells, or any empty cell once the side is flying.
#[must_use]
pub fn is_valid_move(state: &GameState, side: Side, from: usize, to: usize) -> bool {
    if from >= NUM_POSITIONS || to >= NUM_POSITIONS {
        return false;
    }
    if state.cell(from) != Some(side) || !state.is_empty(to) {
        return false;
    }
    let pools = state.side(side);
    if !pools.done_placing() {
        return false;
    }
    if pools.can_fly() {
        true
    } else {
        ADJACENT[from].contains(&to)
    }
}

/// Check whether `side` may arm its bomb on `target`.
///
/// The target must be an own, bomb-free piece on the board, and the side's
/// one-time permission must still be unspent.
#[must_use]
pub fn is_valid_bomb_arm(state: &GameState, side: Side, target: usize) -> bool {
    target < NUM_POSITIONS
        && state.side(side).bomb_available
        && state.side(side).on_board > 0
        && state.cell(target) == Some(side)
        && !state.bombs.is_armed(target)
}

/// Empty cells available for placement, ascending. Empty once the side
/// has no reserve pieces left.
#[must_use]
pub fn legal_placements(state: &GameState, side: Side) -> Vec<usize> {
    if state.side(side).done_placing() {
        return Vec::new();
    }
    (0..NUM_POSITIONS)
        .filter(|&pos| state.is_empty(pos))
        .collect()
}

/// All `(from, to)` movements for `side`, in from-ascending order.
///
/// An empty result for a side that has finished placing is a terminal
/// signal (the side is immobilized and loses).
#[must_use]
pub fn legal_moves(state: &GameState, side: Side) -> Vec<(usize, usize)> {
    let pools = state.side(side);
    if !pools.done_placing() {
        return Vec::new();
    }
    let mut moves = Vec::new();
    if pools.can_fly() {
        for from in state.piece_positions(side) {
            for to in 0..NUM_POSITIONS {
                if state.is_empty(to) {
                    moves.push((from, to));
                }
            }
        }
    } else {
        for from in state.piece_positions(side) {
            for &to in ADJACENT[from] {
                if state.is_empty(to) {
                    moves.push((from, to));
                }
            }
        }
    }
    moves
}

/// The action set the search and mobility evaluation enumerate:
/// placements while the side still has reserve pieces, movements after.
/// Bomb arming is a turn-policy decision, never part of this set.
#[must_use]
pub fn legal_actions(state: &GameState, side: Side) -> Vec<Action> {
    if !state.side(side).done_placing() {
        legal_placements(state, side)
            .into_iter()
            .map(|to| Action::Place { to })
            .collect()
    } else {
        legal_moves(state, side)
            .into_iter()
            .map(|(from, to)| Action::Move { from, to })
            .collect()
    }
}

/// Cheap one-step look-ahead used for move ordering: would this action
/// complete a mill? Temporarily mutates and restores the board.
#[must_use]
pub fn creates_mill(state: &mut GameState, action: Action, side: Side) -> bool {
    match action {
        Action::Place { to } => {
            if !state.is_empty(to) {
                return false;
            }
            state.board[to] = Some(side);
            let mill = forms_mill(state, to, side);
            state.board[to] = None;
            mill
        }
        Action::Move { from, to } => {
            if state.cell(from) != Some(side) || !state.is_empty(to) {
                return false;
            }
            state.board[from] = None;
            state.board[to] = Some(side);
            let mill = forms_mill(state, to, side);
            state.board[to] = None;
            state.board[from] = Some(side);
            mill
        }
        Action::ArmBomb { .. } => false,
    }
}

/// Apply an action for `side` and report whether it completed a mill.
///
/// Fails without mutation if the action is not currently legal. A `Move`
/// also relocates the mover's bomb riding the origin cell.
pub fn apply_action(state: &mut GameState, action: Action, side: Side) -> GameResult<bool> {
    match action {
        Action::Place { to } => {
            if state.side(side).to_place == 0 || !is_valid_place(state, to) {
                return Err(GameError::IllegalPlacement { to });
            }
            state.board[to] = Some(side);
            let pools = state.side_mut(side);
            pools.to_place -= 1;
            pools.on_board += 1;
            Ok(forms_mill(state, to, side))
        }
        Action::Move { from, to } => {
            if !is_valid_move(state, side, from, to) {
                return Err(GameError::IllegalMove { from, to });
            }
            state.board[from] = None;
            state.board[to] = Some(side);
            state.bombs.relocate(side, from, to);
            Ok(forms_mill(state, to, side))
        }
        Action::ArmBomb { target } => {
            if !is_valid_bomb_arm(state, side, target) {
                return Err(GameError::IllegalBombArm { target });
            }
            state.bombs.arm(side, target);
            state.side_mut(side).bomb_available = false;
            Ok(false)
        }
    }
}

/// Exact structural inverse of [`apply_action`].
///
/// Only the search's backtracking uses this; the human undo restores full
/// snapshots instead. The action must be the one just applied.
pub fn undo_action(state: &mut GameState, action: Action, side: Side) {
    match action {
        Action::Place { to } => {
            debug_assert_eq!(state.cell(to), Some(side));
            state.board[to] = None;
            let pools = state.side_mut(side);
            pools.to_place += 1;
            pools.on_board -= 1;
        }
        Action::Move { from, to } => {
            debug_assert_eq!(state.cell(to), Some(side));
            debug_assert!(state.is_empty(from));
            state.bombs.relocate(side, to, from);
            state.board[to] = None;
            state.board[from] = Some(side);
        }
        Action::ArmBomb { target } => {
            state.bombs.unarm_last(side, target);
            state.side_mut(side).bomb_available = true;
        }
    }
}

/// Inverse of an applied compound: revert the capture first (reattaching
/// any bomb it disarmed), then the action itself.
pub fn undo_compound(
    state: &mut GameState,
    compound: &CompoundAction,
    side: Side,
    disarmed: Option<Bomb>,
) {
    if let Some(pos) = compound.capture {
        undo_capture(state, pos, side, disarmed);
    }
    undo_action(state, compound.action, side);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::removal::apply_capture;

    fn moving_state() -> GameState {
        let mut state = GameState::new();
        state.side_mut(Side::Human).to_place = 0;
        state.side_mut(Side::Ai).to_place = 0;
        state
    }

    fn put(state: &mut GameState, pos: usize, side: Side) {
        state.board[pos] = Some(side);
        state.side_mut(side).on_board += 1;
    }

    #[test]
    fn test_placement_requires_empty_cell() {
        let mut state = GameState::new();
        assert!(is_valid_place(&state, 0));
        state.board[0] = Some(Side::Ai);
        assert!(!is_valid_place(&state, 0));
    }

    #[test]
    fn test_no_moves_while_placing() {
        let mut state = GameState::new();
        put(&mut state, 0, Side::Human);
        state.side_mut(Side::Human).to_place = 8;
        assert!(!is_valid_move(&state, Side::Human, 0, 1));
        assert!(legal_moves(&state, Side::Human).is_empty());
        // Actions are placements instead.
        assert_eq!(legal_actions(&state, Side::Human).len(), 23);
    }

    #[test]
    fn test_move_requires_adjacency() {
        let mut state = moving_state();
        for pos in [0, 2, 4, 6] {
            put(&mut state, pos, Side::Human);
        }
        assert!(is_valid_move(&state, Side::Human, 0, 1));
        assert!(!is_valid_move(&state, Side::Human, 0, 14), "not adjacent");
        assert!(!is_valid_move(&state, Side::Human, 0, 2), "occupied");
        assert!(!is_valid_move(&state, Side::Ai, 0, 1), "not own piece");
    }

    #[test]
    fn test_flying_unlocks_all_destinations() {
        let mut state = moving_state();
        for pos in [0, 2, 7] {
            put(&mut state, pos, Side::Human);
        }
        assert!(state.side(Side::Human).can_fly());
        assert!(is_valid_move(&state, Side::Human, 0, 19), "fly anywhere");
        // 3 pieces x 21 empty cells.
        assert_eq!(legal_moves(&state, Side::Human).len(), 63);
    }

    #[test]
    fn test_place_completing_mill_reports_it() {
        // B6 and F6 held, placing at D6 completes the line.
        let mut state = GameState::new();
        put(&mut state, 3, Side::Human);
        put(&mut state, 5, Side::Human);
        state.side_mut(Side::Human).to_place = 7;

        let mill = apply_action(&mut state, Action::Place { to: 4 }, Side::Human).unwrap();
        assert!(mill);
        for pos in [3, 4, 5] {
            assert_eq!(state.cell(pos), Some(Side::Human));
        }
        assert_eq!(state.side(Side::Human).to_place, 6);
        assert_eq!(state.side(Side::Human).on_board, 3);
    }

    #[test]
    fn test_illegal_action_leaves_state_unchanged() {
        let mut state = GameState::new();
        put(&mut state, 0, Side::Ai);
        let before = state.clone();
        assert!(apply_action(&mut state, Action::Place { to: 0 }, Side::Human).is_err());
        assert!(apply_action(&mut state, Action::Move { from: 0, to: 1 }, Side::Human).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_place_undo_round_trip() {
        let mut state = GameState::new();
        let before = state.clone();
        apply_action(&mut state, Action::Place { to: 4 }, Side::Ai).unwrap();
        undo_action(&mut state, Action::Place { to: 4 }, Side::Ai);
        assert_eq!(state, before);
    }

    #[test]
    fn test_bomb_bearing_move_round_trip() {
        let mut state = moving_state();
        put(&mut state, 4, Side::Ai);
        put(&mut state, 10, Side::Ai);
        state.bombs.arm(Side::Ai, 4);
        state.side_mut(Side::Ai).bomb_available = false;
        let before = state.clone();

        apply_action(&mut state, Action::Move { from: 4, to: 7 }, Side::Ai).unwrap();
        assert!(state.bombs.is_armed(7), "bomb rides its bearer");
        assert!(!state.bombs.is_armed(4));

        undo_action(&mut state, Action::Move { from: 4, to: 7 }, Side::Ai);
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_does_not_drag_foreign_bomb() {
        let mut state = moving_state();
        put(&mut state, 4, Side::Ai);
        put(&mut state, 3, Side::Human);
        state.bombs.arm(Side::Human, 3);

        apply_action(&mut state, Action::Move { from: 4, to: 7 }, Side::Ai).unwrap();
        assert!(state.bombs.is_armed(3), "opponent bomb stays put");
        assert!(!state.bombs.is_armed(7));
    }

    #[test]
    fn test_arm_bomb_and_undo() {
        let mut state = moving_state();
        put(&mut state, 4, Side::Human);
        let before = state.clone();

        apply_action(&mut state, Action::ArmBomb { target: 4 }, Side::Human).unwrap();
        assert!(state.bombs.is_armed(4));
        assert!(!state.side(Side::Human).bomb_available);
        // Second arm is rejected: permission is one-time.
        assert!(apply_action(&mut state, Action::ArmBomb { target: 4 }, Side::Human).is_err());

        undo_action(&mut state, Action::ArmBomb { target: 4 }, Side::Human);
        assert_eq!(state, before);
    }

    #[test]
    fn test_arm_bomb_rejects_bad_targets() {
        let mut state = moving_state();
        put(&mut state, 4, Side::Human);
        put(&mut state, 7, Side::Ai);
        assert!(!is_valid_bomb_arm(&state, Side::Human, 7), "not own piece");
        assert!(!is_valid_bomb_arm(&state, Side::Human, 0), "empty cell");
        state.bombs.arm(Side::Human, 4);
        assert!(!is_valid_bomb_arm(&state, Side::Human, 4), "already armed");
    }

    #[test]
    fn test_compound_undo_round_trip_with_capture() {
        let mut state = moving_state();
        // Ai completes 0-1-2 by moving 4 -> 1 and captures the human
        // bomb-bearer at 19.
        for pos in [0, 2, 4] {
            put(&mut state, pos, Side::Ai);
        }
        put(&mut state, 19, Side::Human);
        put(&mut state, 16, Side::Human);
        state.bombs.arm(Side::Human, 19);
        let before = state.clone();

        let action = Action::Move { from: 4, to: 1 };
        let mill = apply_action(&mut state, action, Side::Ai).unwrap();
        assert!(mill);
        let disarmed = apply_capture(&mut state, 19, Side::Ai).unwrap();
        assert!(disarmed.is_some());

        let compound = CompoundAction {
            action,
            capture: Some(19),
        };
        undo_compound(&mut state, &compound, Side::Ai, disarmed);
        assert_eq!(state, before);
    }

    #[test]
    fn test_mill_heuristic_restores_board() {
        let mut state = moving_state();
        for pos in [0, 2, 4] {
            put(&mut state, pos, Side::Ai);
        }
        let before = state.clone();
        assert!(creates_mill(&mut state, Action::Move { from: 4, to: 1 }, Side::Ai));
        assert!(!creates_mill(&mut state, Action::Move { from: 4, to: 7 }, Side::Ai));
        assert_eq!(state, before);
    }
}
