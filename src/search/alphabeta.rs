//! Alpha-beta search over compound actions
//!
//! Minimax with alpha-beta pruning, maximizing for the computer. The
//! evaluation is asymmetric (see [`crate::eval::weights`]), so this is
//! deliberately not negamax. The search operates directly on the shared
//! mutable [`GameState`] via make/unmake; every recursive call restores
//! the state fully before returning, and backtracking never touches bomb
//! timers, bomb availability or the session's undo snapshots.
//!
//! A candidate that completes a mill branches once per capture-eligible
//! position (the compound action), temporarily detaching any bomb riding
//! the captured piece. Ties break toward the first action in sorted
//! order: actions that complete a mill are tried first, otherwise the
//! enumeration order of [`legal_actions`] is preserved.

use crate::board::{Action, CompoundAction, GameState, Side};
use crate::eval::evaluate;
use crate::rules::{
    apply_action, apply_capture, creates_mill, eligible_captures, is_game_over, legal_actions,
    undo_action, undo_capture,
};

/// Infinity for the alpha-beta bounds; every evaluation is far inside.
const INF: i32 = i32::MAX;

/// Search result: the best compound action found and its value.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Minimax value of the position.
    pub score: i32,
    /// Best compound action, `None` at depth 0 or with no legal action.
    pub best: Option<CompoundAction>,
    /// Nodes visited.
    pub nodes: u64,
}

/// Depth-bounded alpha-beta searcher.
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Search the position to `depth`, maximizing for the computer.
    ///
    /// The state is mutated during the search and fully restored before
    /// this returns.
    pub fn search(&mut self, state: &mut GameState, depth: u8) -> SearchResult {
        self.nodes = 0;
        let (score, best) = self.alpha_beta(state, depth, -INF, INF, true);
        SearchResult {
            score,
            best,
            nodes: self.nodes,
        }
    }

    fn alpha_beta(
        &mut self,
        state: &mut GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<CompoundAction>) {
        self.nodes += 1;
        if is_game_over(state) || depth == 0 {
            return (evaluate(state), None);
        }

        let side = if maximizing { Side::Ai } else { Side::Human };
        let actions = ordered_actions(state, side);
        if actions.is_empty() {
            return (evaluate(state), None);
        }

        let mut best: Option<CompoundAction> = None;
        if maximizing {
            let mut max_eval = -INF;
            for action in actions {
                let Ok(mill) = apply_action(state, action, side) else {
                    continue;
                };
                let (value, capture) = self.branch_value(state, depth, alpha, beta, side, mill, true);
                undo_action(state, action, side);
                if value > max_eval {
                    max_eval = value;
                    best = Some(CompoundAction { action, capture });
                }
                alpha = alpha.max(max_eval);
                if beta <= alpha {
                    break;
                }
            }
            (max_eval, best)
        } else {
            let mut min_eval = INF;
            for action in actions {
                let Ok(mill) = apply_action(state, action, side) else {
                    continue;
                };
                let (value, capture) =
                    self.branch_value(state, depth, alpha, beta, side, mill, false);
                undo_action(state, action, side);
                if value < min_eval {
                    min_eval = value;
                    best = Some(CompoundAction { action, capture });
                }
                beta = beta.min(min_eval);
                if beta <= alpha {
                    break;
                }
            }
            (min_eval, best)
        }
    }

    /// Value of the just-applied action: recurse directly, or once per
    /// capture candidate if it completed a mill, keeping the extremal
    /// child and the capture that achieved it.
    fn branch_value(
        &mut self,
        state: &mut GameState,
        depth: u8,
        alpha: i32,
        beta: i32,
        side: Side,
        mill: bool,
        maximizing: bool,
    ) -> (i32, Option<usize>) {
        if !mill {
            let (value, _) = self.alpha_beta(state, depth - 1, alpha, beta, !maximizing);
            return (value, None);
        }

        let captures = eligible_captures(state, side);
        if captures.is_empty() {
            let (value, _) = self.alpha_beta(state, depth - 1, alpha, beta, !maximizing);
            return (value, None);
        }

        let mut branch = if maximizing { -INF } else { INF };
        let mut best_capture = None;
        for pos in captures {
            let Ok(disarmed) = apply_capture(state, pos, side) else {
                continue;
            };
            let (value, _) = self.alpha_beta(state, depth - 1, alpha, beta, !maximizing);
            undo_capture(state, pos, side, disarmed);
            if (maximizing && value > branch) || (!maximizing && value < branch) {
                branch = value;
                best_capture = Some(pos);
            }
        }
        (branch, best_capture)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Legal actions with mill-completing ones moved to the front.
///
/// The partition is stable, so ties later break toward lower positions.
fn ordered_actions(state: &mut GameState, side: Side) -> Vec<Action> {
    let actions = legal_actions(state, side);
    let (mut milling, quiet): (Vec<_>, Vec<_>) = actions
        .into_iter()
        .partition(|&action| creates_mill(state, action, side));
    milling.extend(quiet);
    milling
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Weight;

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
    fn test_depth_zero_returns_static_eval() {
        let mut state = GameState::new();
        let result = Searcher::new().search(&mut state, 0);
        assert_eq!(result.score, evaluate(&state));
        assert!(result.best.is_none());
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_first_placement_wins_ties() {
        // From a fresh board every placement evaluates identically at
        // depth 1, so strict improvement keeps the first in order.
        let mut state = GameState::new();
        let result = Searcher::new().search(&mut state, 1);
        assert_eq!(
            result.best.map(|c| c.action),
            Some(Action::Place { to: 0 })
        );
    }

    #[test]
    fn test_mill_completing_actions_ordered_first() {
        let mut state = moving_state();
        for pos in [0, 2, 4] {
            put(&mut state, pos, Side::Ai);
        }
        for pos in [19, 22] {
            put(&mut state, pos, Side::Human);
        }
        let actions = ordered_actions(&mut state, Side::Ai);
        assert_eq!(actions[0], Action::Move { from: 4, to: 1 });
    }

    #[test]
    fn test_depth_one_finds_winning_capture() {
        // Human finished placing with exactly 3 pieces; the AI completes
        // a mill and captures, dropping the human under 3: game won.
        let mut state = moving_state();
        for pos in [0, 2, 4, 13] {
            put(&mut state, pos, Side::Ai);
        }
        for pos in [16, 19, 22] {
            put(&mut state, pos, Side::Human);
        }
        let before = state.clone();

        let result = Searcher::new().search(&mut state, 1);
        assert_eq!(state, before, "search must restore the state");

        let best = result.best.expect("a best move exists");
        assert_eq!(best.action, Action::Move { from: 4, to: 1 });
        assert!(best.capture.is_some());
        assert_eq!(result.score, Weight::WIN);
    }

    #[test]
    fn test_search_restores_state_with_bombs() {
        let mut state = moving_state();
        for pos in [0, 2, 4, 13] {
            put(&mut state, pos, Side::Ai);
        }
        for pos in [16, 19, 22, 10] {
            put(&mut state, pos, Side::Human);
        }
        // A human bomb the search will hypothetically capture and a
        // mobile AI bomb the search will drag around.
        state.bombs.arm(Side::Human, 19);
        state.bombs.arm(Side::Ai, 13);
        state.side_mut(Side::Human).bomb_available = false;
        state.side_mut(Side::Ai).bomb_available = false;
        let before = state.clone();

        let result = Searcher::new().search(&mut state, 3);
        assert_eq!(state, before);
        assert!(result.best.is_some());
        assert!(result.nodes > 1);
    }

    #[test]
    fn test_deeper_search_never_worse_for_forced_win() {
        // The depth-1 winning capture must still be found at depth 3.
        let mut state = moving_state();
        for pos in [0, 2, 4, 13] {
            put(&mut state, pos, Side::Ai);
        }
        for pos in [16, 19, 22] {
            put(&mut state, pos, Side::Human);
        }
        let result = Searcher::new().search(&mut state, 3);
        assert_eq!(result.score, Weight::WIN);
        assert_eq!(
            result.best.map(|c| c.action),
            Some(Action::Move { from: 4, to: 1 })
        );
    }

    #[test]
    fn test_minimizer_avoids_immediate_loss() {
        // Human to move with a mill completion available: the minimizer
        // branch must value it below the maximizer's alternatives.
        let mut state = moving_state();
        for pos in [21, 23, 19] {
            put(&mut state, pos, Side::Human);
        }
        for pos in [0, 1, 4, 10] {
            put(&mut state, pos, Side::Ai);
        }
        let mut searcher = Searcher::new();
        let (score, best) = searcher.alpha_beta(&mut state, 2, -INF, INF, false);
        assert!(best.is_some());
        assert!(score < Weight::WIN);
    }
}
