//! Computer opponent integrating the search components
//!
//! Picks the computer's whole turn. Selection runs in priority order:
//!
//! 1. **Bomb placement**: a heuristic scan of the computer's own pieces;
//!    a sufficiently exposed piece gets the one bomb, and arming it
//!    consumes the turn
//! 2. **Alpha-beta**: regular search at a depth picked from how far the
//!    game has progressed
//! 3. **Fallback**: a uniformly random legal action when the search
//!    reports nothing
//!
//! The chosen capture of a compound action is re-validated at execution
//! time; [`AiEngine::resolve_capture`] substitutes a random eligible
//! position if the searched one has gone stale.

use crate::board::{Action, CompoundAction, GameState, Side, ADJACENT};
use crate::rules::{eligible_captures, is_valid_bomb_arm, legal_actions};
use crate::search::Searcher;
use rand::Rng;
use std::time::Instant;

/// How the computer's turn was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    /// Heuristic bomb placement; arming consumed the turn.
    Bomb,
    /// Regular alpha-beta search result.
    Search,
    /// Random legal action; the search reported nothing.
    Fallback,
}

/// The computer's chosen turn with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen compound action, `None` only with no legal action at all.
    pub best: Option<CompoundAction>,
    /// Evaluation score backing the choice.
    pub score: i32,
    /// How the choice was made.
    pub kind: ChoiceKind,
    /// Search depth used (0 for bomb and fallback turns).
    pub depth: u8,
    /// Nodes searched.
    pub nodes: u64,
    /// Time taken in milliseconds.
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn bomb(target: usize, score: i32, time_ms: u64) -> Self {
        Self {
            best: Some(CompoundAction::plain(Action::ArmBomb { target })),
            score,
            kind: ChoiceKind::Bomb,
            depth: 0,
            nodes: 1,
            time_ms,
        }
    }

    #[inline]
    fn fallback(best: Option<CompoundAction>, time_ms: u64) -> Self {
        Self {
            best,
            score: 0,
            kind: ChoiceKind::Fallback,
            depth: 0,
            nodes: 1,
            time_ms,
        }
    }
}

/// Computer opponent for Nine Men's Morris.
///
/// Owns the alpha-beta searcher and the bomb-placement heuristic. The
/// engine never mutates the game permanently: `choose_move` restores the
/// state it searched before returning.
pub struct AiEngine {
    searcher: Searcher,
}

impl AiEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
        }
    }

    /// Choose the computer's whole turn for the given position.
    ///
    /// # Returns
    ///
    /// `MoveResult` with the chosen compound action and statistics.
    /// `best` is `None` only when the computer has no legal action.
    #[must_use]
    pub fn choose_move(&mut self, state: &mut GameState) -> MoveResult {
        let start = Instant::now();

        // 1. One-shot bomb placement.
        if let Some((target, score)) = self.pick_bomb_target(state) {
            return MoveResult::bomb(target, score, start.elapsed().as_millis() as u64);
        }

        // 2. Regular alpha-beta search.
        let depth = self.search_depth(state);
        let result = self.searcher.search(state, depth);
        if let Some(best) = result.best {
            return MoveResult {
                best: Some(best),
                score: result.score,
                kind: ChoiceKind::Search,
                depth,
                nodes: result.nodes,
                time_ms: start.elapsed().as_millis() as u64,
            };
        }

        // 3. Random fallback.
        let actions = legal_actions(state, Side::Ai);
        let best = if actions.is_empty() {
            None
        } else {
            let pick = rand::rng().random_range(0..actions.len());
            Some(CompoundAction::plain(actions[pick]))
        };
        MoveResult::fallback(best, start.elapsed().as_millis() as u64)
    }

    /// Search depth from game progress: deeper as material leaves the
    /// board, and at least 5 once either side flies.
    #[must_use]
    pub fn search_depth(&self, state: &GameState) -> u8 {
        let remaining = state.side(Side::Ai).total() + state.side(Side::Human).total();
        let mut depth = 3;
        if remaining <= 10 {
            depth = 4;
        }
        if remaining <= 6 {
            depth = 5;
        }
        if state.side(Side::Ai).can_fly() || state.side(Side::Human).can_fly() {
            depth = depth.max(5);
        }
        depth
    }

    /// Heuristic bomb placement: pick the computer's most exposed piece.
    ///
    /// Runs only while the bomb is still available, the computer has a
    /// piece on the board, and the game has developed past the opening
    /// (both sides done placing, or the computer has placed at least
    /// three pieces). Each candidate scores twice its human neighbors
    /// minus three times its own; a candidate needs at least one human
    /// neighbor and either a positive score or two-plus human neighbors
    /// with at most one of its own. Arming happens when the best
    /// candidate scores at least 1.
    fn pick_bomb_target(&self, state: &GameState) -> Option<(usize, i32)> {
        let ai = state.side(Side::Ai);
        let human = state.side(Side::Human);
        if !ai.bomb_available || ai.on_board == 0 {
            return None;
        }
        if !(ai.done_placing() && human.done_placing()) && ai.to_place >= 7 {
            return None;
        }

        let mut best_score = -100;
        let mut best_target = None;
        for pos in state.piece_positions(Side::Ai) {
            if !is_valid_bomb_arm(state, Side::Ai, pos) {
                continue;
            }
            let mut opp_adj = 0;
            let mut own_adj = 0;
            for &adj in ADJACENT[pos] {
                match state.cell(adj) {
                    Some(Side::Human) => opp_adj += 1,
                    Some(Side::Ai) => own_adj += 1,
                    None => {}
                }
            }
            let score = 2 * opp_adj - 3 * own_adj;
            if score > best_score && opp_adj > 0 && (score > 0 || (opp_adj >= 2 && own_adj <= 1)) {
                best_score = score;
                best_target = Some(pos);
            }
        }

        if best_score >= 1 {
            best_target.map(|target| (target, best_score))
        } else {
            None
        }
    }

    /// Final capture position for a compound action.
    ///
    /// Prefers the searched capture if it is still eligible; otherwise
    /// picks a random eligible position. `None` means nothing can be
    /// captured.
    #[must_use]
    pub fn resolve_capture(
        &self,
        state: &GameState,
        side: Side,
        preferred: Option<usize>,
    ) -> Option<usize> {
        let captures = eligible_captures(state, side);
        if captures.is_empty() {
            return None;
        }
        if let Some(pos) = preferred {
            if captures.contains(&pos) {
                return Some(pos);
            }
        }
        let pick = rand::rng().random_range(0..captures.len());
        Some(captures[pick])
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new()
    }
}
