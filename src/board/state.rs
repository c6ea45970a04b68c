//! Mutable game state: cells, per-side pools, turn ownership and winner
//!
//! `GameState` is the single owned state object passed by exclusive
//! reference through the rules engine, the bomb subsystem and the search.
//! The search mutates it through make/unmake and must restore it fully
//! before returning; nothing here is shared or cloned per node.

use super::{CompoundAction, Side, FLYING_THRESHOLD, NUM_POSITIONS, PIECES_PER_SIDE};
use crate::bomb::BombStore;

/// Display-level phase summary over both sides.
///
/// Derived, never stored: legality is always evaluated per side via
/// [`SideState::done_placing`] and [`SideState::can_fly`]. This label only
/// exists for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Placing,
    Moving,
    Flying,
}

/// Per-side piece pools and bomb permission.
///
/// Invariant: `to_place + on_board <= 9`. Equality holds until a piece is
/// permanently captured by a mill; bomb-destroyed pieces go back to
/// `to_place` and keep the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideState {
    /// Pieces still in hand, waiting to be placed.
    pub to_place: u8,
    /// Pieces currently on the board.
    pub on_board: u8,
    /// One-time bomb permission; consumed by arming, never reset.
    pub bomb_available: bool,
}

impl SideState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            to_place: PIECES_PER_SIDE,
            on_board: 0,
            bomb_available: true,
        }
    }

    /// True once every reserve piece has been placed.
    #[inline]
    #[must_use]
    pub fn done_placing(&self) -> bool {
        self.to_place == 0
    }

    /// True when this side qualifies for flying: finished placing and at
    /// most three pieces left. Independent of the opponent's status.
    #[inline]
    #[must_use]
    pub fn can_fly(&self) -> bool {
        self.done_placing() && self.on_board <= FLYING_THRESHOLD
    }

    /// On-board plus in-hand pieces.
    #[inline]
    #[must_use]
    pub fn total(&self) -> u8 {
        self.to_place + self.on_board
    }
}

impl Default for SideState {
    fn default() -> Self {
        Self::new()
    }
}

/// Full game state for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The 24 cells; `None` is empty.
    pub board: [Option<Side>; NUM_POSITIONS],
    sides: [SideState; 2],
    /// Armed bombs, keyed by bearer position.
    pub bombs: BombStore,
    /// Side to move.
    pub turn: Side,
    /// Set once the game is decided.
    pub winner: Option<Side>,
    last_moves: [Option<CompoundAction>; 2],
}

impl GameState {
    /// Fresh game: empty board, nine pieces in hand per side, human to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: [None; NUM_POSITIONS],
            sides: [SideState::new(), SideState::new()],
            bombs: BombStore::new(),
            turn: Side::Human,
            winner: None,
            last_moves: [None, None],
        }
    }

    /// Pool state for one side.
    #[inline]
    #[must_use]
    pub fn side(&self, side: Side) -> &SideState {
        &self.sides[side.index()]
    }

    /// Mutable pool state for one side.
    #[inline]
    pub fn side_mut(&mut self, side: Side) -> &mut SideState {
        &mut self.sides[side.index()]
    }

    /// Occupant of a cell.
    #[inline]
    #[must_use]
    pub fn cell(&self, pos: usize) -> Option<Side> {
        self.board[pos]
    }

    /// Check if a cell is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: usize) -> bool {
        self.board[pos].is_none()
    }

    /// Positions currently occupied by `side`, ascending.
    pub fn piece_positions(&self, side: Side) -> impl Iterator<Item = usize> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == Some(side))
            .map(|(pos, _)| pos)
    }

    /// Last applied compound action for a side (display only).
    #[inline]
    #[must_use]
    pub fn last_move(&self, side: Side) -> Option<CompoundAction> {
        self.last_moves[side.index()]
    }

    /// Record a side's last compound action (display only).
    #[inline]
    pub fn set_last_move(&mut self, side: Side, compound: CompoundAction) {
        self.last_moves[side.index()] = Some(compound);
    }

    /// Display-level phase label over both sides.
    ///
    /// Informational only; never used to gate legality.
    #[must_use]
    pub fn phase(&self) -> Phase {
        let human = self.side(Side::Human);
        let ai = self.side(Side::Ai);
        if !human.done_placing() || !ai.done_placing() {
            Phase::Placing
        } else if human.can_fly() || ai.can_fly() {
            Phase::Flying
        } else {
            Phase::Moving
        }
    }

    /// Verify the structural invariants. Panics on violation; a failure
    /// here is a programming defect, not a recoverable game error.
    pub fn check_invariants(&self) {
        for side in [Side::Human, Side::Ai] {
            let s = self.side(side);
            assert!(
                s.total() <= PIECES_PER_SIDE,
                "{:?} pools out of bounds: {} to place, {} on board",
                side,
                s.to_place,
                s.on_board
            );
            let counted = self.piece_positions(side).count() as u8;
            assert_eq!(
                counted, s.on_board,
                "{:?} on-board count {} does not match board ({} cells)",
                side, s.on_board, counted
            );
        }
        for bomb in self.bombs.iter() {
            assert!(bomb.position < NUM_POSITIONS);
            assert!(
                self.board[bomb.position].is_some(),
                "bomb {} sits on an empty cell {}",
                bomb.id,
                bomb.position
            );
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_pools() {
        let state = GameState::new();
        for side in [Side::Human, Side::Ai] {
            assert_eq!(state.side(side).to_place, 9);
            assert_eq!(state.side(side).on_board, 0);
            assert!(state.side(side).bomb_available);
        }
        assert_eq!(state.turn, Side::Human);
        assert!(state.winner.is_none());
        state.check_invariants();
    }

    #[test]
    fn test_phase_derivation() {
        let mut state = GameState::new();
        assert_eq!(state.phase(), Phase::Placing);

        state.side_mut(Side::Human).to_place = 0;
        state.side_mut(Side::Human).on_board = 5;
        // Opponent still placing: label stays Placing.
        assert_eq!(state.phase(), Phase::Placing);

        state.side_mut(Side::Ai).to_place = 0;
        state.side_mut(Side::Ai).on_board = 5;
        assert_eq!(state.phase(), Phase::Moving);

        state.side_mut(Side::Ai).on_board = 3;
        assert_eq!(state.phase(), Phase::Flying);
    }

    #[test]
    fn test_can_fly_requires_done_placing() {
        let mut s = SideState::new();
        s.on_board = 2;
        assert!(!s.can_fly(), "still placing, must not fly");
        s.to_place = 0;
        assert!(s.can_fly());
        s.on_board = 4;
        assert!(!s.can_fly());
    }

    #[test]
    fn test_piece_positions_ascending() {
        let mut state = GameState::new();
        state.board[7] = Some(Side::Human);
        state.board[2] = Some(Side::Human);
        state.board[5] = Some(Side::Ai);
        let positions: Vec<usize> = state.piece_positions(Side::Human).collect();
        assert_eq!(positions, vec![2, 7]);
    }
}
