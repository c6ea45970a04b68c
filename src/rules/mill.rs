//! Mill detection
//!
//! A mill is a line of three positions all held by the same side. The
//! predicates here are recomputed fresh from the board on every call;
//! nothing is cached across mutations.

use crate::board::{GameState, Side, MILLS};

/// Check whether `side` holds a complete mill through `position`.
///
/// Requires the position to actually be occupied by `side`; used both to
/// detect a just-completed mill after a placement/move and, via
/// [`is_in_mill`], to test whether an existing piece is protected.
#[must_use]
pub fn forms_mill(state: &GameState, position: usize, side: Side) -> bool {
    if state.cell(position) != Some(side) {
        return false;
    }
    MILLS
        .iter()
        .filter(|mill| mill.contains(&position))
        .any(|mill| mill.iter().all(|&pos| state.cell(pos) == Some(side)))
}

/// Check whether the piece at `position` currently sits inside a formed
/// mill of `side`. Same predicate as [`forms_mill`]; the name marks the
/// protection query in removal eligibility.
#[inline]
#[must_use]
pub fn is_in_mill(state: &GameState, position: usize, side: Side) -> bool {
    forms_mill(state, position, side)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forms_mill_completed_line() {
        let mut state = GameState::new();
        // Top row of the middle square: B6-D6-F6 (3, 4, 5).
        state.board[3] = Some(Side::Human);
        state.board[4] = Some(Side::Human);
        state.board[5] = Some(Side::Human);
        assert!(forms_mill(&state, 4, Side::Human));
        assert!(forms_mill(&state, 3, Side::Human));
        assert!(!forms_mill(&state, 4, Side::Ai));
    }

    #[test]
    fn test_no_mill_with_two_pieces() {
        let mut state = GameState::new();
        state.board[3] = Some(Side::Human);
        state.board[4] = Some(Side::Human);
        assert!(!forms_mill(&state, 4, Side::Human));
    }

    #[test]
    fn test_no_mill_through_empty_position() {
        let state = GameState::new();
        assert!(!forms_mill(&state, 4, Side::Human));
    }

    #[test]
    fn test_mill_blocked_by_opponent() {
        let mut state = GameState::new();
        state.board[3] = Some(Side::Human);
        state.board[4] = Some(Side::Human);
        state.board[5] = Some(Side::Ai);
        assert!(!forms_mill(&state, 4, Side::Human));
    }

    #[test]
    fn test_vertical_mill() {
        let mut state = GameState::new();
        // A7-A4-A1 (0, 9, 21).
        state.board[0] = Some(Side::Ai);
        state.board[9] = Some(Side::Ai);
        state.board[21] = Some(Side::Ai);
        assert!(forms_mill(&state, 9, Side::Ai));
    }
}
