//! Board representation for Nine Men's Morris

pub mod state;
pub mod topology;

// Re-exports
pub use state::{GameState, Phase, SideState};
pub use topology::{coord_to_index, index_to_coord, ADJACENT, COORDINATES, MILLS, NUM_POSITIONS};

/// Pieces each side starts with.
pub const PIECES_PER_SIDE: u8 = 9;

/// A side may fly (move to any empty cell) once it has finished placing
/// and holds at most this many pieces.
pub const FLYING_THRESHOLD: u8 = 3;

/// The two players. The human plays `O`, the computer plays `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Ai,
}

impl Side {
    /// Get the opposing side.
    #[inline]
    #[must_use]
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Ai,
            Side::Ai => Side::Human,
        }
    }

    /// Stable index for per-side tables (0 = human, 1 = computer).
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Ai => 1,
        }
    }

    /// Board symbol for this side.
    #[inline]
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Side::Human => 'O',
            Side::Ai => 'X',
        }
    }
}

/// A single legal action for one side.
///
/// `Place` and `Move` may additionally earn a capture when they complete a
/// mill; the capture choice is carried separately in [`CompoundAction`].
/// `ArmBomb` always ends the turn on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a reserve piece on an empty cell.
    Place { to: usize },
    /// Move a piece already on the board (adjacent, or anywhere if flying).
    Move { from: usize, to: usize },
    /// Arm the side's one-time bomb on one of its own pieces.
    ArmBomb { target: usize },
}

impl Action {
    /// Destination cell of the action (for `ArmBomb`, the armed piece).
    #[inline]
    #[must_use]
    pub fn to(self) -> usize {
        match self {
            Action::Place { to } | Action::Move { to, .. } => to,
            Action::ArmBomb { target } => target,
        }
    }
}

/// An action plus the optional capture that followed a completed mill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundAction {
    pub action: Action,
    pub capture: Option<usize>,
}

impl CompoundAction {
    /// A compound action with no capture attached.
    #[inline]
    #[must_use]
    pub fn plain(action: Action) -> Self {
        Self {
            action,
            capture: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Human.opponent(), Side::Ai);
        assert_eq!(Side::Ai.opponent(), Side::Human);
    }

    #[test]
    fn test_side_index_distinct() {
        assert_ne!(Side::Human.index(), Side::Ai.index());
    }

    #[test]
    fn test_action_to() {
        assert_eq!(Action::Place { to: 4 }.to(), 4);
        assert_eq!(Action::Move { from: 0, to: 1 }.to(), 1);
        assert_eq!(Action::ArmBomb { target: 9 }.to(), 9);
    }
}
