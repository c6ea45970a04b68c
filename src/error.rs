//! Error types for the rules engine and session
//!
//! Every variant is a recoverable legality failure: state is unchanged and
//! the caller retries with a different action. Invariant violations are
//! programming defects and assert instead of returning an error.

use thiserror::Error;

/// Errors reported by the rules engine and the turn controller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Placement onto an occupied cell, or with no reserve pieces left
    #[error("illegal placement at position {to}")]
    IllegalPlacement { to: usize },

    /// Move that fails ownership, occupancy or adjacency/flying checks
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: usize, to: usize },

    /// Removal target that is not capture-eligible
    #[error("position {pos} is not a valid removal target")]
    IllegalRemoval { pos: usize },

    /// Bomb arming on a cell that is not an own, bomb-free piece, or with
    /// the one-time permission already spent
    #[error("cannot arm a bomb at position {target}")]
    IllegalBombArm { target: usize },

    /// Undo requested with the per-game quota exhausted or nothing to undo
    #[error("no undo available")]
    UndoUnavailable,
}

/// Result type alias for rules and session operations.
pub type GameResult<T> = Result<T, GameError>;
