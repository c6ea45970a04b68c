//! Game rules for Nine Men's Morris
//!
//! This module implements the full rule set:
//! - Placement, movement and flying legality
//! - Mill detection
//! - Capture eligibility and removal
//! - Make/unmake for the search, terminal conditions

pub mod mill;
pub mod moves;
pub mod removal;
pub mod win;

// Re-exports for convenient access
pub use mill::{forms_mill, is_in_mill};
pub use moves::{
    apply_action, creates_mill, is_valid_bomb_arm, is_valid_move, is_valid_place, legal_actions,
    legal_moves, legal_placements, undo_action, undo_compound,
};
pub use removal::{apply_capture, capture_eligible, eligible_captures, undo_capture};
pub use win::{is_game_over, winner};
