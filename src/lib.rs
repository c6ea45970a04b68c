//! Nine Men's Morris with a one-shot time-bomb twist
//!
//! A terminal Nine Men's Morris game against an alpha-beta computer
//! opponent. On top of the classic rules (place nine pieces, move along
//! lines, fly at three, form mills to capture), each side may once per
//! game arm a time bomb on one of its own pieces: it rides the piece, its
//! timer ticks down at the start of each owner turn, and when it goes off
//! every adjacent piece is blown back to its owner's reserve.
//!
//! # Architecture
//!
//! - [`board`]: the 24-position topology, side/action types, game state
//! - [`rules`]: placement/movement/flying legality, mills, captures,
//!   make/unmake, terminal conditions
//! - [`bomb`]: bomb arming, per-turn ticking and blast resolution
//! - [`eval`]: static evaluation from the computer's perspective
//! - [`search`]: alpha-beta minimax over compound actions
//! - [`engine`]: the computer opponent (bomb heuristic + search + fallback)
//! - [`game`]: the round controller with human takebacks
//! - [`ui`]: terminal rendering and coordinate input
//!
//! # Quick Start
//!
//! ```
//! use morris::board::{Action, GameState, Side};
//! use morris::engine::AiEngine;
//! use morris::rules::apply_action;
//!
//! let mut state = GameState::new();
//! apply_action(&mut state, Action::Place { to: 4 }, Side::Human).unwrap();
//!
//! let mut engine = AiEngine::new();
//! let reply = engine.choose_move(&mut state);
//! assert!(reply.best.is_some());
//! ```

pub mod board;
pub mod bomb;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Action, CompoundAction, GameState, Side};
pub use engine::{AiEngine, ChoiceKind, MoveResult};
pub use error::{GameError, GameResult};
pub use game::Session;
