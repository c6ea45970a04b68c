//! Terminal front end
//!
//! Contains:
//! - Coordinate-based input prompts implementing the action provider
//! - Board rendering and event printing

pub mod input;
pub mod render;

pub use input::TerminalProvider;
pub use render::TerminalObserver;
