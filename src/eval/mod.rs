//! Position evaluation
//!
//! Contains:
//! - Weight table for the evaluation terms
//! - The static evaluation function used by the search

pub mod heuristic;
pub mod weights;

pub use heuristic::evaluate;
pub use weights::Weight;
