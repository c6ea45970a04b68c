//! Move search
//!
//! Contains:
//! - Alpha-beta minimax over compound actions
//! - Search result reporting

pub mod alphabeta;

pub use alphabeta::{SearchResult, Searcher};
