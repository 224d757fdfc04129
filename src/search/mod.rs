//! Search module
//!
//! Contains the depth-limited minimax search with alpha-beta pruning.
//! Pruning can be switched off to obtain the plain minimax reference
//! result, which the regression tests compare against.

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
