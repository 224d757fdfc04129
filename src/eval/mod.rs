//! Position evaluation for the minimax search

pub mod heuristic;

pub use heuristic::evaluate;

/// Score of a proven win for the maximizing player. A loss scores the
/// negation, a draw scores 0. Heuristic values are clamped strictly inside
/// `(-WIN_SCORE, WIN_SCORE)` so they can never be confused with a proven
/// result during comparisons.
pub const WIN_SCORE: i32 = 1_000_000;
