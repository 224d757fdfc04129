//! Deterministic k-in-a-row engine for d-dimensional boards
//!
//! Plays generalized tic-tac-toe on an `n^d` board where a player wins by
//! completing `k` collinear cells, the classic 4x4x4 cube included. The
//! crate is a pure engine: board state, winning-line enumeration, terminal
//! detection, a heuristic evaluator, and a depth-limited alpha-beta search,
//! tied together by an [`Engine`] facade with difficulty levels. No I/O,
//! no rendering, no threads; identical inputs always produce the identical
//! move.
//!
//! ```
//! use qubic::{Difficulty, Engine, Mark};
//!
//! let engine = Engine::configure(3, 4, 4).unwrap();
//! let mut board = engine.new_board();
//! engine.apply_move(&mut board, &[0, 0, 0], Mark::Cross).unwrap();
//! let reply = engine.find_best_move(&mut board, Mark::Nought, Difficulty::Hard);
//! assert!(reply.best_move.is_some());
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

pub use board::{Board, Geometry, Mark, Pos};
pub use engine::{Difficulty, DifficultyPolicy, Engine, MoveResult, SearchType, TerminalState};
pub use error::{ConfigError, MoveError};
pub use eval::WIN_SCORE;
pub use rules::LineSet;
pub use search::{SearchResult, SearchStats, Searcher};
