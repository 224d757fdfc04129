//! Error types for configuration and move validation
//!
//! Two failure classes exist:
//! - [`ConfigError`]: an invalid `(dimensions, size, run)` combination,
//!   raised once at setup and fatal to that configuration.
//! - [`MoveError`]: a rejected board mutation (occupied cell, out-of-range
//!   coordinates, undo of an empty cell). The board is left unmodified and
//!   the caller may retry with a different position.

use thiserror::Error;

/// Invalid board configuration, detected at [`Geometry`](crate::board::Geometry)
/// construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A board needs at least one dimension
    #[error("board must have at least one dimension")]
    ZeroDimensions,

    /// Each axis needs at least one cell
    #[error("board axis size must be at least 1")]
    ZeroSize,

    /// The win run must fit on an axis: with `run > size` no line exists
    /// and no position is winnable
    #[error("run length {run} does not fit on an axis of size {size}")]
    RunTooLong { run: usize, size: usize },

    /// `size^dimensions` exceeds the cell index range
    #[error("board with {dims} dimensions of size {size} has too many cells")]
    BoardTooLarge { dims: usize, size: usize },
}

/// Rejected board mutation. The board is never modified when one of these
/// is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinate tuple has the wrong number of axes
    #[error("expected {expected} coordinates, got {got}")]
    WrongDimensions { expected: usize, got: usize },

    /// A coordinate lies outside `[0, size)`
    #[error("coordinate {value} on axis {axis} is outside the board of size {size}")]
    CoordOutOfRange {
        axis: usize,
        value: usize,
        size: usize,
    },

    /// Position index does not belong to this board
    #[error("position index {index} is outside the board")]
    OutOfBounds { index: usize },

    /// Target cell already holds a mark
    #[error("cell at index {index} is already occupied")]
    Occupied { index: usize },

    /// Undo requested for a cell that holds no mark
    #[error("cell at index {index} is already empty")]
    AlreadyEmpty { index: usize },

    /// A move must place a player mark, not clear a cell
    #[error("a move must place a player mark")]
    NotAPlayer,
}
