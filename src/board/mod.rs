//! Board representation for d-dimensional k-in-a-row

pub mod board;
pub mod geometry;

// Re-exports
pub use board::Board;
pub use geometry::Geometry;

/// Cell marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    Cross,
    Nought,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
            Mark::Empty => Mark::Empty,
        }
    }

    /// True for `Cross` and `Nought`
    #[inline]
    pub fn is_player(self) -> bool {
        self != Mark::Empty
    }
}

/// Position on the board, stored as a flat cell index.
///
/// A `Pos` is only meaningful together with the [`Geometry`] that produced
/// it; [`Geometry::pos`] validates a coordinate tuple and
/// [`Geometry::coords`] converts back. The index order (axis 0 least
/// significant) is the canonical iteration order used by
/// [`Board::empty_positions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos(pub(crate) u32);

impl Pos {
    /// Flat cell index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
