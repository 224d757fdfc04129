//! Board geometry: dimension count, axis size, and win run length
//!
//! A `Geometry` is validated once at configuration time and then shared by
//! every board, line set, and search that uses the same `(d, n, k)`
//! combination. All coordinate/index conversion goes through it.

use crate::error::{ConfigError, MoveError};

use super::Pos;

/// Validated `(dimensions, size, run)` board configuration.
///
/// Cells are addressed by a flat index with axis 0 as the least significant
/// digit: for coordinates `c`, `index = c[0] + c[1]*n + c[2]*n^2 + ...`.
/// This ordering is the canonical cell order everywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    dims: usize,
    size: usize,
    run: usize,
    cells: usize,
}

impl Geometry {
    /// Validate a `(dimensions, size, run)` combination.
    ///
    /// Fails with [`ConfigError`] if any of the three is zero, if the run
    /// does not fit on an axis (`run > size`, which would leave no winnable
    /// line at all), or if `size^dimensions` overflows the `u32` cell index
    /// range.
    pub fn new(dims: usize, size: usize, run: usize) -> Result<Self, ConfigError> {
        if dims == 0 {
            return Err(ConfigError::ZeroDimensions);
        }
        if size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if run == 0 || run > size {
            return Err(ConfigError::RunTooLong { run, size });
        }

        let mut cells: usize = 1;
        for _ in 0..dims {
            cells = cells
                .checked_mul(size)
                .filter(|&c| c <= u32::MAX as usize)
                .ok_or(ConfigError::BoardTooLarge { dims, size })?;
        }

        Ok(Self {
            dims,
            size,
            run,
            cells,
        })
    }

    /// Number of dimensions `d`
    #[inline]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Per-axis size `n`
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Win run length `k`
    #[inline]
    pub fn run(&self) -> usize {
        self.run
    }

    /// Total cell count `n^d`
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells
    }

    /// Whether a position index belongs to this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.index() < self.cells
    }

    /// Validate a coordinate tuple and convert it to a position.
    pub fn pos(&self, coords: &[usize]) -> Result<Pos, MoveError> {
        if coords.len() != self.dims {
            return Err(MoveError::WrongDimensions {
                expected: self.dims,
                got: coords.len(),
            });
        }
        let mut index = 0usize;
        for (axis, &value) in coords.iter().enumerate().rev() {
            if value >= self.size {
                return Err(MoveError::CoordOutOfRange {
                    axis,
                    value,
                    size: self.size,
                });
            }
            index = index * self.size + value;
        }
        Ok(Pos(index as u32))
    }

    /// Convert an in-bounds coordinate tuple without validation.
    #[inline]
    pub(crate) fn pos_unchecked(&self, coords: &[usize]) -> Pos {
        debug_assert_eq!(coords.len(), self.dims);
        let index = coords
            .iter()
            .rev()
            .fold(0usize, |acc, &c| acc * self.size + c);
        debug_assert!(index < self.cells);
        Pos(index as u32)
    }

    /// Decode a position back into its coordinate tuple.
    pub fn coords(&self, pos: Pos) -> Vec<usize> {
        debug_assert!(self.contains(pos));
        let mut index = pos.index();
        let mut coords = Vec::with_capacity(self.dims);
        for _ in 0..self.dims {
            coords.push(index % self.size);
            index /= self.size;
        }
        coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_configurations() {
        let g = Geometry::new(3, 3, 3).unwrap();
        assert_eq!(g.cell_count(), 27);
        let g = Geometry::new(3, 4, 4).unwrap();
        assert_eq!(g.cell_count(), 64);
        let g = Geometry::new(2, 19, 5).unwrap();
        assert_eq!(g.cell_count(), 361);
    }

    #[test]
    fn test_run_longer_than_axis_rejected() {
        assert_eq!(
            Geometry::new(3, 3, 4),
            Err(ConfigError::RunTooLong { run: 4, size: 3 })
        );
    }

    #[test]
    fn test_zero_parameters_rejected() {
        assert_eq!(Geometry::new(0, 3, 3), Err(ConfigError::ZeroDimensions));
        assert_eq!(Geometry::new(3, 0, 3), Err(ConfigError::ZeroSize));
        assert!(Geometry::new(3, 3, 0).is_err());
    }

    #[test]
    fn test_oversized_board_rejected() {
        assert!(matches!(
            Geometry::new(64, 10, 2),
            Err(ConfigError::BoardTooLarge { .. })
        ));
    }

    #[test]
    fn test_coords_roundtrip() {
        let g = Geometry::new(3, 4, 4).unwrap();
        let pos = g.pos(&[1, 2, 3]).unwrap();
        assert_eq!(pos.index(), 1 + 2 * 4 + 3 * 16);
        assert_eq!(g.coords(pos), vec![1, 2, 3]);
    }

    #[test]
    fn test_coords_validation() {
        let g = Geometry::new(3, 3, 3).unwrap();
        assert_eq!(
            g.pos(&[0, 1]),
            Err(MoveError::WrongDimensions {
                expected: 3,
                got: 2
            })
        );
        assert_eq!(
            g.pos(&[0, 3, 0]),
            Err(MoveError::CoordOutOfRange {
                axis: 1,
                value: 3,
                size: 3
            })
        );
    }
}
