//! Winning-line enumeration for arbitrary `(d, n, k)` boards
//!
//! A line is an arithmetic progression of `k` in-bounds cells along a
//! direction vector whose components are each in `{-1, 0, +1}`. A direction
//! and its negation traverse the same cells, so only the canonical half of
//! the direction space (first nonzero component positive) is enumerated —
//! that yields each line exactly once.
//!
//! Reference counts: `(3, 3, 3)` has 49 lines, `(3, 4, 4)` has 76.

use crate::board::{Geometry, Pos};

/// The complete, immutable set of winning lines for one board geometry.
///
/// Computed once per configuration and shared for the lifetime of the
/// process or game; it never depends on board contents. A per-cell index
/// of the lines passing through each cell supports the incremental
/// terminal check in [`winner_at`](super::winner_at).
#[derive(Debug, Clone)]
pub struct LineSet {
    geometry: Geometry,
    lines: Vec<Vec<Pos>>,
    through: Vec<Vec<u32>>,
}

impl LineSet {
    /// Enumerate every winning line of the given geometry.
    ///
    /// Deterministic and a pure function of the geometry. Cost grows with
    /// `3^d` direction vectors times `n^d` start cells; geometries that
    /// pass [`Geometry::new`] validation stay tractable.
    #[must_use]
    pub fn generate(geometry: Geometry) -> Self {
        let d = geometry.dims();
        let n = geometry.size() as i64;
        let k = geometry.run() as i64;

        let mut lines = Vec::new();
        let mut direction = vec![-1i64; d];

        loop {
            if is_canonical(&direction) {
                for start_idx in 0..geometry.cell_count() {
                    let start = geometry.coords(Pos(start_idx as u32));
                    if !fits(&start, &direction, n, k) {
                        continue;
                    }
                    let line: Vec<Pos> = (0..k)
                        .map(|step| {
                            let coords: Vec<usize> = start
                                .iter()
                                .zip(&direction)
                                .map(|(&c, &v)| (c as i64 + v * step) as usize)
                                .collect();
                            // In bounds by the fits() check
                            geometry.pos_unchecked(&coords)
                        })
                        .collect();
                    lines.push(line);
                }
            }
            if !advance(&mut direction) {
                break;
            }
        }

        let mut through = vec![Vec::new(); geometry.cell_count()];
        for (id, line) in lines.iter().enumerate() {
            for &pos in line {
                through[pos.index()].push(id as u32);
            }
        }

        Self {
            geometry,
            lines,
            through,
        }
    }

    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Number of winning lines
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines, each a slice of exactly `k` positions
    #[inline]
    pub fn lines(&self) -> &[Vec<Pos>] {
        &self.lines
    }

    /// One line by id
    #[inline]
    pub fn line(&self, id: u32) -> &[Pos] {
        &self.lines[id as usize]
    }

    /// Ids of the lines passing through a cell
    #[inline]
    pub fn lines_through(&self, pos: Pos) -> &[u32] {
        &self.through[pos.index()]
    }
}

/// Advance `direction` one step through `{-1, 0, +1}^d` in odometer order.
/// Returns false once the space is exhausted.
fn advance(direction: &mut [i64]) -> bool {
    for v in direction.iter_mut() {
        if *v < 1 {
            *v += 1;
            return true;
        }
        *v = -1;
    }
    false
}

/// Canonical orientation: the first nonzero component is positive, so `v`
/// and `-v` never both survive.
fn is_canonical(direction: &[i64]) -> bool {
    for &v in direction {
        if v != 0 {
            return v > 0;
        }
    }
    false
}

/// Whether `start + (k-1) * direction` stays in bounds on every axis.
fn fits(start: &[usize], direction: &[i64], n: i64, k: i64) -> bool {
    start.iter().zip(direction).all(|(&c, &v)| {
        let end = c as i64 + v * (k - 1);
        (0..n).contains(&end)
    })
}
