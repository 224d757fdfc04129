//! Board structure with apply/undo mutation

use crate::error::MoveError;

use super::{Geometry, Mark, Pos};

/// Game board: a flat grid of cell marks over a [`Geometry`].
///
/// The board is constructed once per game and mutated in place. During a
/// search the engine applies trial moves and undoes every one of them
/// before returning, so the caller always gets its board back in the
/// pre-call state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    geometry: Geometry,
    cells: Vec<Mark>,
    filled: usize,
}

impl Board {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            cells: vec![Mark::Empty; geometry.cell_count()],
            filled: 0,
        }
    }

    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cells[pos.index()] == Mark::Empty
    }

    /// Place a player mark on an empty cell.
    ///
    /// Fails with [`MoveError`] if the position is outside the board, the
    /// cell is occupied, or `mark` is not a player mark. The board is left
    /// unmodified on failure.
    pub fn apply(&mut self, pos: Pos, mark: Mark) -> Result<(), MoveError> {
        if !mark.is_player() {
            return Err(MoveError::NotAPlayer);
        }
        if !self.geometry.contains(pos) {
            return Err(MoveError::OutOfBounds { index: pos.index() });
        }
        if self.cells[pos.index()] != Mark::Empty {
            return Err(MoveError::Occupied { index: pos.index() });
        }
        self.place(pos, mark);
        Ok(())
    }

    /// Reset a previously occupied cell to empty.
    ///
    /// Fails with [`MoveError`] if the position is outside the board or the
    /// cell is already empty. Used by the search to retract trial moves.
    pub fn undo(&mut self, pos: Pos) -> Result<(), MoveError> {
        if !self.geometry.contains(pos) {
            return Err(MoveError::OutOfBounds { index: pos.index() });
        }
        if self.cells[pos.index()] == Mark::Empty {
            return Err(MoveError::AlreadyEmpty { index: pos.index() });
        }
        self.clear(pos);
        Ok(())
    }

    /// Unchecked place. Caller guarantees the cell is empty.
    #[inline]
    pub(crate) fn place(&mut self, pos: Pos, mark: Mark) {
        debug_assert!(mark.is_player());
        debug_assert!(self.cells[pos.index()] == Mark::Empty);
        self.cells[pos.index()] = mark;
        self.filled += 1;
    }

    /// Unchecked clear. Caller guarantees the cell is occupied.
    #[inline]
    pub(crate) fn clear(&mut self, pos: Pos) {
        debug_assert!(self.cells[pos.index()] != Mark::Empty);
        self.cells[pos.index()] = Mark::Empty;
        self.filled -= 1;
    }

    /// Empty positions in canonical (ascending index) order.
    ///
    /// The order is stable and deterministic; it drives both the search's
    /// move enumeration and the random-move fallback, so results are
    /// reproducible.
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &m)| m == Mark::Empty)
            .map(|(i, _)| Pos(i as u32))
    }

    /// Number of empty cells
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.filled
    }

    /// Number of placed marks
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.filled
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled == self.cells.len()
    }

    /// Check if no mark has been placed
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.filled == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_3x3x3() -> Board {
        Board::new(Geometry::new(3, 3, 3).unwrap())
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = board_3x3x3();
        assert!(board.is_board_empty());
        assert!(!board.is_full());
        assert_eq!(board.empty_count(), 27);
    }

    #[test]
    fn test_apply_and_get() {
        let mut board = board_3x3x3();
        let pos = board.geometry().pos(&[1, 1, 1]).unwrap();
        board.apply(pos, Mark::Cross).unwrap();
        assert_eq!(board.get(pos), Mark::Cross);
        assert_eq!(board.mark_count(), 1);
        assert_eq!(board.empty_count(), 26);
    }

    #[test]
    fn test_apply_occupied_fails() {
        let mut board = board_3x3x3();
        let pos = board.geometry().pos(&[0, 0, 0]).unwrap();
        board.apply(pos, Mark::Cross).unwrap();
        let before = board.clone();
        assert_eq!(
            board.apply(pos, Mark::Nought),
            Err(MoveError::Occupied { index: 0 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_out_of_bounds_fails() {
        let mut board = board_3x3x3();
        assert_eq!(
            board.apply(Pos(27), Mark::Cross),
            Err(MoveError::OutOfBounds { index: 27 })
        );
    }

    #[test]
    fn test_apply_empty_mark_fails() {
        let mut board = board_3x3x3();
        assert_eq!(board.apply(Pos(0), Mark::Empty), Err(MoveError::NotAPlayer));
    }

    #[test]
    fn test_undo_restores_state() {
        let mut board = board_3x3x3();
        let before = board.clone();
        for pos in board.clone().empty_positions() {
            board.apply(pos, Mark::Nought).unwrap();
            board.undo(pos).unwrap();
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_undo_empty_cell_fails() {
        let mut board = board_3x3x3();
        assert_eq!(
            board.undo(Pos(5)),
            Err(MoveError::AlreadyEmpty { index: 5 })
        );
    }

    #[test]
    fn test_empty_positions_canonical_order() {
        let mut board = board_3x3x3();
        board.apply(Pos(4), Mark::Cross).unwrap();
        let empties: Vec<usize> = board.empty_positions().map(Pos::index).collect();
        assert_eq!(empties.len(), 26);
        assert!(!empties.contains(&4));
        let mut sorted = empties.clone();
        sorted.sort_unstable();
        assert_eq!(empties, sorted);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(Geometry::new(1, 2, 2).unwrap());
        board.apply(Pos(0), Mark::Cross).unwrap();
        assert!(!board.is_full());
        board.apply(Pos(1), Mark::Nought).unwrap();
        assert!(board.is_full());
        assert_eq!(board.empty_positions().count(), 0);
    }
}
