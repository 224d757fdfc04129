//! Terminal detection: completed lines and full-board draws

use crate::board::{Board, Mark, Pos};

use super::LineSet;

/// Scan the full line set for a completed line.
///
/// Returns the owning player of the first completed line found. At most
/// one player can own any given line, but legal play also guarantees at
/// most one player has a completed line on the board at a time.
#[must_use]
pub fn winner(board: &Board, lines: &LineSet) -> Option<Mark> {
    lines.lines().iter().find_map(|line| line_owner(board, line))
}

/// Check only the lines through the most recently played cell.
///
/// Equivalent to [`winner`] right after a move at `pos`: any newly
/// completed line must pass through that cell, and earlier positions were
/// already verified non-winning. This is the per-node terminal check used
/// by the search.
#[must_use]
pub fn winner_at(board: &Board, lines: &LineSet, pos: Pos) -> Option<Mark> {
    lines
        .lines_through(pos)
        .iter()
        .find_map(|&id| line_owner(board, lines.line(id)))
}

/// A draw is a full board with no completed line.
#[must_use]
pub fn is_draw(board: &Board, lines: &LineSet) -> bool {
    board.is_full() && winner(board, lines).is_none()
}

/// The player holding every cell of the line, if any.
fn line_owner(board: &Board, line: &[Pos]) -> Option<Mark> {
    let first = board.get(line[0]);
    if !first.is_player() {
        return None;
    }
    line[1..]
        .iter()
        .all(|&pos| board.get(pos) == first)
        .then_some(first)
}
