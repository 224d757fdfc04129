//! Heuristic evaluation: weighted open-line differential
//!
//! Invoked only at non-terminal leaves once the depth budget is exhausted.
//! Each winning line is classified per player: a line is *open* for a
//! player if it contains no opponent mark, i.e. that player can still
//! complete it. The score is the difference of open-line weights between
//! maximizer and minimizer.
//!
//! A line already carrying `m` own marks weighs `2^m`: an open line closer
//! to completion is exponentially more valuable than a bare one. The
//! unweighted count is the `m = 0` degenerate case of the same formula.

use crate::board::{Board, Mark};
use crate::rules::LineSet;

use super::WIN_SCORE;

/// Evaluate the board from the perspective of `maximizer`.
///
/// Returns a score in `(-WIN_SCORE, WIN_SCORE)` where positive values
/// favor `maximizer`. Antisymmetric between the two players:
/// `evaluate(b, lines, p) == -evaluate(b, lines, p.opponent())`.
#[must_use]
pub fn evaluate(board: &Board, lines: &LineSet, maximizer: Mark) -> i32 {
    debug_assert!(maximizer.is_player());
    let minimizer = maximizer.opponent();

    let mut total: i64 = 0;
    for line in lines.lines() {
        let mut max_marks = 0u32;
        let mut min_marks = 0u32;
        for &pos in line {
            let mark = board.get(pos);
            if mark == maximizer {
                max_marks += 1;
            } else if mark == minimizer {
                min_marks += 1;
            }
        }
        if min_marks == 0 {
            total += line_weight(max_marks);
        }
        if max_marks == 0 {
            total -= line_weight(min_marks);
        }
        // Lines holding both players' marks are dead: no contribution
    }

    // Keep heuristic values strictly below the terminal sentinels even for
    // geometries with very large line sets
    total.clamp(-(WIN_SCORE as i64) + 1, WIN_SCORE as i64 - 1) as i32
}

/// Weight of an open line carrying `marks` own marks.
#[inline]
fn line_weight(marks: u32) -> i64 {
    1i64 << marks.min(32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Geometry;

    fn setup(d: usize, n: usize, k: usize) -> (Board, LineSet) {
        let geometry = Geometry::new(d, n, k).unwrap();
        (Board::new(geometry), LineSet::generate(geometry))
    }

    fn place(board: &mut Board, coords: &[usize], mark: Mark) {
        let pos = board.geometry().pos(coords).unwrap();
        board.apply(pos, mark).unwrap();
    }

    #[test]
    fn test_empty_board_is_neutral() {
        let (board, lines) = setup(3, 3, 3);
        assert_eq!(evaluate(&board, &lines, Mark::Cross), 0);
        assert_eq!(evaluate(&board, &lines, Mark::Nought), 0);
    }

    #[test]
    fn test_antisymmetry() {
        let (mut board, lines) = setup(3, 3, 3);
        place(&mut board, &[1, 1, 1], Mark::Cross);
        place(&mut board, &[0, 0, 0], Mark::Nought);
        place(&mut board, &[2, 0, 1], Mark::Cross);
        let for_cross = evaluate(&board, &lines, Mark::Cross);
        let for_nought = evaluate(&board, &lines, Mark::Nought);
        assert_eq!(for_cross, -for_nought);
    }

    #[test]
    fn test_center_mark_scores_positive() {
        let (mut board, lines) = setup(3, 3, 3);
        place(&mut board, &[1, 1, 1], Mark::Cross);
        assert!(evaluate(&board, &lines, Mark::Cross) > 0);
        assert!(evaluate(&board, &lines, Mark::Nought) < 0);
    }

    #[test]
    fn test_blocking_kills_lines_for_both() {
        let (mut board, lines) = setup(2, 3, 3);
        place(&mut board, &[0, 0], Mark::Cross);
        let before = evaluate(&board, &lines, Mark::Cross);
        // Opponent takes a cell sharing a line with the corner: that line
        // dies for both players, lowering Cross's edge
        place(&mut board, &[0, 1], Mark::Nought);
        let after = evaluate(&board, &lines, Mark::Cross);
        assert!(after < before);
    }

    #[test]
    fn test_nearly_complete_line_outweighs_scattered_marks() {
        let (mut a, lines) = setup(3, 4, 4);
        // Three on one open line
        for x in 0..3 {
            place(&mut a, &[x, 0, 0], Mark::Cross);
        }
        let (mut b, _) = setup(3, 4, 4);
        // Three scattered marks sharing no line
        place(&mut b, &[0, 0, 0], Mark::Cross);
        place(&mut b, &[2, 1, 0], Mark::Cross);
        place(&mut b, &[1, 3, 2], Mark::Cross);
        assert!(evaluate(&a, &lines, Mark::Cross) > evaluate(&b, &lines, Mark::Cross));
    }

    #[test]
    fn test_magnitude_below_win_score() {
        let (mut board, lines) = setup(3, 4, 4);
        // Stack one player heavily without completing any line; still a
        // static estimate, not a win
        for x in 0..3 {
            for y in 0..3 {
                place(&mut board, &[x, y, 0], Mark::Cross);
            }
        }
        let score = evaluate(&board, &lines, Mark::Cross);
        assert!(score.abs() < WIN_SCORE);
    }
}
