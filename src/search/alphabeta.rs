//! Alpha-beta minimax over the mutable board
//!
//! The search mutates the caller's board in place: each candidate move is
//! applied, the recursion descends with the opposite role, and the move is
//! undone again. The apply/undo pair is held by a scope guard so the undo
//! runs on every exit path and the board is guaranteed to be back in its
//! pre-call state when the search returns.
//!
//! Move enumeration follows the board's canonical empty-cell order, which
//! makes results reproducible and gives the first-found-wins tie-break a
//! stable meaning.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::board::{Board, Mark, Pos};
use crate::eval::{evaluate, WIN_SCORE};
use crate::rules::{winner, winner_at, LineSet};

/// Bound beyond any reachable score, used as the initial alpha/beta window
const INF: i32 = WIN_SCORE + 1;

/// Search statistics for diagnostics and regression tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Recursive calls entered
    pub nodes: u64,
    /// Terminal or depth-limit evaluations
    pub leaf_evals: u64,
    /// Branches abandoned by an `alpha >= beta` cutoff
    pub cutoffs: u64,
}

/// Result of one search call.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// Best move found; `None` when the board was already terminal
    pub best_move: Option<Pos>,
    /// Score of the best move: `WIN_SCORE` for a proven win, its negation
    /// for a proven loss, 0 for a draw, otherwise a heuristic estimate
    pub score: i32,
    /// Effective depth searched after clamping to the empty-cell count
    pub depth: usize,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Scope guard for a trial move: places a mark on construction and
/// guarantees the matching undo when dropped, on every exit path.
struct TrialMove<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> TrialMove<'a> {
    #[inline]
    fn place(board: &'a mut Board, pos: Pos, mark: Mark) -> Self {
        board.place(pos, mark);
        Self { board, pos }
    }

    #[inline]
    fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    #[inline]
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}

/// Depth-limited minimax searcher over one precomputed line set.
///
/// Holds no state between calls beyond the borrowed, immutable lines;
/// statistics are reset at every [`search`](Self::search).
pub struct Searcher<'a> {
    lines: &'a LineSet,
    prune: bool,
    stop: Option<Arc<AtomicBool>>,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    /// Alpha-beta searcher (the normal configuration).
    #[must_use]
    pub fn new(lines: &'a LineSet) -> Self {
        Self {
            lines,
            prune: true,
            stop: None,
            stats: SearchStats::default(),
        }
    }

    /// Plain minimax over the identical tree, no cutoffs.
    ///
    /// Visits strictly more nodes than the pruned search on any position
    /// with at least one cutoff but returns the same score and move; the
    /// regression tests rely on this equivalence.
    #[must_use]
    pub fn without_pruning(lines: &'a LineSet) -> Self {
        Self {
            prune: false,
            ..Self::new(lines)
        }
    }

    /// Install a cooperative stop flag, polled at each recursive entry.
    ///
    /// When the flag is raised the recursion unwinds immediately and the
    /// root returns the best move found so far; if no move was examined
    /// yet, the result carries no move and a neutral score. Intended as a
    /// latency escape hatch for interactive callers on large boards.
    #[must_use]
    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop = Some(flag);
        self
    }

    #[inline]
    fn is_stopped(&self) -> bool {
        self.stop
            .as_ref()
            .is_some_and(|f| f.load(Ordering::Relaxed))
    }

    /// Find the best move for `player` searching `depth` plies.
    ///
    /// The depth is clamped to the number of empty cells and floored at 1:
    /// the search never looks deeper than there are legal moves left, and
    /// as long as a legal move exists at least one ply is examined so a
    /// candidate is always produced. On an already-terminal board this
    /// returns immediately with no candidate move and the terminal score,
    /// performing no recursion. The board is returned to its pre-call
    /// state in all cases.
    pub fn search(&mut self, board: &mut Board, player: Mark, depth: usize) -> SearchResult {
        debug_assert!(player.is_player());
        self.stats = SearchStats::default();

        // Terminal short-circuit before any recursion
        if let Some(w) = winner(board, self.lines) {
            let score = if w == player { WIN_SCORE } else { -WIN_SCORE };
            return self.finished(None, score, 0);
        }
        if board.is_full() {
            return self.finished(None, 0, 0);
        }

        // At least one empty cell exists here, so the floor keeps the
        // clamp within the legal move count
        let depth = depth.min(board.empty_count()).max(1);

        let mut alpha = -INF;
        let mut best_move = None;
        let moves: Vec<Pos> = board.empty_positions().collect();
        for pos in moves {
            if self.is_stopped() {
                break;
            }
            let mut trial = TrialMove::place(board, pos, player);
            let score = self.alpha_beta(
                trial.board(),
                player.opponent(),
                player,
                depth - 1,
                alpha,
                INF,
                pos,
            );
            drop(trial);

            // Strictly-greater update: equal scores keep the earlier move,
            // so selection is deterministic in enumeration order
            if score > alpha {
                alpha = score;
                best_move = Some(pos);
            }
        }

        if best_move.is_none() {
            // Only reachable when the stop flag was raised before any move
            // was examined; report neutral instead of the open window bound
            return self.finished(None, 0, depth);
        }
        self.finished(best_move, alpha, depth)
    }

    fn finished(&self, best_move: Option<Pos>, score: i32, depth: usize) -> SearchResult {
        SearchResult {
            best_move,
            score,
            depth,
            stats: self.stats,
        }
    }

    /// Recursive minimax with the running alpha/beta window.
    ///
    /// `last` is the move that produced this node; only the lines through
    /// it can have been completed, so the terminal check scans just those.
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        to_move: Mark,
        maximizer: Mark,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        last: Pos,
    ) -> i32 {
        self.stats.nodes += 1;

        if self.is_stopped() {
            return 0;
        }

        if let Some(w) = winner_at(board, self.lines, last) {
            self.stats.leaf_evals += 1;
            return if w == maximizer { WIN_SCORE } else { -WIN_SCORE };
        }
        if board.is_full() {
            self.stats.leaf_evals += 1;
            return 0;
        }
        if depth == 0 {
            self.stats.leaf_evals += 1;
            return evaluate(board, self.lines, maximizer);
        }

        let maximizing = to_move == maximizer;
        let moves: Vec<Pos> = board.empty_positions().collect();
        for pos in moves {
            let mut trial = TrialMove::place(board, pos, to_move);
            let score = self.alpha_beta(
                trial.board(),
                to_move.opponent(),
                maximizer,
                depth - 1,
                alpha,
                beta,
                pos,
            );
            drop(trial);

            if maximizing {
                if score > alpha {
                    alpha = score;
                }
            } else if score < beta {
                beta = score;
            }

            if self.prune && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if maximizing {
            alpha
        } else {
            beta
        }
    }
}
