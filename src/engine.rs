//! Engine facade: geometry setup, move validation, and move selection
//!
//! The engine owns the precomputed line set for one board geometry and
//! exposes the operations a frontend needs: create boards, apply player
//! moves, detect terminal states, and pick the computer's move at a chosen
//! difficulty. Boards themselves stay plain values owned by the caller, so
//! one engine can serve any number of concurrent games on the same
//! geometry.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use rand::seq::SliceRandom;

use crate::board::{Board, Geometry, Mark, Pos};
use crate::error::{ConfigError, MoveError};
use crate::eval::WIN_SCORE;
use crate::rules::{winner, LineSet};
use crate::search::Searcher;

/// Requested playing strength, mapped to a search depth by the
/// [`DifficultyPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Maps difficulty levels to search depths and gates the opening shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyPolicy {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    /// Play a uniformly random empty cell while the board holds strictly
    /// more empty cells than this threshold. `None` disables the shortcut
    /// and every move is searched.
    pub random_threshold: Option<usize>,
}

impl DifficultyPolicy {
    /// Default policy for a geometry: depths 2/4/6 and a random opening
    /// until four cells are occupied.
    #[must_use]
    pub fn for_geometry(geometry: Geometry) -> Self {
        Self {
            easy: 2,
            medium: 4,
            hard: 6,
            random_threshold: Some(geometry.cell_count().saturating_sub(4)),
        }
    }

    #[must_use]
    pub fn depth(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

/// How a move was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Opening shortcut: a uniformly random empty cell
    Random,
    /// Depth-limited alpha-beta search
    AlphaBeta,
    /// The board was already terminal, no move produced
    Terminal,
}

/// A selected move with its search metadata.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// Chosen cell, `None` when the board was already terminal
    pub best_move: Option<Pos>,
    /// Score from the mover's perspective, 0 for random moves
    pub score: i32,
    pub search_type: SearchType,
    /// Effective search depth, 0 unless alpha-beta ran
    pub depth: usize,
    /// Wall-clock time spent selecting the move
    pub time_ms: u128,
    /// Recursive search nodes visited
    pub nodes: u64,
}

/// Outcome classification of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalState {
    pub winner: Option<Mark>,
    pub is_draw: bool,
}

impl TerminalState {
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }
}

/// Move-selection engine for one board geometry.
pub struct Engine {
    geometry: Geometry,
    lines: LineSet,
    policy: DifficultyPolicy,
    stop: Option<Arc<AtomicBool>>,
}

impl Engine {
    /// Build an engine for a `size^dims` board with winning runs of length
    /// `run`. Precomputes the full line set once; all subsequent operations
    /// reuse it.
    pub fn configure(dims: usize, size: usize, run: usize) -> Result<Self, ConfigError> {
        let geometry = Geometry::new(dims, size, run)?;
        let lines = LineSet::generate(geometry);
        log::debug!(
            "engine configured: {dims}d size {size} run {run}, {} lines",
            lines.len()
        );
        Ok(Self {
            policy: DifficultyPolicy::for_geometry(geometry),
            geometry,
            lines,
            stop: None,
        })
    }

    /// Replace the default difficulty policy.
    #[must_use]
    pub fn with_policy(mut self, policy: DifficultyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Install a cooperative stop flag forwarded to every search.
    #[must_use]
    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop = Some(flag);
        self
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[must_use]
    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    #[must_use]
    pub fn policy(&self) -> DifficultyPolicy {
        self.policy
    }

    /// Fresh empty board for this engine's geometry.
    #[must_use]
    pub fn new_board(&self) -> Board {
        Board::new(self.geometry)
    }

    /// Validate and apply a player move given as coordinates.
    pub fn apply_move(
        &self,
        board: &mut Board,
        coords: &[usize],
        mark: Mark,
    ) -> Result<Pos, MoveError> {
        let pos = self.geometry.pos(coords)?;
        board.apply(pos, mark)?;
        Ok(pos)
    }

    /// Classify the position: winner, draw, or still in play.
    #[must_use]
    pub fn check_terminal(&self, board: &Board) -> TerminalState {
        let winner = winner(board, &self.lines);
        TerminalState {
            winner,
            is_draw: winner.is_none() && board.is_full(),
        }
    }

    /// Select a move for `player` at the given difficulty.
    ///
    /// On a terminal board returns no move with the terminal score. Early
    /// in the game, while more cells are empty than the policy threshold,
    /// a random empty cell is played instead of searching. Otherwise runs
    /// the alpha-beta search at the policy's depth for the difficulty.
    /// The board is unchanged on return.
    pub fn find_best_move(
        &self,
        board: &mut Board,
        player: Mark,
        difficulty: Difficulty,
    ) -> MoveResult {
        debug_assert!(player.is_player());
        let start = Instant::now();

        let terminal = self.check_terminal(board);
        if terminal.is_over() {
            let score = match terminal.winner {
                Some(w) if w == player => WIN_SCORE,
                Some(_) => -WIN_SCORE,
                None => 0,
            };
            return MoveResult {
                best_move: None,
                score,
                search_type: SearchType::Terminal,
                depth: 0,
                time_ms: start.elapsed().as_millis(),
                nodes: 0,
            };
        }

        if let Some(threshold) = self.policy.random_threshold {
            if board.empty_count() > threshold {
                let empties: Vec<Pos> = board.empty_positions().collect();
                let pos = empties.choose(&mut rand::thread_rng()).copied();
                log::debug!("opening shortcut: random cell {pos:?}");
                return MoveResult {
                    best_move: pos,
                    score: 0,
                    search_type: SearchType::Random,
                    depth: 0,
                    time_ms: start.elapsed().as_millis(),
                    nodes: 0,
                };
            }
        }

        let depth = self.policy.depth(difficulty);
        let mut searcher = Searcher::new(&self.lines);
        if let Some(flag) = &self.stop {
            searcher = searcher.with_stop_flag(Arc::clone(flag));
        }
        let result = searcher.search(board, player, depth);
        let time_ms = start.elapsed().as_millis();
        log::debug!(
            "search depth {} score {} nodes {} cutoffs {} in {time_ms}ms",
            result.depth,
            result.score,
            result.stats.nodes,
            result.stats.cutoffs
        );
        MoveResult {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            depth: result.depth,
            time_ms,
            nodes: result.stats.nodes,
        }
    }
}
