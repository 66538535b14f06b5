//! Main AI engine: top-level move selection policy
//!
//! For each call the engine tries, in order:
//!
//! 1. **Cache**: a position already answered by this engine gets the same move
//! 2. **Immediate win**: complete a five if possible
//! 3. **Defense**: otherwise occupy the cell where the opponent would make five
//! 4. **Opening book**: scripted moves for the engine's first few turns
//! 5. **Alpha-Beta**: depth-limited minimax over ranked candidates
//!
//! One engine serves one game. Call [`Engine::reset`] when a new game starts
//! or the difficulty changes, otherwise the move counter and cache carry over.
//!
//! # Example
//!
//! ```
//! use gomoku::{Board, Difficulty, Engine, Pos, Stone};
//!
//! let mut engine = Engine::new(Difficulty::Easy);
//! let board = Board::new();
//!
//! let result = engine.select_move_with_stats(&board, Stone::Black);
//! assert_eq!(result.best_move, Some(Pos::new(7, 7)));
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, info, trace, warn};

use crate::board::{Board, Pos, Stone};
use crate::config::{Difficulty, EngineConfig};
use crate::error::ConfigError;
use crate::eval::makes_five;
use crate::search::{CacheKey, CacheStats, OpeningBook, ResultCache, SearchLimits, SearchResult, Searcher};

/// Which step of the selection policy produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Answered from the result cache
    Cached,
    /// Completes a five
    ImmediateWin,
    /// Blocks the opponent's five
    Defense,
    /// Scripted opening move
    Opening,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move selection with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Selected move; `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Search score from the mover's perspective (0 outside alpha-beta)
    pub score: i64,
    pub search_type: SearchType,
    pub time_ms: u64,
    pub nodes: u64,
    /// False when a deadline or stop flag cut the search short
    pub completed: bool,
}

impl MoveResult {
    #[inline]
    fn instant(pos: Pos, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type,
            time_ms,
            nodes: 0,
            completed: true,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
            completed: result.completed,
        }
    }

    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: 0,
            completed: true,
        }
    }
}

/// Move-selection engine bound to one game.
///
/// State kept across calls: the engine's own move counter (drives the
/// opening book) and the result cache. Everything else lives only for the
/// duration of one search.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    difficulty: Difficulty,
    book: OpeningBook,
    cache: ResultCache,
    move_count: u32,
}

impl Engine {
    /// Engine with the default configuration.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::build(difficulty, EngineConfig::default())
    }

    /// Engine with a custom configuration, validated first.
    pub fn with_config(difficulty: Difficulty, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(difficulty, config))
    }

    fn build(difficulty: Difficulty, config: EngineConfig) -> Self {
        Self {
            cache: ResultCache::new(config.cache_capacity),
            book: OpeningBook::standard(),
            difficulty,
            config,
            move_count: 0,
        }
    }

    /// Start a new game: clears the cache and move counter and applies the
    /// new difficulty.
    pub fn reset(&mut self, difficulty: Difficulty) {
        self.cache.clear();
        self.move_count = 0;
        self.difficulty = difficulty;
        info!(%difficulty, depth = self.depth(), "engine reset");
    }

    /// Best move for `side`, or `None` if the board has no empty cell.
    pub fn select_move(&mut self, board: &Board, side: Stone) -> Option<Pos> {
        self.select_move_with_stats(board, side).best_move
    }

    /// Like [`Engine::select_move`], honoring the configured time limit.
    pub fn select_move_with_stats(&mut self, board: &Board, side: Stone) -> MoveResult {
        let limits = match self.config.time_limit_ms {
            Some(ms) => SearchLimits::with_time_limit(Duration::from_millis(ms)),
            None => SearchLimits::none(),
        };
        self.select_move_with_limits(board, side, limits)
    }

    /// Select a move under explicit limits.
    ///
    /// Limits only bound the alpha-beta step. A move is always returned while
    /// an empty cell exists; moves from a cut-short search are not cached.
    pub fn select_move_with_limits(&mut self, board: &Board, side: Stone, limits: SearchLimits) -> MoveResult {
        let start = Instant::now();
        let elapsed = || start.elapsed().as_millis() as u64;

        if board.is_full() {
            return MoveResult::no_move(elapsed());
        }

        let key = CacheKey::new(board, side);
        if let Some(pos) = self.cache.probe(&key) {
            trace!(%pos, ?side, "cache hit");
            return MoveResult::instant(pos, SearchType::Cached, elapsed());
        }

        let result = if let Some(pos) = find_immediate_win(board, side) {
            MoveResult::instant(pos, SearchType::ImmediateWin, elapsed())
        } else if let Some(pos) = find_immediate_win(board, side.opponent()) {
            MoveResult::instant(pos, SearchType::Defense, elapsed())
        } else if let Some(pos) = self.opening_move(board) {
            trace!(%pos, ply = self.move_count, "opening book move");
            MoveResult::instant(pos, SearchType::Opening, elapsed())
        } else {
            let depth = self.depth();
            let search = Searcher::new(&self.config, limits).search(board, side, depth);
            if !search.completed {
                warn!(depth, nodes = search.nodes, "search stopped before completing");
            }
            MoveResult::from_alphabeta(search, elapsed())
        };

        if let Some(pos) = result.best_move {
            if result.completed && self.cache.insert(key, pos) {
                trace!(%pos, cached = self.cache.len(), "cached move");
            }
            self.move_count += 1;
        }

        debug!(
            side = ?side,
            best_move = ?result.best_move,
            search_type = ?result.search_type,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "selected move"
        );
        result
    }

    fn opening_move(&self, board: &Board) -> Option<Pos> {
        if !self.config.use_opening_book || self.move_count >= self.config.book_plies {
            return None;
        }
        self.book.lookup(board, self.move_count as usize)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Search depth for the current difficulty.
    pub fn depth(&self) -> u8 {
        self.config.depth(self.difficulty)
    }

    /// Moves this engine has selected since the last reset (cache hits excluded).
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Clear cached moves only; the move counter is kept.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

/// First empty cell (row-major) where `color` would complete five.
fn find_immediate_win(board: &Board, color: Stone) -> Option<Pos> {
    board.empty_cells().find(|&pos| makes_five(board, pos, color))
}
