//! Depth-limited minimax with alpha-beta pruning.
//!
//! The root tries the `root_breadth` best-ranked candidates for the mover;
//! every deeper ply re-ranks for its side to move and keeps `ply_breadth`.
//! By default leaves are scored from the root mover's point of view, so
//! maximizing plies take the max and minimizing plies the min of the same
//! quantity. [`LeafPerspective::SideToMove`] scores each leaf for whoever
//! moves there instead, with no win bonus.
//!
//! The search places and removes stones on a scratch board. Every placement
//! is undone on every exit path, including cutoffs and cancellation.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::config::EngineConfig;
//! use gomoku::search::{SearchLimits, Searcher};
//!
//! let config = EngineConfig::default();
//! let mut board = Board::new();
//! for col in 0..4 {
//!     board.place_stone(Pos::new(7, col), Stone::Black);
//! }
//!
//! let result = Searcher::new(&config, SearchLimits::none()).search(&board, Stone::Black, 2);
//! assert_eq!(result.best_move, Some(Pos::new(7, 4)));
//! ```

use crate::board::{Board, Pos, Stone};
use crate::config::{EngineConfig, LeafPerspective};
use crate::eval::evaluate;
use crate::rules::has_five_at_pos;

use super::limits::{SearchLimits, CHECK_INTERVAL};
use super::movegen::ordered_moves;

/// Bound for alpha-beta windows. Far above any reachable score.
const INF: i64 = i64::MAX / 4;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cutoffs at minimizing and maximizing plies
    pub cutoffs: u64,
    /// Cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Leaf and terminal evaluations
    pub evaluations: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.cutoffs as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` only when no empty cell exists
    pub best_move: Option<Pos>,
    /// Score of the best move from the mover's perspective
    pub score: i64,
    pub depth: u8,
    pub nodes: u64,
    /// False when a deadline or stop flag cut the search short
    pub completed: bool,
    pub stats: SearchStats,
}

pub struct Searcher<'a> {
    config: &'a EngineConfig,
    limits: SearchLimits,
    pruning: bool,
    perspective: Stone,
    nodes: u64,
    stopped: bool,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    pub fn new(config: &'a EngineConfig, limits: SearchLimits) -> Self {
        Self {
            config,
            limits,
            pruning: true,
            perspective: Stone::Black,
            nodes: 0,
            stopped: false,
            stats: SearchStats::default(),
        }
    }

    /// Plain minimax over the same candidates, without cutoffs.
    pub fn exhaustive(config: &'a EngineConfig) -> Self {
        Self {
            pruning: false,
            ..Self::new(config, SearchLimits::none())
        }
    }

    /// Search a copy of `board`; the caller's board is never touched.
    pub fn search(&mut self, board: &Board, side: Stone, depth: u8) -> SearchResult {
        let mut scratch = board.clone();
        self.search_root(&mut scratch, side, depth)
    }

    /// Root search on a board the searcher may mutate and must restore.
    pub fn search_root(&mut self, board: &mut Board, side: Stone, depth: u8) -> SearchResult {
        self.perspective = side;
        self.nodes = 0;
        self.stopped = false;
        self.stats = SearchStats::default();

        let depth = depth.max(1);
        let moves = ordered_moves(
            board,
            side,
            self.config.neighbor_radius,
            self.config.root_breadth,
            &self.config.threats,
        );

        let mut best: Option<(Pos, i64)> = None;
        let mut alpha = -INF;

        for &pos in &moves {
            if self.limits.should_stop() {
                self.stopped = true;
                break;
            }

            board.place_stone(pos, side);
            let score = if has_five_at_pos(board, pos, side) {
                self.node_score(board, Some(side), side.opponent(), depth - 1)
            } else {
                self.minimax(board, depth - 1, false, alpha, INF, side.opponent())
            };
            board.remove_stone(pos);

            if self.stopped {
                break;
            }
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pos, score));
            }
            if self.pruning {
                alpha = alpha.max(score);
            }
        }

        // Cancelled before any move finished: fall back to the top candidate
        let (best_move, score) = match best {
            Some((pos, score)) => (Some(pos), score),
            None => (moves.first().copied(), 0),
        };

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            completed: !self.stopped,
            stats: self.stats.clone(),
        }
    }

    /// Score of the current node for the root mover.
    ///
    /// `side_to_move` plays next; the previous move is checked for a five.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i64,
        mut beta: i64,
        side_to_move: Stone,
    ) -> i64 {
        self.tick();
        if self.stopped {
            return 0;
        }

        if depth == 0 {
            return self.node_score(board, None, side_to_move, 0);
        }

        let moves = ordered_moves(
            board,
            side_to_move,
            self.config.neighbor_radius,
            self.config.ply_breadth,
            &self.config.threats,
        );
        if moves.is_empty() {
            return self.node_score(board, None, side_to_move, depth);
        }

        let mut value = if maximizing { -INF } else { INF };
        for (i, &pos) in moves.iter().enumerate() {
            board.place_stone(pos, side_to_move);
            let score = if has_five_at_pos(board, pos, side_to_move) {
                self.node_score(board, Some(side_to_move), side_to_move.opponent(), depth - 1)
            } else {
                self.minimax(board, depth - 1, !maximizing, alpha, beta, side_to_move.opponent())
            };
            board.remove_stone(pos);

            if self.stopped {
                break;
            }

            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                beta = beta.min(value);
            }

            if self.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }
        value
    }

    /// Count a node and poll the limits every `CHECK_INTERVAL` nodes.
    #[inline]
    fn tick(&mut self) {
        self.nodes += 1;
        if self.nodes & (CHECK_INTERVAL - 1) == 0 && self.limits.should_stop() {
            self.stopped = true;
        }
    }

    /// Static evaluation, plus a win bonus when `winner` just made five.
    /// Remaining depth is added so quicker wins score higher.
    ///
    /// `to_move` is the side that would play next at this node; it is the
    /// scoring side under [`LeafPerspective::SideToMove`].
    fn node_score(&mut self, board: &Board, winner: Option<Stone>, to_move: Stone, depth: u8) -> i64 {
        self.tick();
        self.stats.evaluations += 1;

        if self.config.leaf_perspective == LeafPerspective::SideToMove {
            return evaluate(board, to_move, &self.config.eval);
        }

        let base = evaluate(board, self.perspective, &self.config.eval);
        let bonus = self.config.win_score + i64::from(depth);
        match winner {
            Some(w) if w == self.perspective => base + bonus,
            Some(_) => base - bonus,
            None => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use super::*;

    fn place(board: &mut Board, stones: &[(u8, u8)], color: Stone) {
        for &(r, c) in stones {
            board.place_stone(Pos::new(r, c), color);
        }
    }

    #[test]
    fn test_search_empty_board() {
        let config = EngineConfig::default();
        let result = Searcher::new(&config, SearchLimits::none()).search(&Board::new(), Stone::Black, 2);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert!(result.completed);
    }

    #[test]
    fn test_search_finds_winning_move() {
        let config = EngineConfig::default();
        let mut board = Board::new();
        place(&mut board, &[(9, 0), (9, 1), (9, 2), (9, 3)], Stone::Black);
        place(&mut board, &[(10, 0), (10, 1), (11, 5)], Stone::White);

        let result = Searcher::new(&config, SearchLimits::none()).search(&board, Stone::Black, 3);
        assert_eq!(result.best_move, Some(Pos::new(9, 4)));
        assert!(result.score > config.win_score);
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        let config = EngineConfig::default();
        let mut board = Board::new();
        place(&mut board, &[(9, 0), (9, 1), (9, 2), (9, 3)], Stone::White);
        board.place_stone(Pos::new(10, 0), Stone::Black);

        let result = Searcher::new(&config, SearchLimits::none()).search(&board, Stone::Black, 2);
        assert_eq!(result.best_move, Some(Pos::new(9, 4)));
    }

    #[test]
    fn test_losing_score_when_unstoppable() {
        let config = EngineConfig::default();
        let mut board = Board::new();
        // Open four for White: two winning ends, Black can block only one
        place(&mut board, &[(7, 4), (7, 5), (7, 6), (7, 7)], Stone::White);
        place(&mut board, &[(0, 0), (0, 14)], Stone::Black);

        let result = Searcher::new(&config, SearchLimits::none()).search(&board, Stone::Black, 2);
        assert!(result.score < -config.win_score);
    }

    #[test]
    fn test_pruning_does_not_change_choice() {
        let config = EngineConfig::default();
        let mut board = Board::new();
        place(&mut board, &[(7, 7), (8, 8), (6, 8)], Stone::Black);
        place(&mut board, &[(7, 8), (6, 6), (9, 9)], Stone::White);

        for depth in 1..=3 {
            let pruned = Searcher::new(&config, SearchLimits::none()).search(&board, Stone::Black, depth);
            let full = Searcher::exhaustive(&config).search(&board, Stone::Black, depth);
            assert_eq!(pruned.best_move, full.best_move, "depth {depth}");
            assert_eq!(pruned.score, full.score, "depth {depth}");
            assert!(pruned.nodes <= full.nodes);
        }
    }

    #[test]
    fn test_pruning_cuts_nodes() {
        let config = EngineConfig::default();
        let mut board = Board::new();
        place(&mut board, &[(7, 7), (7, 8)], Stone::Black);
        place(&mut board, &[(8, 7)], Stone::White);

        let pruned = Searcher::new(&config, SearchLimits::none()).search(&board, Stone::White, 3);
        let full = Searcher::exhaustive(&config).search(&board, Stone::White, 3);
        assert!(pruned.nodes < full.nodes);
        assert!(pruned.stats.cutoffs > 0);
        assert_eq!(full.stats.cutoffs, 0);

        let rate = pruned.stats.first_move_rate();
        assert!(rate > 0.0 && rate <= 100.0, "rate {rate}");
        assert_eq!(full.stats.first_move_rate(), 0.0);
    }

    #[test]
    fn test_search_root_restores_board() {
        let config = EngineConfig::default();
        let mut board = Board::new();
        place(&mut board, &[(7, 7), (7, 8), (7, 9)], Stone::Black);
        place(&mut board, &[(8, 8), (6, 6)], Stone::White);
        let before = board.clone();

        let _ = Searcher::new(&config, SearchLimits::none()).search_root(&mut board, Stone::White, 3);
        assert_eq!(board, before);
    }

    #[test]
    fn test_stop_flag_returns_top_candidate() {
        let config = EngineConfig::default();
        let mut board = Board::new();
        place(&mut board, &[(2, 3), (2, 4), (2, 5), (2, 6)], Stone::White);
        board.place_stone(Pos::new(2, 2), Stone::Black);

        let flag = Arc::new(AtomicBool::new(true));
        let limits = SearchLimits::none().stop_flag(flag);
        let result = Searcher::new(&config, limits).search(&board, Stone::Black, 4);

        assert!(!result.completed);
        // Ranked first: the only cell that blocks White's five
        assert_eq!(result.best_move, Some(Pos::new(2, 7)));
    }

    #[test]
    fn test_deadline_interrupts_deep_search() {
        let config = EngineConfig::default();
        let mut board = Board::new();
        place(&mut board, &[(7, 7), (8, 8), (6, 8)], Stone::Black);
        place(&mut board, &[(7, 8), (6, 6), (9, 9)], Stone::White);

        let start = Instant::now();
        let limits = SearchLimits::none().deadline(start + Duration::from_millis(1));
        let result = Searcher::new(&config, limits).search(&board, Stone::Black, 8);

        assert!(!result.completed);
        assert!(result.best_move.is_some());
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_leaf_perspective_side_to_move() {
        let mut board = Board::new();
        place(&mut board, &[(9, 0), (9, 1), (9, 2), (9, 3)], Stone::Black);
        place(&mut board, &[(10, 0), (10, 1), (11, 5)], Stone::White);

        let root = EngineConfig::default();
        let result = Searcher::new(&root, SearchLimits::none()).search(&board, Stone::Black, 1);
        assert_eq!(result.best_move, Some(Pos::new(9, 4)));

        // Every depth-1 leaf is scored for White, so the five is the worst
        // outcome Black can pick and carries no bonus
        let literal = EngineConfig {
            leaf_perspective: LeafPerspective::SideToMove,
            ..EngineConfig::default()
        };
        let result = Searcher::new(&literal, SearchLimits::none()).search(&board, Stone::Black, 1);
        assert_ne!(result.best_move, Some(Pos::new(9, 4)));
        assert!(result.score < literal.win_score);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let config = EngineConfig::default();
        let mut board = Board::new();
        for pos in (0..crate::board::TOTAL_CELLS).map(Pos::from_index) {
            let stone = if (pos.row / 2 + pos.col) % 2 == 0 { Stone::Black } else { Stone::White };
            board.place_stone(pos, stone);
        }
        let result = Searcher::new(&config, SearchLimits::none()).search(&board, Stone::Black, 2);
        assert_eq!(result.best_move, None);
    }
}
