//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate generation and threat-based move ordering
//! - Minimax with alpha-beta pruning
//! - Result cache and opening book used by the engine
//! - Deadline and stop-flag limits

pub mod cache;
pub mod limits;
pub mod minimax;
pub mod movegen;
pub mod opening;

pub use cache::{CacheKey, CacheStats, ResultCache};
pub use limits::SearchLimits;
pub use minimax::{SearchResult, SearchStats, Searcher};
pub use movegen::{candidate_moves, ordered_moves, rank_by_threat, threat_score};
pub use opening::OpeningBook;
