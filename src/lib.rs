//! Gomoku move-selection engine
//!
//! Standard five-in-a-row on a 15x15 board:
//! - Five or more in a row wins, overlines included
//! - No captures, no forbidden moves
//! - Black moves first
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: The five-in-a-row rule shared by engine and game loop
//! - [`eval`]: Line scanning, tactical patterns and static evaluation
//! - [`search`]: Move ordering, minimax with alpha-beta, cache and opening book
//! - [`engine`]: Top-level move selection integrating all components
//! - [`config`]: Tunable depths, breadths and weights, loadable from TOML
//! - [`game`]: Caller-owned game state
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Board, Difficulty, Engine, Pos, Stone};
//!
//! let mut board = Board::new();
//! let mut engine = Engine::new(Difficulty::Easy);
//!
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//! board.place_stone(Pos::new(8, 8), Stone::White);
//!
//! if let Some(pos) = engine.select_move(&board, Stone::Black) {
//!     assert!(board.is_empty(pos));
//!     board.place_stone(pos, Stone::Black);
//! }
//! ```
//!
//! # Search Priority
//!
//! The engine follows this priority:
//! 1. Cached answer for a position it has seen
//! 2. Immediate winning move
//! 3. Block the opponent's immediate five
//! 4. Opening book during the engine's first moves
//! 5. Alpha-Beta search over threat-ranked candidates

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::{Difficulty, EngineConfig, LeafPerspective};
pub use engine::{Engine, MoveResult, SearchType};
pub use error::{ConfigError, GameError, ParseBoardError};
pub use game::GameState;
pub use search::SearchLimits;
