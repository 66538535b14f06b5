//! Evaluation module for Gomoku positions
//!
//! - [`line`]: run-length scanning primitives
//! - [`patterns`]: tactical patterns for hypothetical placements and their weights
//! - [`heuristic`]: static board evaluation

pub mod heuristic;
pub mod line;
pub mod patterns;

pub use heuristic::{evaluate, EvalWeights};
pub use line::{is_open_at_ends, run_length, Run};
pub use patterns::{
    has_double_open_three, has_jump_pattern, has_open_run, is_terminal_win, makes_five,
    PlacementProfile, ThreatWeights,
};
