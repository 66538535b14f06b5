//! Heuristic evaluation function for Gomoku board positions
//!
//! Static score of a full board from one side's perspective, built from:
//! - Run lengths read from every stone along all 8 compass directions
//! - Positional bonuses for stones in the central zones
//!
//! The opponent's runs and zones cost slightly less than our own earn,
//! which tilts the search toward building over pure blocking.

use serde::{Deserialize, Serialize};

use super::line::count_consecutive;
use crate::board::{Board, Direction, Pos, Stone, BOARD_SIZE};

/// Tunable evaluator weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Bonus for own runs of 5+, 4, 3 and 2
    pub own_runs: [i64; 4],
    /// Penalty for opponent runs of 5+, 4, 3 and 2
    pub opponent_runs: [i64; 4],
    /// Distance from the edge where the inner zone starts
    pub inner_margin: u8,
    /// Distance from the edge where the outer zone starts
    pub outer_margin: u8,
    pub own_inner: i64,
    pub own_outer: i64,
    pub opponent_inner: i64,
    pub opponent_outer: i64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            own_runs: [100_000, 10_000, 1_000, 100],
            opponent_runs: [90_000, 9_000, 900, 90],
            inner_margin: 3,
            outer_margin: 2,
            own_inner: 50,
            own_outer: 30,
            opponent_inner: 45,
            opponent_outer: 25,
        }
    }
}

/// Evaluate the board from the perspective of the given color.
///
/// Positive values favor `color`. Scores are only meaningful relative to
/// other boards scored in the same search.
#[must_use]
pub fn evaluate(board: &Board, color: Stone, weights: &EvalWeights) -> i64 {
    let opponent = color.opponent();

    let run_score = evaluate_runs(board, color, &weights.own_runs)
        - evaluate_runs(board, opponent, &weights.opponent_runs);

    let position_score = evaluate_positions(board, color, weights.own_inner, weights.own_outer, weights)
        - evaluate_positions(
            board,
            opponent,
            weights.opponent_inner,
            weights.opponent_outer,
            weights,
        );

    run_score + position_score
}

/// Run-length term for one color.
///
/// Each direction is measured independently from every stone, so a line is
/// seen from both of its ends and from each stone inside it.
fn evaluate_runs(board: &Board, color: Stone, table: &[i64; 4]) -> i64 {
    let Some(stones) = board.stones(color) else {
        return 0;
    };

    let mut score = 0;
    for pos in stones.iter_ones() {
        for dir in Direction::COMPASS {
            score += run_bonus(1 + count_consecutive(board, pos, color, dir), table);
        }
    }
    score
}

#[inline]
fn run_bonus(len: u8, table: &[i64; 4]) -> i64 {
    match len {
        l if l >= 5 => table[0],
        4 => table[1],
        3 => table[2],
        2 => table[3],
        _ => 0,
    }
}

/// Flat center-control bonus for one color.
fn evaluate_positions(board: &Board, color: Stone, inner: i64, outer: i64, weights: &EvalWeights) -> i64 {
    let Some(stones) = board.stones(color) else {
        return 0;
    };

    stones
        .iter_ones()
        .map(|pos| {
            if in_zone(pos, weights.inner_margin) {
                inner
            } else if in_zone(pos, weights.outer_margin) {
                outer
            } else {
                0
            }
        })
        .sum()
}

/// Cell lies at least `margin` cells away from every edge.
#[inline]
fn in_zone(pos: Pos, margin: u8) -> bool {
    let lo = margin;
    let hi = (BOARD_SIZE as u8).saturating_sub(1 + margin);
    (lo..=hi).contains(&pos.row) && (lo..=hi).contains(&pos.col)
}
