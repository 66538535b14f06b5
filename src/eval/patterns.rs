//! Tactical pattern recognition for hypothetical placements.
//!
//! All checks answer "what would placing `side` at `pos` create?" without
//! mutating the board: the origin cell is read as a `side` stone by the
//! line scanner. Each check ORs its condition across the four axes, except
//! [`has_double_open_three`] which needs two axes at once.

use serde::{Deserialize, Serialize};

use super::line::{count_through_gaps, is_open_at_ends, run_length, Run};
use crate::board::{Board, Direction, Pos, Stone};
use crate::error::ConfigError;
use crate::rules::WIN_LENGTH;

pub use crate::rules::is_terminal_win;

/// What a placement produces along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisProfile {
    /// Contiguous run through the origin
    pub run: Run,
    /// Cells one run-length from the origin on both sides are on the board and empty
    pub open: bool,
    /// Same-side stones reachable through empty gaps, origin included
    pub gapped: u8,
}

/// Per-axis scan of one hypothetical placement.
///
/// Scanning once and deriving every pattern from the result keeps move
/// ordering cheap; the free functions below use the same scan so both
/// paths agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementProfile {
    pub axes: [AxisProfile; 4],
}

impl PlacementProfile {
    pub fn scan(board: &Board, pos: Pos, side: Stone) -> Self {
        let mut axes = [AxisProfile::default(); 4];
        for (axis, dir) in axes.iter_mut().zip(Direction::AXES) {
            let run = run_length(board, pos, side, dir);
            *axis = AxisProfile {
                run,
                open: is_open_at_ends(board, pos, dir, run),
                gapped: 1
                    + count_through_gaps(board, pos, side, dir)
                    + count_through_gaps(board, pos, side, dir.reversed()),
            };
        }
        Self { axes }
    }

    /// Any axis with a run of at least `min_len`, open at both ends if required.
    #[inline]
    pub fn has_run(&self, min_len: u8, require_open: bool) -> bool {
        self.axes
            .iter()
            .any(|a| a.run.len() >= min_len && (!require_open || a.open))
    }

    /// Number of axes carrying an open run of at least `min_len`.
    #[inline]
    pub fn open_run_axes(&self, min_len: u8) -> usize {
        self.axes
            .iter()
            .filter(|a| a.run.len() >= min_len && a.open)
            .count()
    }

    #[inline]
    pub fn has_jump(&self, min_len: u8) -> bool {
        self.axes.iter().any(|a| a.gapped >= min_len)
    }
}

/// Does placing `side` at `pos` make a run of at least `min_length`?
///
/// With `require_open` the run must also be extendable at both ends; without
/// it any run counts (a five wins whether or not its ends are blocked).
pub fn has_open_run(board: &Board, pos: Pos, side: Stone, min_length: u8, require_open: bool) -> bool {
    PlacementProfile::scan(board, pos, side).has_run(min_length, require_open)
}

/// Split formations such as `X_XX`: counts `side` stones along an axis,
/// skipping empties and stopping hard at an opponent stone.
pub fn has_jump_pattern(board: &Board, pos: Pos, side: Stone, min_length: u8) -> bool {
    PlacementProfile::scan(board, pos, side).has_jump(min_length)
}

/// Open threes on at least two different axes from a single placement.
pub fn has_double_open_three(board: &Board, pos: Pos, side: Stone) -> bool {
    PlacementProfile::scan(board, pos, side).open_run_axes(3) >= 2
}

/// Placing `side` at `pos` completes five or more in a row.
#[inline]
pub fn makes_five(board: &Board, pos: Pos, side: Stone) -> bool {
    has_open_run(board, pos, side, WIN_LENGTH, false)
}

/// Point weights for move ordering, in strict priority order.
///
/// The contract is the ordering, not the magnitudes: each weight must exceed
/// the sum of every weight below it so no pile of minor hits outranks a
/// single major one. Offensive weights sit just above their defensive twins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreatWeights {
    pub five: i64,
    pub block_five: i64,
    pub open_four: i64,
    pub block_open_four: i64,
    pub double_open_three: i64,
    pub block_double_open_three: i64,
    pub open_three: i64,
    pub block_open_three: i64,
    pub jump_three: i64,
    pub block_jump_three: i64,
    pub open_two: i64,
    pub block_open_two: i64,
}

impl Default for ThreatWeights {
    fn default() -> Self {
        Self {
            five: 2_048_000,
            block_five: 1_024_000,
            open_four: 512_000,
            block_open_four: 256_000,
            double_open_three: 128_000,
            block_double_open_three: 64_000,
            open_three: 32_000,
            block_open_three: 16_000,
            jump_three: 8_000,
            block_jump_three: 4_000,
            open_two: 2_000,
            block_open_two: 1_000,
        }
    }
}

impl ThreatWeights {
    /// Weights from highest to lowest priority, with their field names.
    pub fn ladder(&self) -> [(&'static str, i64); 12] {
        [
            ("five", self.five),
            ("block_five", self.block_five),
            ("open_four", self.open_four),
            ("block_open_four", self.block_open_four),
            ("double_open_three", self.double_open_three),
            ("block_double_open_three", self.block_double_open_three),
            ("open_three", self.open_three),
            ("block_open_three", self.block_open_three),
            ("jump_three", self.jump_three),
            ("block_jump_three", self.block_jump_three),
            ("open_two", self.open_two),
            ("block_open_two", self.block_open_two),
        ]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ladder = self.ladder();
        if let Some(&(field, _)) = ladder.iter().find(|(_, w)| *w <= 0) {
            return Err(ConfigError::Invalid {
                field,
                reason: "threat weights must be positive".to_string(),
            });
        }

        for (i, &(name, weight)) in ladder.iter().enumerate() {
            let below: i64 = ladder[i + 1..].iter().map(|(_, w)| w).sum();
            if weight <= below {
                return Err(ConfigError::WeightOrdering { higher: name });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, stones: &[(u8, u8)], color: Stone) {
        for &(r, c) in stones {
            board.place_stone(Pos::new(r, c), color);
        }
    }

    #[test]
    fn test_open_three_detection() {
        let mut board = Board::new();
        place(&mut board, &[(7, 6), (7, 7)], Stone::Black);

        let pos = Pos::new(7, 8);
        assert!(has_open_run(&board, pos, Stone::Black, 3, true));
        assert!(!has_open_run(&board, pos, Stone::Black, 4, false));
        // The opponent gets nothing from the same cell
        assert!(!has_open_run(&board, pos, Stone::White, 2, false));
    }

    #[test]
    fn test_blocked_three_is_not_open() {
        let mut board = Board::new();
        place(&mut board, &[(7, 6), (7, 7)], Stone::Black);
        board.place_stone(Pos::new(7, 5), Stone::White);

        let pos = Pos::new(7, 8);
        assert!(!has_open_run(&board, pos, Stone::Black, 3, true));
        assert!(has_open_run(&board, pos, Stone::Black, 3, false));
    }

    #[test]
    fn test_five_counts_even_when_blocked() {
        let mut board = Board::new();
        place(&mut board, &[(2, 0), (2, 1), (2, 2), (2, 3)], Stone::White);
        board.place_stone(Pos::new(2, 5), Stone::Black);

        assert!(makes_five(&board, Pos::new(2, 4), Stone::White));
        assert!(!has_open_run(&board, Pos::new(2, 4), Stone::White, 5, true));
        assert!(!makes_five(&board, Pos::new(2, 4), Stone::Black));
    }

    #[test]
    fn test_jump_pattern_skips_gap() {
        let mut board = Board::new();
        // X _ [X] X  along the diagonal
        place(&mut board, &[(4, 4), (7, 7)], Stone::Black);

        let pos = Pos::new(6, 6);
        assert!(has_jump_pattern(&board, pos, Stone::Black, 3));
        assert!(!has_open_run(&board, pos, Stone::Black, 3, false));
    }

    #[test]
    fn test_jump_pattern_stops_at_opponent() {
        let mut board = Board::new();
        place(&mut board, &[(4, 4), (7, 7)], Stone::Black);
        board.place_stone(Pos::new(5, 5), Stone::White);

        assert!(!has_jump_pattern(&board, Pos::new(6, 6), Stone::Black, 3));
    }

    #[test]
    fn test_double_open_three() {
        let mut board = Board::new();
        // Horizontal pair and vertical pair meeting at (7,7)
        place(&mut board, &[(7, 5), (7, 6), (5, 7), (6, 7)], Stone::Black);

        assert!(has_double_open_three(&board, Pos::new(7, 7), Stone::Black));
        assert!(!has_double_open_three(&board, Pos::new(7, 7), Stone::White));

        // Blocking one axis leaves a single open three
        board.place_stone(Pos::new(4, 7), Stone::White);
        assert!(!has_double_open_three(&board, Pos::new(7, 7), Stone::Black));
        assert!(has_open_run(&board, Pos::new(7, 7), Stone::Black, 3, true));
    }

    #[test]
    fn test_classifier_does_not_mutate() {
        let mut board = Board::new();
        place(&mut board, &[(7, 6), (7, 7)], Stone::Black);
        let before = board.clone();
        let _ = PlacementProfile::scan(&board, Pos::new(7, 8), Stone::White);
        let _ = has_double_open_three(&board, Pos::new(7, 8), Stone::Black);
        assert_eq!(board, before);
    }

    #[test]
    fn test_default_weights_dominate() {
        let weights = ThreatWeights::default();
        assert!(weights.validate().is_ok());

        let ladder = weights.ladder();
        for pair in ladder.windows(2) {
            assert!(pair[0].1 > pair[1].1, "{} must outrank {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_weight_ordering_violation_rejected() {
        // 20_000 no longer covers block_open_three plus everything below it
        let weights = ThreatWeights {
            open_three: 20_000,
            ..ThreatWeights::default()
        };
        match weights.validate() {
            Err(ConfigError::WeightOrdering { higher }) => assert_eq!(higher, "open_three"),
            other => panic!("expected ordering error, got {other:?}"),
        }
    }
}
