//! Line scanning primitives.
//!
//! Every pattern check and the evaluator are built from two operations:
//! measuring the run of same-side stones through a cell along one axis,
//! and asking whether the cells one run-length away from that cell on
//! either side are free.
//!
//! The origin cell is always treated as if `side` occupied it, so callers
//! can ask about a hypothetical placement without touching the board.

use crate::board::{Board, Direction, Pos, Stone};

/// A contiguous run through an origin cell along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Run {
    /// Same-side stones beyond the origin in the axis direction.
    pub forward: u8,
    /// Same-side stones beyond the origin in the reversed direction.
    pub backward: u8,
}

impl Run {
    /// Total run length including the origin cell (always >= 1).
    #[inline]
    pub fn len(&self) -> u8 {
        1 + self.forward + self.backward
    }
}

/// Consecutive `side` stones starting one step beyond `pos` along `dir`.
#[inline]
pub fn count_consecutive(board: &Board, pos: Pos, side: Stone, dir: Direction) -> u8 {
    let mut count = 0u8;
    let mut r = i32::from(pos.row) + i32::from(dir.dr);
    let mut c = i32::from(pos.col) + i32::from(dir.dc);
    while board.in_bounds(r, c) && board.get_at(r, c) == side {
        count += 1;
        r += i32::from(dir.dr);
        c += i32::from(dir.dc);
    }
    count
}

/// Run of `side` stones through `pos` along the axis `dir`, counting `pos`.
#[inline]
pub fn run_length(board: &Board, pos: Pos, side: Stone, dir: Direction) -> Run {
    Run {
        forward: count_consecutive(board, pos, side, dir),
        backward: count_consecutive(board, pos, side, dir.reversed()),
    }
}

/// True iff the cells `run.len()` steps from `pos` in both directions of
/// the axis are on the board and empty.
///
/// The distance is measured from `pos`, not from the far end of the run, so
/// for an origin in the middle of a run the checked cells can lie past the
/// stones on that side.
#[inline]
pub fn is_open_at_ends(board: &Board, pos: Pos, dir: Direction, run: Run) -> bool {
    let steps = i32::from(run.len());
    let free = |d: Direction| pos.offset(d, steps).is_some_and(|cell| board.is_empty(cell));
    free(dir) && free(dir.reversed())
}

/// Same-side stones along `dir` from `pos`, skipping over empty cells and
/// stopping at the first opponent stone or the edge.
#[inline]
pub fn count_through_gaps(board: &Board, pos: Pos, side: Stone, dir: Direction) -> u8 {
    let mut count = 0u8;
    let mut step = 1;
    while let Some(cell) = pos.offset(dir, step) {
        match board.get(cell) {
            s if s == side => count += 1,
            Stone::Empty => {}
            _ => break,
        }
        step += 1;
    }
    count
}
