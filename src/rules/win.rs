//! Win condition: five or more stones in a row along any axis.
//!
//! Overlines (six or more) also win. The engine's internal game-over test
//! and [`GameState`](crate::game::GameState) both go through this module so
//! they always agree on the rule.

use crate::board::{Board, Direction, Pos, Stone};
use crate::eval::line::run_length;

/// Stones needed in a row to win.
pub const WIN_LENGTH: u8 = 5;

/// Fast five-in-a-row check through a specific stone.
///
/// Only checks the 4 axes through `pos`. Returns false if `pos` does not
/// hold a `color` stone.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty || board.get(pos) != color {
        return false;
    }
    Direction::AXES
        .iter()
        .any(|&dir| run_length(board, pos, color, dir).len() >= WIN_LENGTH)
}

/// Find the positions of a winning line if one exists.
///
/// Each run is walked once from its first stone, so the scan is independent
/// of which end a line is approached from.
pub fn find_five_positions(board: &Board, stone: Stone) -> Option<Vec<Pos>> {
    let stones = board.stones(stone)?;

    for pos in stones.iter_ones() {
        for dir in Direction::AXES {
            // Not the start of this run
            if pos
                .offset(dir.reversed(), 1)
                .is_some_and(|prev| board.get(prev) == stone)
            {
                continue;
            }

            let mut line = vec![pos];
            let mut step = 1;
            while let Some(next) = pos.offset(dir, step) {
                if board.get(next) != stone {
                    break;
                }
                line.push(next);
                step += 1;
            }

            if line.len() >= WIN_LENGTH as usize {
                return Some(line);
            }
        }
    }
    None
}

/// Check if there's 5+ in a row for the given color
#[inline]
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    find_five_positions(board, stone).is_some()
}

/// The side holding a five, if any. Black is reported first if both do.
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&stone| has_five_in_row(board, stone))
}

/// True iff either side has an unconditional run of five or more anywhere.
#[inline]
pub fn is_terminal_win(board: &Board) -> bool {
    check_winner(board).is_some()
}
