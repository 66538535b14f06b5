//! Scripted opening moves.
//!
//! Each line is a short sequence of cells, written as offsets from the
//! board center. At engine ply `n` the book walks its lines in order and
//! plays the `n`-th cell of the first line that is long enough and whose
//! cell is still empty.

use crate::board::{Board, Pos};

/// Offset `(dr, dc)` from the center.
pub type BookMove = (i8, i8);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningBook {
    lines: Vec<Vec<BookMove>>,
}

impl OpeningBook {
    pub fn new(lines: Vec<Vec<BookMove>>) -> Self {
        Self { lines }
    }

    /// Center first, then the center with one adjacent reply.
    pub fn standard() -> Self {
        Self::new(vec![
            vec![(0, 0)],
            vec![(0, 0), (0, 1)],
            vec![(0, 0), (1, 1)],
            vec![(0, 0), (-1, 1)],
            vec![(0, 0), (1, 0)],
            vec![(0, 0), (-1, 0)],
            vec![(0, 0), (0, -1)],
        ])
    }

    /// Longest line, i.e. the last ply at which the book can still answer.
    pub fn depth(&self) -> usize {
        self.lines.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn lookup(&self, board: &Board, ply: usize) -> Option<Pos> {
        let center = Pos::center();
        self.lines
            .iter()
            .filter_map(|line| line.get(ply))
            .filter_map(|&(dr, dc)| {
                Pos::checked(
                    i32::from(center.row) + i32::from(dr),
                    i32::from(center.col) + i32::from(dc),
                )
            })
            .find(|&pos| board.is_empty(pos))
    }
}

impl Default for OpeningBook {
    fn default() -> Self {
        Self::standard()
    }
}
