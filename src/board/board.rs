//! Board structure: two bitboards plus bounds and neighborhood queries

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE};
use crate::error::ParseBoardError;

/// Game board.
///
/// Holds exactly the stones set by prior moves. Out-of-bounds queries
/// through [`Board::get_at`] read as empty so line scans need no edge
/// special-casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Build a board from the signed `{0, +1, -1}` grid view.
    pub fn from_grid(grid: &[[i8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (r, row) in grid.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                board.set(Pos::new(r as u8, c as u8), Stone::from_sign(value));
            }
        }
        board
    }

    /// Signed `{0, +1, -1}` grid view of the board.
    pub fn to_grid(&self) -> [[i8; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[0i8; BOARD_SIZE]; BOARD_SIZE];
        for pos in self.black.iter_ones() {
            grid[pos.row as usize][pos.col as usize] = 1;
        }
        for pos in self.white.iter_ones() {
            grid[pos.row as usize][pos.col as usize] = -1;
        }
        grid
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Get stone at signed coordinates; anything off the board is empty.
    #[inline]
    pub fn get_at(&self, row: i32, col: i32) -> Stone {
        match Pos::checked(row, col) {
            Some(pos) => self.get(pos),
            None => Stone::Empty,
        }
    }

    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        Pos::is_valid(row, col)
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Set a cell. `Stone::Empty` clears it.
    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        self.remove_stone(pos);
        self.place_stone(pos, stone);
    }

    /// Place a stone on an empty cell
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos) || stone == Stone::Empty);
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// True if any stone lies in the square of the given radius around `pos`
    /// (the center cell itself excluded).
    pub fn has_any_neighbor_within(&self, radius: u8, pos: Pos) -> bool {
        let radius = i32::from(radius);
        let (row, col) = (i32::from(pos.row), i32::from(pos.col));
        for r in (row - radius).max(0)..=(row + radius).min(BOARD_SIZE as i32 - 1) {
            for c in (col - radius).max(0)..=(col + radius).min(BOARD_SIZE as i32 - 1) {
                if r == row && c == col {
                    continue;
                }
                if self.get_at(r, c) != Stone::Empty {
                    return true;
                }
            }
        }
        false
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Bitboard of every occupied cell
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == BOARD_SIZE * BOARD_SIZE
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..BOARD_SIZE * BOARD_SIZE)
            .map(Pos::from_index)
            .filter(move |&pos| self.is_empty(pos))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..BOARD_SIZE {
            let line: String = (0..BOARD_SIZE)
                .map(|c| self.get(Pos::new(r as u8, c as u8)).symbol())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse the text format: one line per row, `.` empty, `X` black, `O` white.
    /// Spaces between cells and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let rows: Vec<&str> = s.lines().filter(|l| !l.trim().is_empty()).collect();
        if rows.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        for (r, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|ch| !ch.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowLength {
                    row: r,
                    len: cells.len(),
                });
            }
            for (c, ch) in cells.into_iter().enumerate() {
                let stone = match ch {
                    '.' | '+' | '_' => Stone::Empty,
                    'X' | 'x' | 'B' | 'b' => Stone::Black,
                    'O' | 'o' | 'W' | 'w' => Stone::White,
                    other => {
                        return Err(ParseBoardError::BadCell {
                            row: r,
                            col: c,
                            ch: other,
                        })
                    }
                };
                board.set(Pos::new(r as u8, c as u8), stone);
            }
        }
        Ok(board)
    }
}
