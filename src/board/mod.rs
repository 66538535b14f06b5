//! Board representation for Gomoku

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Stone colors.
///
/// Black is side A (`+1`) and moves first; White is side B (`-1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Signed cell value: 0 empty, +1 black, -1 white.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Stone::Empty => 0,
            Stone::Black => 1,
            Stone::White => -1,
        }
    }

    /// Inverse of [`Stone::sign`]. Any positive value is Black, any negative is White.
    #[inline]
    pub fn from_sign(value: i8) -> Stone {
        match value.signum() {
            1 => Stone::Black,
            -1 => Stone::White,
            _ => Stone::Empty,
        }
    }

    /// Character used by the text board format.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }
}

impl std::str::FromStr for Stone {
    type Err = crate::error::ParseNameError;

    /// Accepts `black`/`white` and the board symbols `x`/`o`, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Stone::Black),
            "white" | "w" | "o" => Ok(Stone::White),
            _ => Err(crate::error::ParseNameError {
                kind: "side",
                value: s.to_string(),
            }),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Center cell of the board.
    #[inline]
    pub fn center() -> Self {
        let mid = (BOARD_SIZE / 2) as u8;
        Self { row: mid, col: mid }
    }

    /// Build a position from signed coordinates, `None` when off the board.
    #[inline]
    pub fn checked(row: i32, col: i32) -> Option<Self> {
        if Self::is_valid(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Step `steps` cells along `dir`, `None` when that leaves the board.
    #[inline]
    pub fn offset(self, dir: Direction, steps: i32) -> Option<Self> {
        Self::checked(
            i32::from(self.row) + i32::from(dir.dr) * steps,
            i32::from(self.col) + i32::from(dir.dc) * steps,
        )
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A line axis. The opposite traversal is the same axis negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    pub const HORIZONTAL: Direction = Direction { dr: 0, dc: 1 };
    pub const VERTICAL: Direction = Direction { dr: 1, dc: 0 };
    pub const DIAGONAL: Direction = Direction { dr: 1, dc: 1 };
    pub const ANTI_DIAGONAL: Direction = Direction { dr: 1, dc: -1 };

    /// The four canonical axes.
    pub const AXES: [Direction; 4] = [
        Direction::VERTICAL,
        Direction::HORIZONTAL,
        Direction::DIAGONAL,
        Direction::ANTI_DIAGONAL,
    ];

    /// Full compass: the four axes and their reverses.
    pub const COMPASS: [Direction; 8] = [
        Direction { dr: -1, dc: -1 },
        Direction { dr: -1, dc: 0 },
        Direction { dr: -1, dc: 1 },
        Direction { dr: 0, dc: -1 },
        Direction { dr: 0, dc: 1 },
        Direction { dr: 1, dc: -1 },
        Direction { dr: 1, dc: 0 },
        Direction { dr: 1, dc: 1 },
    ];

    #[inline]
    pub const fn reversed(self) -> Direction {
        Direction {
            dr: -self.dr,
            dc: -self.dc,
        }
    }
}
