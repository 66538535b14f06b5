//! Per-side cell sets packed into machine words.
//!
//! Cell `i` (row-major index) lives in word `i / 64`, bit `i % 64`, so
//! walking words low to high and bits low to high visits cells in row-major
//! order. Padding bits past the last cell stay zero, which keeps derived
//! `Eq`/`Hash` exact for cache keys.

use std::ops::BitOr;

use super::{Pos, TOTAL_CELLS};

const WORDS: usize = TOTAL_CELLS.div_ceil(64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    words: [u64; WORDS],
}

/// Word index and bit mask of a cell.
#[inline]
fn locate(pos: Pos) -> (usize, u64) {
    let idx = pos.to_index();
    (idx / 64, 1u64 << (idx % 64))
}

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard { words: [0; WORDS] };

    pub const fn new() -> Self {
        Self::EMPTY
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let (w, mask) = locate(pos);
        self.words[w] |= mask;
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let (w, mask) = locate(pos);
        self.words[w] &= !mask;
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let (w, mask) = locate(pos);
        self.words[w] & mask != 0
    }

    /// Number of cells in the set.
    #[inline]
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Set cells in row-major order.
    pub fn iter_ones(&self) -> Ones {
        Ones {
            words: self.words,
            next_word: 0,
        }
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Bitboard) -> Bitboard {
        let mut words = self.words;
        for (w, r) in words.iter_mut().zip(rhs.words) {
            *w |= r;
        }
        Bitboard { words }
    }
}

/// Row-major iterator over the cells of a [`Bitboard`].
pub struct Ones {
    words: [u64; WORDS],
    next_word: usize,
}

impl Iterator for Ones {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        while let Some(word) = self.words.get_mut(self.next_word) {
            if *word == 0 {
                self.next_word += 1;
                continue;
            }
            let bit = word.trailing_zeros() as usize;
            *word &= *word - 1;
            return Some(Pos::from_index(self.next_word * 64 + bit));
        }
        None
    }
}
