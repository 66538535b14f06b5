//! Result cache: exact position → previously chosen move.
//!
//! Keys are the full bitboards plus the side to move, so there are no hash
//! collisions to handle. The cache is bounded and never evicts: once it
//! holds `capacity` entries further inserts are ignored, and an existing
//! key is never overwritten.

use std::collections::HashMap;

use crate::board::{Bitboard, Board, Pos, Stone};

/// Exact identity of a position with a side to move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    black: Bitboard,
    white: Bitboard,
    to_move: Stone,
}

impl CacheKey {
    pub fn new(board: &Board, to_move: Stone) -> Self {
        Self {
            black: board.black,
            white: board.white,
            to_move,
        }
    }
}

/// Usage statistics for the result cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub capacity: usize,
    pub used: usize,
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug)]
pub struct ResultCache {
    entries: HashMap<CacheKey, Pos>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl ResultCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    pub fn probe(&mut self, key: &CacheKey) -> Option<Pos> {
        let found = self.entries.get(key).copied();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Store a move. Returns false when the key is already present or the
    /// cache is full.
    pub fn insert(&mut self, key: CacheKey, pos: Pos) -> bool {
        if self.is_full() || self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, pos);
        true
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            capacity: self.capacity,
            used: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}
