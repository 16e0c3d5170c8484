//! Transposition table
//!
//! A fixed-capacity, direct-mapped cache from search key to the result of a
//! previous search of that node. Each bucket holds one entry and a store
//! always overwrites it (last write wins). The full 64-bit key is kept in the
//! entry and compared on lookup, so two keys sharing a bucket never read each
//! other's values.
//!
//! Values produced inside an alpha-beta window are not always exact: a node
//! that failed high only proves a lower bound, one that failed low only an
//! upper bound. The [`Bound`] tag records which, and [`TtEntry::usable`]
//! decides whether the value can stand in for a search with a given window.

use tracing::trace;

/// What a stored value proves about the node's true minimax value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The true value
    Exact,
    /// True value is at least the stored value (search failed high)
    Lower,
    /// True value is at most the stored value (search failed low)
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    pub key: u64,
    pub depth: u8,
    pub value: i32,
    pub bound: Bound,
}

impl TtEntry {
    /// The stored value, if it decides a search with window `(alpha, beta)`
    pub fn usable(&self, alpha: i32, beta: i32) -> Option<i32> {
        match self.bound {
            Bound::Exact => Some(self.value),
            Bound::Lower if self.value >= beta => Some(self.value),
            Bound::Upper if self.value <= alpha => Some(self.value),
            _ => None,
        }
    }
}

/// Table usage counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TtStats {
    pub hits: u64,
    pub misses: u64,
    pub stores: u64,
}

pub struct TranspositionTable {
    entries: Vec<Option<TtEntry>>,
    mask: usize,
    stats: TtStats,
}

impl TranspositionTable {
    /// Table with at least `capacity` buckets (rounded up to a power of two)
    pub fn new(capacity: usize) -> Self {
        let size = capacity.max(1).next_power_of_two();
        TranspositionTable {
            entries: vec![None; size],
            mask: size - 1,
            stats: TtStats::default(),
        }
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    /// Entry for `key` searched at least `requested_depth` plies deep
    pub fn lookup(&mut self, key: u64, requested_depth: u8) -> Option<TtEntry> {
        let found = self.entries[self.index(key)]
            .filter(|entry| entry.key == key && entry.depth >= requested_depth);
        match found {
            Some(_) => self.stats.hits += 1,
            None => self.stats.misses += 1,
        }
        found
    }

    /// Overwrite the bucket for `key`
    pub fn store(&mut self, key: u64, depth: u8, value: i32, bound: Bound) {
        let index = self.index(key);
        self.entries[index] = Some(TtEntry {
            key,
            depth,
            value,
            bound,
        });
        self.stats.stores += 1;
    }

    /// Drop every entry and reset the counters
    pub fn clear(&mut self) {
        trace!(occupied = self.len(), "clearing transposition table");
        self.entries.iter_mut().for_each(|slot| *slot = None);
        self.stats = TtStats::default();
    }

    /// Number of buckets
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Number of occupied buckets
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> TtStats {
        self.stats
    }
}
