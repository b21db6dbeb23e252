// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memo tables for top-down recurrences.
//!
//! A memo maps a non-negative index to a previously computed value. It grows
//! monotonically: entries are never removed, and storing under a key that is
//! already present leaves the original value in place.
//!
//! The [`RecurrenceMemo`] trait is the seam between a recurrence and its
//! cache. It is implemented for plain `HashMap`/`BTreeMap` memos and for
//! [`MemoTable`], which also counts hits, misses and computations.
//!
//! Memos are single-threaded: the lookup-then-store sequence is not atomic,
//! so sharing one across threads needs external locking.

pub mod fibonacci;

pub use fibonacci::{fib, fib_top_down, MAX_FIB_INDEX};

use std::collections::{BTreeMap, HashMap};

use crate::statistics::{Counters, Statistics};

/// Storage consulted by a memoized recurrence.
pub trait RecurrenceMemo {
    /// The value stored under `index`, if any.
    ///
    /// Takes `&mut self` so instrumented memos can count lookups.
    fn lookup(&mut self, index: u64) -> Option<u64>;

    /// Store `value` under `index` unless the index is already present.
    fn store(&mut self, index: u64, value: u64);
}

impl RecurrenceMemo for HashMap<u64, u64> {
    fn lookup(&mut self, index: u64) -> Option<u64> {
        self.get(&index).copied()
    }

    fn store(&mut self, index: u64, value: u64) {
        self.entry(index).or_insert(value);
    }
}

impl RecurrenceMemo for BTreeMap<u64, u64> {
    fn lookup(&mut self, index: u64) -> Option<u64> {
        self.get(&index).copied()
    }

    fn store(&mut self, index: u64, value: u64) {
        self.entry(index).or_insert(value);
    }
}

/// An ordered memo that records how it was used.
///
/// Reusing one `MemoTable` across several top-level calls is intended: later
/// calls start from everything earlier calls cached.
#[derive(Debug, Default, Clone)]
pub struct MemoTable {
    entries: BTreeMap<u64, u64>,
    statistics: Statistics,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value stored under `index`. Not counted as a lookup.
    pub fn get(&self, index: u64) -> Option<u64> {
        self.entries.get(&index).copied()
    }

    pub fn contains(&self, index: u64) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored indices in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.keys().copied()
    }

    /// Stored `(index, value)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.entries.iter().map(|(&k, &v)| (k, v))
    }

    /// Hit, miss and computation counts since creation.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

impl RecurrenceMemo for MemoTable {
    fn lookup(&mut self, index: u64) -> Option<u64> {
        let found = self.entries.get(&index).copied();
        self.statistics.increment(if found.is_some() {
            Counters::CacheHits
        } else {
            Counters::CacheMisses
        });
        found
    }

    fn store(&mut self, index: u64, value: u64) {
        if let std::collections::btree_map::Entry::Vacant(slot) = self.entries.entry(index) {
            slot.insert(value);
            self.statistics.increment(Counters::Computations);
        }
    }
}
