// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are owned by whatever performs the work (a [`MemoTable`], a
//! solver call) and are incremented as cells are filled or the memo is consulted.
//!
//! [`MemoTable`]: crate::memo::MemoTable

use serde::Serialize;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Table cells written by a tabulating solver.
    CellsFilled,
    /// Memo lookups that found a stored value.
    CacheHits,
    /// Memo lookups that found nothing.
    CacheMisses,
    /// Recurrence values actually computed (and then stored).
    Computations,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    /// Increment the specified counter by `amount`, saturating.
    pub fn add(&mut self, counter: Counters, amount: u64) {
        let slot = &mut self.stats[counter as usize];
        *slot = slot.saturating_add(amount);
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Reset every counter to zero.
    pub fn reset(&mut self) {
        self.stats = [0; Counters::COUNT];
    }

    /// Named snapshot of the non-zero counters, in declaration order.
    pub fn snapshot(&self) -> Vec<CounterValue> {
        Counters::iter()
            .filter(|&counter| self.get(counter) > 0)
            .map(|counter| CounterValue {
                name: counter.into(),
                value: self.get(counter),
            })
            .collect()
    }
}

/// One entry of [`Statistics::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterValue {
    pub name: &'static str,
    pub value: u64,
}
