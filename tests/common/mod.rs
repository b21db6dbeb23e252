// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use dp_drills::RecurrenceMemo;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Best value over every subset of the first `item_count` items.
///
/// Exponential; keep `item_count` small.
pub fn brute_force_knapsack(
    item_count: usize,
    capacity: usize,
    weights: &[usize],
    values: &[u64],
) -> u64 {
    assert!(item_count < 20, "brute force is exponential");
    (0u32..1 << item_count)
        .filter_map(|mask| {
            let chosen = (0..item_count).filter(|i| mask & (1 << i) != 0);
            let (weight, value) = chosen.fold((0usize, 0u64), |(w, v), i| {
                (w + weights[i], v + values[i])
            });
            (weight <= capacity).then_some(value)
        })
        .max()
        .unwrap_or(0)
}

/// A random knapsack instance: `(weights, values)` of `len` items.
pub fn random_items(rng: &mut StdRng, len: usize) -> (Vec<usize>, Vec<u64>) {
    let weights = (0..len).map(|_| rng.gen_range(0..12)).collect();
    let values = (0..len).map(|_| rng.gen_range(0..100)).collect();
    (weights, values)
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A memo test double that counts every lookup and store per index.
#[derive(Debug, Default)]
pub struct CountingMemo {
    pub entries: HashMap<u64, u64>,
    pub lookups: HashMap<u64, usize>,
    pub stores: HashMap<u64, usize>,
}

impl CountingMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_stores(&self) -> usize {
        self.stores.values().sum()
    }

    pub fn total_lookups(&self) -> usize {
        self.lookups.values().sum()
    }
}

impl RecurrenceMemo for CountingMemo {
    fn lookup(&mut self, index: u64) -> Option<u64> {
        *self.lookups.entry(index).or_default() += 1;
        self.entries.get(&index).copied()
    }

    fn store(&mut self, index: u64, value: u64) {
        *self.stores.entry(index).or_default() += 1;
        self.entries.entry(index).or_insert(value);
    }
}
