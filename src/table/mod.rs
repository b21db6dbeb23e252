// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The knapsack value table.
//!
//! A `(item_count + 1) × (capacity + 1)` grid stored as one contiguous
//! arena of rows; cell `(i, w)` lives at `i * (capacity + 1) + w`.
//!
//! Cell `(i, w)` holds the best value reachable with the first `i` items
//! and total weight at most `w`. Row 0 and column 0 are always zero.

use crate::error::{DpError, DpResult};
use crate::validation::filled_vec;

/// Bottom-up table of optimal values.
///
/// Only the solver in [`crate::knapsack`] writes cells; once returned to a
/// caller the table is read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueTable {
    item_count: usize,
    capacity: usize,
    cells: Vec<u64>,
}

impl ValueTable {
    /// Allocate a zero-filled table, rejecting dimensions whose cell count overflows.
    pub(crate) fn zeroed(item_count: usize, capacity: usize) -> DpResult<Self> {
        let len = item_count
            .checked_add(1)
            .zip(capacity.checked_add(1))
            .and_then(|(rows, columns)| rows.checked_mul(columns))
            .ok_or_else(|| {
                DpError::invalid(
                    "capacity",
                    format!(
                        "table of {} items by capacity {} is too large",
                        item_count, capacity
                    ),
                )
            })?;

        Ok(Self {
            item_count,
            capacity,
            cells: filled_vec("capacity", len, 0)?,
        })
    }

    #[inline]
    fn index(&self, item: usize, weight: usize) -> usize {
        item * (self.capacity + 1) + weight
    }

    /// Write cell `(item, weight)`. Callers stay in bounds.
    #[inline]
    pub(crate) fn set(&mut self, item: usize, weight: usize, value: u64) {
        debug_assert!(item <= self.item_count && weight <= self.capacity);
        let index = self.index(item, weight);
        self.cells[index] = value;
    }

    /// Read cell `(item, weight)` without the bounds check on the coordinates.
    #[inline]
    pub(crate) fn at(&self, item: usize, weight: usize) -> u64 {
        debug_assert!(item <= self.item_count && weight <= self.capacity);
        self.cells[self.index(item, weight)]
    }

    /// Number of items the table covers (rows minus one).
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Weight bound the table covers (columns minus one).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cell `(item, weight)`, or `None` outside the table.
    pub fn get(&self, item: usize, weight: usize) -> Option<u64> {
        if item <= self.item_count && weight <= self.capacity {
            Some(self.at(item, weight))
        } else {
            None
        }
    }

    /// The whole row for the first `item` items.
    pub fn row(&self, item: usize) -> Option<&[u64]> {
        if item > self.item_count {
            return None;
        }
        let start = self.index(item, 0);
        Some(&self.cells[start..start + self.capacity + 1])
    }

    /// Iterate rows from item 0 to `item_count`.
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        self.cells.chunks_exact(self.capacity + 1)
    }

    /// The bottom-right cell: the optimum over all items and the full capacity.
    pub fn optimum(&self) -> u64 {
        self.at(self.item_count, self.capacity)
    }

    /// Check the table's structural invariants.
    ///
    /// Row 0 and column 0 are zero, each column is non-decreasing as items are
    /// added, and each row is non-decreasing as capacity grows.
    pub fn is_consistent(&self) -> bool {
        let borders_zero = self.row(0).is_some_and(|row| row.iter().all(|&v| v == 0))
            && (0..=self.item_count).all(|i| self.at(i, 0) == 0);

        borders_zero
            && (1..=self.item_count).all(|i| {
                (0..=self.capacity).all(|w| {
                    self.at(i, w) >= self.at(i - 1, w)
                        && (w == 0 || self.at(i, w) >= self.at(i, w - 1))
                })
            })
    }
}
