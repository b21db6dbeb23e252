// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! 0/1 knapsack by tabulation.
//!
//! Items arrive as two parallel sequences: `weights[i]` and `values[i]`
//! describe item `i`. Only the first `item_count` entries are considered.
//!
//! # Example
//!
//! ```
//! use dp_drills::knapsack::solve;
//!
//! // Ring, earrings, necklace.
//! let best = solve(3, 5, &[1, 3, 5], &[250, 300, 500]).unwrap();
//! assert_eq!(best, 550);
//! ```

pub mod selection;

pub use selection::{select_items, Selection};

use tracing::{debug, trace};

use crate::error::{DpError, DpResult};
use crate::statistics::{Counters, Statistics};
use crate::table::ValueTable;
use crate::validation::filled_vec;

/// Validate the call before any allocation happens.
fn check_inputs(item_count: usize, weights: &[usize], values: &[u64]) -> DpResult<()> {
    if weights.len() != values.len() {
        return Err(DpError::invalid(
            "values",
            format!(
                "length {} does not match {} weights",
                values.len(),
                weights.len()
            ),
        ));
    }
    if item_count > weights.len() {
        return Err(DpError::invalid(
            "item_count",
            format!(
                "{} exceeds the {} items supplied",
                item_count,
                weights.len()
            ),
        ));
    }
    // Every cell is bounded by the sum of the values considered, so this
    // one check rules out overflow inside the fill loops.
    values[..item_count]
        .iter()
        .try_fold(0u64, |total, &v| total.checked_add(v))
        .ok_or_else(|| DpError::overflow("the sum of item values"))?;
    Ok(())
}

/// Best total value of a subset of the first `item_count` items weighing at most `capacity`.
pub fn solve(
    item_count: usize,
    capacity: usize,
    weights: &[usize],
    values: &[u64],
) -> DpResult<u64> {
    check_inputs(item_count, weights, values)?;
    if item_count == 0 || capacity == 0 {
        return Ok(0);
    }
    Ok(solve_table(item_count, capacity, weights, values)?.optimum())
}

/// The optimum together with the items that achieve it.
///
/// Like [`solve`], an empty problem (no items or no capacity) allocates nothing.
pub fn solve_with_selection(
    item_count: usize,
    capacity: usize,
    weights: &[usize],
    values: &[u64],
) -> DpResult<Selection> {
    check_inputs(item_count, weights, values)?;
    if item_count == 0 || capacity == 0 {
        return Ok(Selection {
            value: 0,
            weight: 0,
            items: Vec::new(),
        });
    }
    let table = solve_table(item_count, capacity, weights, values)?;
    select_items(&table, weights)
}

/// Build and return the full [`ValueTable`].
pub fn solve_table(
    item_count: usize,
    capacity: usize,
    weights: &[usize],
    values: &[u64],
) -> DpResult<ValueTable> {
    let mut statistics = Statistics::new();
    solve_table_with_statistics(item_count, capacity, weights, values, &mut statistics)
}

/// [`solve_table`], counting filled cells into `statistics`.
pub fn solve_table_with_statistics(
    item_count: usize,
    capacity: usize,
    weights: &[usize],
    values: &[u64],
    statistics: &mut Statistics,
) -> DpResult<ValueTable> {
    check_inputs(item_count, weights, values)?;
    let mut table = ValueTable::zeroed(item_count, capacity)?;
    debug!(item_count, capacity, "filling knapsack table");
    let row_cells = u64::try_from(capacity).unwrap_or(u64::MAX);

    for i in 1..=item_count {
        let weight = weights[i - 1];
        let value = values[i - 1];
        for w in 1..=capacity {
            let excluded = table.at(i - 1, w);
            let cell = if weight > w {
                excluded
            } else {
                excluded.max(value + table.at(i - 1, w - weight))
            };
            table.set(i, w, cell);
        }
        statistics.add(Counters::CellsFilled, row_cells);
        trace!(item = i, best = table.at(i, capacity), "row complete");
    }

    debug!(optimum = table.optimum(), "knapsack table complete");
    Ok(table)
}

/// Same result as [`solve`] using one row of `capacity + 1` cells.
///
/// Capacities are visited from high to low so that each item is read from the
/// previous row's values and therefore used at most once.
pub fn solve_rolling(
    item_count: usize,
    capacity: usize,
    weights: &[usize],
    values: &[u64],
) -> DpResult<u64> {
    check_inputs(item_count, weights, values)?;
    if item_count == 0 || capacity == 0 {
        return Ok(0);
    }
    let columns = capacity.checked_add(1).ok_or_else(|| {
        DpError::invalid("capacity", format!("{} is too large", capacity))
    })?;
    let mut row = filled_vec("capacity", columns, 0u64)?;
    debug!(item_count, capacity, "filling rolling knapsack row");

    for (&weight, &value) in weights[..item_count].iter().zip(&values[..item_count]) {
        if weight == 0 {
            // A weightless item always fits; the descending sweep below would
            // read its own freshly written cell.
            row.iter_mut().skip(1).for_each(|cell| *cell += value);
            continue;
        }
        for w in (weight..=capacity).rev() {
            row[w] = row[w].max(value + row[w - weight]);
        }
    }

    Ok(row[capacity])
}

#[cfg(test)]
mod tests {
    use super::*;

    const JEWELRY_WEIGHTS: [usize; 3] = [1, 3, 5];
    const JEWELRY_VALUES: [u64; 3] = [250, 300, 500];

    const SEVEN_WEIGHTS: [usize; 7] = [31, 10, 20, 19, 4, 3, 6];
    const SEVEN_VALUES: [u64; 7] = [70, 20, 39, 37, 7, 5, 10];

    #[test]
    fn test_jewelry() {
        assert_eq!(solve(3, 5, &JEWELRY_WEIGHTS, &JEWELRY_VALUES), Ok(550));
        assert_eq!(solve_rolling(3, 5, &JEWELRY_WEIGHTS, &JEWELRY_VALUES), Ok(550));
    }

    #[test]
    fn test_seven_items() {
        assert_eq!(solve(7, 50, &SEVEN_WEIGHTS, &SEVEN_VALUES), Ok(107));
        assert_eq!(solve_rolling(7, 50, &SEVEN_WEIGHTS, &SEVEN_VALUES), Ok(107));
    }

    #[test]
    fn test_zero_items_or_capacity() {
        assert_eq!(solve(0, 10, &[], &[]), Ok(0));
        assert_eq!(solve(3, 0, &JEWELRY_WEIGHTS, &JEWELRY_VALUES), Ok(0));
        assert_eq!(solve_rolling(0, 10, &[], &[]), Ok(0));
        assert_eq!(solve_rolling(3, 0, &JEWELRY_WEIGHTS, &JEWELRY_VALUES), Ok(0));
    }

    #[test]
    fn test_empty_problem_with_huge_capacity() {
        assert_eq!(solve(0, usize::MAX / 8, &[], &[]), Ok(0));
        assert_eq!(solve_rolling(0, usize::MAX / 8, &[], &[]), Ok(0));
        assert_eq!(solve(0, usize::MAX, &[], &[]), Ok(0));
    }

    #[test]
    fn test_selection_for_empty_problem() {
        let selection = solve_with_selection(0, usize::MAX, &[], &[]).unwrap();
        assert_eq!(selection.value, 0);
        assert!(selection.items.is_empty());

        let selection = solve_with_selection(3, 5, &JEWELRY_WEIGHTS, &JEWELRY_VALUES).unwrap();
        assert_eq!(selection.items, vec![0, 1]);
    }

    #[test]
    fn test_unallocatable_table_is_an_error() {
        let err = solve(1, usize::MAX / 8, &[1], &[1]).unwrap_err();
        assert!(err.is_invalid_argument());
        let err = solve_table(0, usize::MAX / 4, &[], &[]).unwrap_err();
        assert!(err.is_invalid_argument());
        let err = solve_rolling(1, usize::MAX / 4, &[1], &[1]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_single_item_too_heavy() {
        assert_eq!(solve(1, 4, &[5], &[100]), Ok(0));
        assert_eq!(solve_rolling(1, 4, &[5], &[100]), Ok(0));
    }

    #[test]
    fn test_item_count_prefix() {
        // Only the ring is considered.
        assert_eq!(solve(1, 5, &JEWELRY_WEIGHTS, &JEWELRY_VALUES), Ok(250));
        assert_eq!(solve_rolling(2, 5, &JEWELRY_WEIGHTS, &JEWELRY_VALUES), Ok(550));
    }

    #[test]
    fn test_weightless_item_counted_once() {
        assert_eq!(solve(2, 3, &[0, 2], &[5, 4]), Ok(9));
        assert_eq!(solve_rolling(2, 3, &[0, 2], &[5, 4]), Ok(9));
        // Column 0 stays zero in the table even with a weightless item.
        let table = solve_table(2, 3, &[0, 2], &[5, 4]).unwrap();
        assert_eq!(table.get(2, 0), Some(0));
        assert_eq!(table.get(1, 1), Some(5));
    }

    #[test]
    fn test_item_count_exceeds_lengths() {
        let err = solve(4, 5, &JEWELRY_WEIGHTS, &JEWELRY_VALUES).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(solve_rolling(4, 5, &JEWELRY_WEIGHTS, &JEWELRY_VALUES).is_err());
    }

    #[test]
    fn test_mismatched_lengths() {
        let err = solve(2, 5, &[1, 3, 5], &[250, 300]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_value_overflow_rejected() {
        let err = solve(2, 5, &[1, 1], &[u64::MAX, 1]).unwrap_err();
        assert_eq!(err, DpError::overflow("the sum of item values"));
        // Overflowing values beyond item_count are ignored.
        assert_eq!(solve(1, 5, &[1, 1], &[7, u64::MAX]), Ok(7));
    }

    #[test]
    fn test_table_is_consistent_and_counted() {
        let mut statistics = Statistics::new();
        let table = solve_table_with_statistics(
            7,
            50,
            &SEVEN_WEIGHTS,
            &SEVEN_VALUES,
            &mut statistics,
        )
        .unwrap();
        assert!(table.is_consistent());
        assert_eq!(table.optimum(), 107);
        assert_eq!(statistics.get(Counters::CellsFilled), 7 * 50);
    }
}
