// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recovering which items make up the optimum.

use serde::Serialize;

use crate::error::{DpError, DpResult};
use crate::table::ValueTable;

/// The items chosen for an optimal packing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Total value of the chosen items (the table optimum).
    pub value: u64,
    /// Total weight of the chosen items, never above the table capacity.
    pub weight: usize,
    /// 0-based item indices, ascending.
    pub items: Vec<usize>,
}

/// Walk back from the bottom-right cell of `table`.
///
/// Item `i` is taken exactly when including it changed the cell, i.e.
/// `table[i][w] != table[i-1][w]`; the walk then continues at `w - weights[i-1]`.
/// `weights` must be the sequence the table was built from.
pub fn select_items(table: &ValueTable, weights: &[usize]) -> DpResult<Selection> {
    if weights.len() < table.item_count() {
        return Err(DpError::invalid(
            "weights",
            format!(
                "{} weights cannot describe a table of {} items",
                weights.len(),
                table.item_count()
            ),
        ));
    }

    let mut remaining = table.capacity();
    let mut items = Vec::new();
    for i in (1..=table.item_count()).rev() {
        if table.at(i, remaining) == table.at(i - 1, remaining) {
            continue;
        }
        let weight = weights[i - 1];
        if weight > remaining {
            return Err(DpError::invalid(
                "weights",
                format!("item {} does not match the table it was built from", i - 1),
            ));
        }
        items.push(i - 1);
        remaining -= weight;
    }
    items.reverse();

    Ok(Selection {
        value: table.optimum(),
        weight: table.capacity() - remaining,
        items,
    })
}
