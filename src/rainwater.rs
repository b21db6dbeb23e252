// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trapped rainwater over a bar histogram.
//!
//! Water above bar `i` rises to `min(highest bar on its left, highest bar on
//! its right)`; the captured amount is that level minus the bar's height.

use crate::error::{DpError, DpResult};

/// Total water captured by `heights`, in one pass with two pointers.
///
/// The lower side bounds the water at its pointer, so that side advances
/// and its running maximum is final for the bar it passes. Fails with
/// [`DpError::Overflow`] when the total does not fit in a `u64`.
pub fn captured_water(heights: &[u64]) -> DpResult<u64> {
    if heights.len() < 3 {
        return Ok(0);
    }

    let mut total: u64 = 0;
    let (mut left, mut right) = (0, heights.len() - 1);
    let (mut left_bound, mut right_bound) = (0, 0);

    while left < right {
        if heights[left] <= heights[right] {
            left_bound = left_bound.max(heights[left]);
            total = add_water(total, left_bound - heights[left])?;
            left += 1;
        } else {
            right_bound = right_bound.max(heights[right]);
            total = add_water(total, right_bound - heights[right])?;
            right -= 1;
        }
    }
    Ok(total)
}

fn add_water(total: u64, water: u64) -> DpResult<u64> {
    total
        .checked_add(water)
        .ok_or_else(|| DpError::overflow("the captured water total"))
}
