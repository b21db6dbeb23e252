// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precondition checks for untrusted, signed input.
//!
//! The solvers take unsigned types, so negative values are unrepresentable
//! past this point. Callers holding signed data (the command line, foreign
//! callers) convert through these helpers and get
//! [`DpError::InvalidArgument`] instead of a silent clamp.

use crate::error::{DpError, DpResult};

/// Convert a signed value to `u64`, rejecting negatives.
pub fn non_negative(name: &'static str, value: i64) -> DpResult<u64> {
    u64::try_from(value)
        .map_err(|_| DpError::invalid(name, format!("must be non-negative, got {}", value)))
}

/// Convert a signed value to `usize`, rejecting negatives.
pub fn non_negative_usize(name: &'static str, value: i64) -> DpResult<usize> {
    let value = non_negative(name, value)?;
    usize::try_from(value)
        .map_err(|_| DpError::invalid(name, format!("{} does not fit in usize", value)))
}

/// Convert every entry of a signed sequence, reporting the first negative by index.
pub fn non_negative_all(name: &'static str, values: &[i64]) -> DpResult<Vec<u64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            u64::try_from(value).map_err(|_| {
                DpError::invalid(
                    name,
                    format!("entry {} must be non-negative, got {}", index, value),
                )
            })
        })
        .collect()
}

/// A vector of `len` copies of `fill`, or `InvalidArgument` naming `name`
/// when the allocation cannot be made.
pub(crate) fn filled_vec<T: Clone>(
    name: &'static str,
    len: usize,
    fill: T,
) -> DpResult<Vec<T>> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(len).map_err(|err| {
        DpError::invalid(name, format!("cannot allocate {} cells: {}", len, err))
    })?;
    cells.resize(len, fill);
    Ok(cells)
}

/// Like [`non_negative_all`], producing `usize` entries.
pub fn non_negative_all_usize(name: &'static str, values: &[i64]) -> DpResult<Vec<usize>> {
    non_negative_all(name, values)?
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            usize::try_from(value).map_err(|_| {
                DpError::invalid(name, format!("entry {} does not fit in usize", index))
            })
        })
        .collect()
}
