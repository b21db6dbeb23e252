// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sieve of Eratosthenes.

use crate::error::{DpError, DpResult};
use crate::validation::filled_vec;

/// All primes `<= limit`, ascending.
///
/// Marking starts at `p * p` for each prime `p`, and stops once `p * p > limit`.
/// A limit too large to hold one flag per number is an `InvalidArgument`.
pub fn primes_up_to(limit: usize) -> DpResult<Vec<usize>> {
    if limit < 2 {
        return Ok(Vec::new());
    }

    let len = limit
        .checked_add(1)
        .ok_or_else(|| DpError::invalid("limit", format!("{} is too large", limit)))?;
    let mut is_prime = filled_vec("limit", len, true)?;
    is_prime[0] = false;
    is_prime[1] = false;

    let mut p = 2;
    while p <= limit / p {
        if is_prime[p] {
            for multiple in (p * p..=limit).step_by(p) {
                is_prime[multiple] = false;
            }
        }
        p += 1;
    }

    Ok(is_prime
        .iter()
        .enumerate()
        .filter_map(|(n, &prime)| prime.then_some(n))
        .collect())
}
