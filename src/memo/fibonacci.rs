// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoized Fibonacci.
//!
//! `fib(0) = 0`, `fib(1) = 1`, `fib(n) = fib(n-1) + fib(n-2)`.
//!
//! Both entry points share one memo contract:
//! - the base cases are answered directly and never touch the memo;
//! - an index already in the memo is returned without recomputation;
//! - every missing index in `2..=n` is computed once and stored.
//!
//! After `fib(n, &mut memo)` on an empty memo with `n >= 2`, the memo holds
//! exactly the keys `2..=n`.

use tracing::{debug, trace};

use super::RecurrenceMemo;
use crate::error::{DpError, DpResult};

/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_FIB_INDEX: u64 = 93;

fn check_index(n: u64) -> DpResult<()> {
    if n > MAX_FIB_INDEX {
        return Err(DpError::overflow(format!(
            "fib({}): indices above {} do not fit in u64",
            n, MAX_FIB_INDEX
        )));
    }
    Ok(())
}

fn add(n: u64, a: u64, b: u64) -> DpResult<u64> {
    // Only reachable when a caller seeded the memo with wrong values.
    a.checked_add(b)
        .ok_or_else(|| DpError::overflow(format!("fib({})", n)))
}

/// The `n`th Fibonacci number, filling `memo` bottom-up.
///
/// Runs in a loop rather than recursion, so stack depth does not grow with `n`.
pub fn fib<M: RecurrenceMemo + ?Sized>(n: u64, memo: &mut M) -> DpResult<u64> {
    if n <= 1 {
        return Ok(n);
    }
    check_index(n)?;
    if let Some(value) = memo.lookup(n) {
        trace!(n, "memo hit");
        return Ok(value);
    }

    // fib(k - 2) and fib(k - 1) for the next k.
    let (mut before, mut previous) = (0u64, 1u64);
    for k in 2..n {
        let current = match memo.lookup(k) {
            Some(value) => value,
            None => {
                let value = add(k, before, previous)?;
                memo.store(k, value);
                value
            }
        };
        before = previous;
        previous = current;
    }

    let value = add(n, before, previous)?;
    memo.store(n, value);
    debug!(n, value, "fibonacci computed");
    Ok(value)
}

/// The `n`th Fibonacci number by direct memoized recursion.
///
/// Recursion depth is at most [`MAX_FIB_INDEX`].
pub fn fib_top_down<M: RecurrenceMemo + ?Sized>(n: u64, memo: &mut M) -> DpResult<u64> {
    check_index(n)?;
    recurse(n, memo)
}

fn recurse<M: RecurrenceMemo + ?Sized>(n: u64, memo: &mut M) -> DpResult<u64> {
    if n <= 1 {
        return Ok(n);
    }
    if let Some(value) = memo.lookup(n) {
        return Ok(value);
    }
    let a = recurse(n - 1, memo)?;
    let b = recurse(n - 2, memo)?;
    let value = add(n, a, b)?;
    memo.store(n, value);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memo::MemoTable;
    use crate::statistics::Counters;
    use std::collections::HashMap;

    #[test]
    fn test_base_cases_leave_memo_untouched() {
        let mut memo = MemoTable::new();
        assert_eq!(fib(0, &mut memo), Ok(0));
        assert_eq!(fib(1, &mut memo), Ok(1));
        assert_eq!(fib_top_down(1, &mut memo), Ok(1));
        assert!(memo.is_empty());
        assert!(memo.statistics().snapshot().is_empty());
    }

    #[test]
    fn test_known_values() {
        let mut memo: HashMap<u64, u64> = HashMap::new();
        assert_eq!(fib(10, &mut memo), Ok(55));

        let mut memo: HashMap<u64, u64> = HashMap::new();
        assert_eq!(fib(20, &mut memo), Ok(6765));

        let mut memo: HashMap<u64, u64> = HashMap::new();
        assert_eq!(fib_top_down(20, &mut memo), Ok(6765));
    }

    #[test]
    fn test_memo_holds_exactly_two_through_n() {
        let mut memo = MemoTable::new();
        fib(10, &mut memo).unwrap();
        assert_eq!(memo.keys().collect::<Vec<_>>(), (2..=10).collect::<Vec<_>>());
        assert_eq!(memo.get(10), Some(55));
        assert_eq!(memo.statistics().get(Counters::Computations), 9);

        let mut memo = MemoTable::new();
        fib_top_down(10, &mut memo).unwrap();
        assert_eq!(memo.keys().collect::<Vec<_>>(), (2..=10).collect::<Vec<_>>());
        assert_eq!(memo.statistics().get(Counters::Computations), 9);
    }

    #[test]
    fn test_largest_index() {
        let mut memo = MemoTable::new();
        assert_eq!(fib(MAX_FIB_INDEX, &mut memo), Ok(12_200_160_415_121_876_738));
    }

    #[test]
    fn test_overflow_detected_before_memo_use() {
        let mut memo = MemoTable::new();
        let err = fib(MAX_FIB_INDEX + 1, &mut memo).unwrap_err();
        assert!(matches!(err, DpError::Overflow { .. }));
        assert!(fib_top_down(200, &mut memo).is_err());
        assert!(memo.is_empty());
        assert!(memo.statistics().snapshot().is_empty());
    }

    #[test]
    fn test_cache_hit_short_circuits() {
        let mut memo = MemoTable::new();
        fib(30, &mut memo).unwrap();
        let computed = memo.statistics().get(Counters::Computations);

        assert_eq!(fib(25, &mut memo), Ok(75025));
        assert_eq!(memo.statistics().get(Counters::Computations), computed);
        assert_eq!(memo.statistics().get(Counters::CacheHits), 1);
    }
}
