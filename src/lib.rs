// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dynamic-programming drills.
//!
//! Small, independent solvers, each a pure function over its inputs:
//!
//! - [`knapsack`]: 0/1 knapsack by tabulation over a [`ValueTable`] of
//!   `(items + 1) × (capacity + 1)` cells, with a single-row variant and
//!   reconstruction of the chosen items.
//! - [`memo`]: Fibonacci over a caller-owned memo that persists across calls.
//! - [`rainwater`]: trapped water over a bar histogram, two pointers.
//! - [`sieve`]: primes up to a limit.
//!
//! # Data Model
//!
//! ## Tables (owned by one call)
//!
//! A [`ValueTable`] is built bottom-up by a single solver call and handed back
//! read-only. Row 0 and column 0 are zero; values never decrease along a row
//! or down a column.
//!
//! ## Memos (owned by the caller)
//!
//! A [`RecurrenceMemo`] only grows. Keys, once written, are never overwritten,
//! so a memo reused across calls only saves work.
//!
//! # Errors
//!
//! Every precondition is checked before computation starts and reported as a
//! [`DpError`]. Signed input from outside the crate goes through
//! [`validation`] first.
//!
//! # Threading
//!
//! Everything here is synchronous and single-threaded. A memo shared between
//! threads needs external locking.

pub mod error;
pub mod knapsack;
pub mod memo;
pub mod rainwater;
pub mod sieve;
pub mod statistics;
pub mod table;
pub mod validation;

// Re-export commonly used types
pub use error::{DpError, DpResult};
pub use knapsack::{
    select_items, solve, solve_rolling, solve_table, solve_with_selection, Selection,
};
pub use memo::{fib, MemoTable, RecurrenceMemo};
pub use statistics::{Counters, Statistics};
pub use table::ValueTable;
