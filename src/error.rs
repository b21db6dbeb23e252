// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types shared by every solver in the crate.
//!
//! All errors are raised by precondition checks before any table or memo is
//! touched, so a failed call never leaves partial results behind.

use thiserror::Error;

/// Errors returned by the solvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DpError {
    /// An argument violates the operation's preconditions.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The result cannot be represented in a `u64`.
    #[error("arithmetic overflow computing {what}")]
    Overflow { what: String },
}

impl DpError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        DpError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(what: impl Into<String>) -> Self {
        DpError::Overflow { what: what.into() }
    }

    /// True for [`DpError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DpError::InvalidArgument { .. })
    }
}

/// Result type for solver operations.
pub type DpResult<T> = Result<T, DpError>;
