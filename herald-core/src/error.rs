//! Error types for Herald.
//!
//! A raise call sees exactly one of two failure shapes:
//!
//! - [`RaiseError::InvalidSignal`] - the payload precondition was violated,
//!   detected before any scope is acquired
//! - [`RaiseError::Aggregate`] - one or more handlers failed; every captured
//!   failure is carried in invocation order

use thiserror::Error;

/// A boxed error type for handler failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The sole error surface of `raise` / `raise_async`.
///
/// Individual handler failures are never propagated bare; they are always
/// wrapped in an [`AggregateError`], even when only one handler failed.
#[derive(Error, Debug)]
pub enum RaiseError {
    /// The type-erased payload does not have the shape its kind claims.
    ///
    /// This is a usage error on the caller's side, raised before any scope
    /// is acquired or any handler is resolved.
    #[error("signal payload is not a `{expected}`")]
    InvalidSignal {
        /// Type name of the kind the payload was raised as.
        expected: &'static str,
    },

    /// One or more handlers failed during dispatch.
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

/// Every handler failure captured during a single dispatch.
///
/// Failures are stored in invocation order. The aggregate form is the
/// uniform contract: a dispatch with exactly one failing handler still
/// reports an `AggregateError` with one entry.
#[derive(Error, Debug)]
#[error("{} handler(s) failed while raising a signal", .failures.len())]
pub struct AggregateError {
    failures: Vec<BoxError>,
}

impl AggregateError {
    /// Wrap captured failures, preserving their order.
    pub fn new(failures: Vec<BoxError>) -> Self {
        Self { failures }
    }

    /// The captured failures, in invocation order.
    pub fn failures(&self) -> &[BoxError] {
        &self.failures
    }

    /// Consume the aggregate, yielding the captured failures.
    pub fn into_failures(self) -> Vec<BoxError> {
        self.failures
    }

    /// Number of captured failures.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Whether no failures were captured.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}
