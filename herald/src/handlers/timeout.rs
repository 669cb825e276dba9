//! Timeout decorator for time-limited handlers.

use herald_core::{BoxError, CancellationToken, Signal, SignalHandler};
use std::time::Duration;
use tokio::time::timeout;

/// Error returned when a wrapped handler exceeds its deadline.
#[derive(Debug, Clone)]
pub struct TimeoutError(pub Duration);

impl std::fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "handler timed out after {:?}", self.0)
    }
}

impl std::error::Error for TimeoutError {}

/// A handler that wraps another handler with a deadline.
///
/// A timeout surfaces as this handler's failure and is captured by the
/// dispatcher like any other handler error.
pub struct TimeoutHandler<H> {
    inner: H,
    duration: Duration,
}

impl<H> TimeoutHandler<H> {
    /// Wrap a handler with the given deadline.
    pub fn new(inner: H, duration: Duration) -> Self {
        Self { inner, duration }
    }
}

impl<S: Signal, H: SignalHandler<S>> SignalHandler<S> for TimeoutHandler<H> {
    async fn handle(&self, signal: &S, cancel: &CancellationToken) -> Result<(), BoxError> {
        match timeout(self.duration, self.inner.handle(signal, cancel)).await {
            Ok(result) => result,
            Err(_) => Err(Box::new(TimeoutError(self.duration))),
        }
    }
}
