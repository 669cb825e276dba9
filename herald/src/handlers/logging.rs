//! Logging decorator for signal observation.

use herald_core::{BoxError, CancellationToken, Signal, SignalHandler};

/// A handler that logs each signal before delegating to an inner handler.
pub struct LoggingHandler<H> {
    inner: H,
}

impl<H> LoggingHandler<H> {
    /// Wrap a handler with logging.
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<S, H> SignalHandler<S> for LoggingHandler<H>
where
    S: Signal + std::fmt::Debug,
    H: SignalHandler<S>,
{
    async fn handle(&self, signal: &S, cancel: &CancellationToken) -> Result<(), BoxError> {
        tracing::info!(?signal, "handling signal");
        self.inner.handle(signal, cancel).await
    }
}
