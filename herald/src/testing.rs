//! Testing utilities for Herald.
//!
//! This module provides handlers and a scope-provider spy to make testing
//! dispatch behavior easier:
//!
//! - [`RecordingHandler`]: records every signal it receives
//! - [`CountingHandler`]: counts invocations
//! - [`FailingHandler`]: fails with a programmable message
//! - [`CancellingHandler`]: requests cancellation from inside `handle`
//! - [`CountingScopeProvider`]: counts scope creations and releases

use crate::registry::HandlerRegistry;
use herald_core::{
    BoxError, CancellationToken, ErasedSignalHandler, Scope, ScopeProvider, Signal, SignalHandler,
    SignalKind,
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// A handler that records every signal it receives.
pub struct RecordingHandler<S> {
    received: Arc<Mutex<Vec<S>>>,
}

impl<S> RecordingHandler<S> {
    /// Create a new recording handler.
    pub fn new() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded signals.
    pub fn received(&self) -> Vec<S>
    where
        S: Clone,
    {
        self.received.lock().unwrap().clone()
    }

    /// Get the number of recorded signals.
    pub fn count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

impl<S> Default for RecordingHandler<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for RecordingHandler<S> {
    fn clone(&self) -> Self {
        Self {
            received: Arc::clone(&self.received),
        }
    }
}

impl<S: Signal + Clone> SignalHandler<S> for RecordingHandler<S> {
    async fn handle(&self, signal: &S, _cancel: &CancellationToken) -> Result<(), BoxError> {
        self.received.lock().unwrap().push(signal.clone());
        Ok(())
    }
}

/// A handler that counts its invocations and always succeeds.
#[derive(Clone, Default)]
pub struct CountingHandler {
    calls: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `handle` was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<S: Signal> SignalHandler<S> for CountingHandler {
    async fn handle(&self, _signal: &S, _cancel: &CancellationToken) -> Result<(), BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A handler that always fails with the given message.
#[derive(Clone)]
pub struct FailingHandler {
    message: &'static str,
    calls: Arc<AtomicUsize>,
}

impl FailingHandler {
    /// Create a handler failing with `message`.
    pub fn new(message: &'static str) -> Self {
        Self {
            message,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `handle` was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<S: Signal> SignalHandler<S> for FailingHandler {
    async fn handle(&self, _signal: &S, _cancel: &CancellationToken) -> Result<(), BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.message.into())
    }
}

/// A handler that requests cancellation of the dispatch it runs in.
///
/// It cancels the token it receives and then completes successfully, so the
/// dispatcher skips every handler that has not started yet.
#[derive(Clone, Copy, Default)]
pub struct CancellingHandler;

impl<S: Signal> SignalHandler<S> for CancellingHandler {
    async fn handle(&self, _signal: &S, cancel: &CancellationToken) -> Result<(), BoxError> {
        cancel.cancel();
        Ok(())
    }
}

/// A scope-provider spy counting scope creations and releases.
///
/// Resolution delegates to a registry; creations are counted in
/// `create_scope` and releases in the scope's `Drop`. Clones share the
/// counters, so a clone kept outside the dispatcher observes its activity.
#[derive(Clone)]
pub struct CountingScopeProvider {
    registry: Arc<HandlerRegistry>,
    created: Arc<AtomicUsize>,
    dropped: Arc<AtomicUsize>,
}

impl CountingScopeProvider {
    /// Create a spy provider around the given registry.
    pub fn new(registry: HandlerRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            created: Arc::new(AtomicUsize::new(0)),
            dropped: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of scopes created so far.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Number of scopes released so far.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::SeqCst)
    }
}

impl ScopeProvider for CountingScopeProvider {
    type Scope = CountingScope;

    fn create_scope(&self) -> CountingScope {
        self.created.fetch_add(1, Ordering::SeqCst);
        CountingScope {
            registry: Arc::clone(&self.registry),
            dropped: Arc::clone(&self.dropped),
        }
    }
}

/// The scope created by [`CountingScopeProvider`].
pub struct CountingScope {
    registry: Arc<HandlerRegistry>,
    dropped: Arc<AtomicUsize>,
}

impl Scope for CountingScope {
    fn resolve_all(&self, kind: SignalKind) -> Vec<Arc<dyn ErasedSignalHandler>> {
        self.registry.handlers_for(kind)
    }
}

impl Drop for CountingScope {
    fn drop(&mut self) {
        self.dropped.fetch_add(1, Ordering::SeqCst);
    }
}
