//! The dispatch engine.
//!
//! One raise call is one logical flow of control: acquire a scope, resolve
//! the ordered handler sequence for the signal's exact kind, invoke each
//! handler sequentially, release the scope, report. Handler failures are
//! captured and aggregated rather than aborting the loop; cancellation is
//! checked only at iteration-start boundaries.

use crate::{registry::HandlerRegistry, scope::RegistryScopeProvider};
use herald_core::{
    AggregateError, CancellationToken, RaiseError, Scope, ScopeProvider, Signal, SignalKind,
};
use std::any::Any;

/// The notification dispatcher.
///
/// Holds no cross-call mutable state: independent raise calls may run
/// concurrently, each with its own exclusively-owned scope.
///
/// # Example
/// ```ignore
/// let dispatcher = Dispatcher::new(
///     RegistryBuilder::new()
///         .register::<OrderShipped, _>(EmailHandler::new(mailer))
///         .build(),
/// );
///
/// dispatcher.raise_async(OrderShipped { order_id: 17 }).await?;
/// ```
pub struct Dispatcher<P: ScopeProvider = RegistryScopeProvider> {
    scopes: P,
}

impl Dispatcher<RegistryScopeProvider> {
    /// Create a dispatcher resolving handlers from the given registry.
    pub fn new(registry: HandlerRegistry) -> Self {
        Self {
            scopes: RegistryScopeProvider::new(registry),
        }
    }
}

impl<P: ScopeProvider> Dispatcher<P> {
    /// Create a dispatcher with a custom scope provider.
    pub fn with_provider(scopes: P) -> Self {
        Self { scopes }
    }

    /// Raise a signal asynchronously without a cancellation signal.
    ///
    /// Handlers still receive a token, but it is one that is never
    /// triggered; the dispatch runs every resolved handler.
    pub async fn raise_async<S: Signal>(&self, signal: S) -> Result<(), RaiseError> {
        self.raise_checked(SignalKind::of::<S>(), &signal, None)
            .await
    }

    /// Raise a signal asynchronously under cooperative cancellation.
    ///
    /// The token is checked before each handler starts: once cancellation is
    /// requested, not-yet-started handlers are skipped entirely, while the
    /// handler in flight at that moment is never preempted. Handlers also
    /// receive the token and may observe it internally.
    pub async fn raise_async_with<S: Signal>(
        &self,
        signal: S,
        cancel: &CancellationToken,
    ) -> Result<(), RaiseError> {
        self.raise_checked(SignalKind::of::<S>(), &signal, Some(cancel))
            .await
    }

    /// Raise a type-erased signal.
    ///
    /// For callers that carry payloads as trait objects alongside their
    /// routing kind. A payload whose concrete type does not match `kind`
    /// fails with [`RaiseError::InvalidSignal`] before any scope is
    /// acquired; it is a usage error, never silently ignored.
    pub async fn raise_erased(
        &self,
        kind: SignalKind,
        signal: &(dyn Any + Send + Sync),
        cancel: &CancellationToken,
    ) -> Result<(), RaiseError> {
        self.raise_checked(kind, signal, Some(cancel)).await
    }

    async fn raise_checked(
        &self,
        kind: SignalKind,
        signal: &(dyn Any + Send + Sync),
        cancel: Option<&CancellationToken>,
    ) -> Result<(), RaiseError> {
        if !kind.matches(signal) {
            return Err(RaiseError::InvalidSignal {
                expected: kind.name(),
            });
        }

        let scope = self.scopes.create_async_scope().await;
        let outcome = deliver(&scope, kind, signal, cancel).await;
        drop(scope);
        outcome
    }

    /// Raise a signal synchronously on the caller's thread.
    ///
    /// Each handler's future is driven to completion before the next starts.
    /// The synchronous mode accepts no cancellation signal: every resolved
    /// handler runs, as if the tokens handed to handlers were never
    /// triggered. Resolution and failure aggregation are identical to the
    /// asynchronous mode. Must not be called from within an async runtime;
    /// use [`Dispatcher::raise_async`] there instead.
    pub fn raise<S: Signal>(&self, signal: S) -> Result<(), RaiseError> {
        let scope = self.scopes.create_scope();
        let outcome = futures::executor::block_on(deliver(
            &scope,
            SignalKind::of::<S>(),
            &signal,
            None,
        ));
        drop(scope);
        outcome
    }
}

/// The shared dispatch loop: sequential fan-out with failure aggregation.
///
/// `cancel` is `None` for dispatches that accept no cancellation signal;
/// the loop then never stops early, and each handler receives a token that
/// is never triggered.
///
/// The scope outlives this future on every path; its release is the caller's
/// `drop`, which also runs if a handler panics and the future unwinds.
async fn deliver<Sc: Scope>(
    scope: &Sc,
    kind: SignalKind,
    signal: &(dyn Any + Send + Sync),
    cancel: Option<&CancellationToken>,
) -> Result<(), RaiseError> {
    let handlers = scope.resolve_all(kind);

    #[cfg(feature = "tracing")]
    tracing::debug!(kind = kind.name(), handlers = handlers.len(), "raising signal");

    let mut failures = Vec::new();

    for handler in &handlers {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            #[cfg(feature = "tracing")]
            tracing::debug!(kind = kind.name(), "cancellation requested, skipping remaining handlers");
            break;
        }

        let never_triggered;
        let token = match cancel {
            Some(token) => token,
            None => {
                never_triggered = CancellationToken::new();
                &never_triggered
            }
        };

        if let Err(failure) = handler.handle_erased(signal, token).await {
            #[cfg(feature = "tracing")]
            tracing::debug!(kind = kind.name(), error = %failure, "handler failed, continuing dispatch");
            failures.push(failure);
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(AggregateError::new(failures).into())
    }
}
