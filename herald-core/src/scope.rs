//! Scope and scope-provider collaborator contracts.
//!
//! A scope is an isolated resolution context acquired once per raise call.
//! It exclusively owns the handler instances it resolves for the duration of
//! that dispatch and is never shared across concurrent raises.
//!
//! Release is `Drop`: the guard runs exactly once per created scope, on
//! normal return, early stop under cancellation, and panic unwinding alike.

use crate::{handler::ErasedSignalHandler, signal::SignalKind};
use std::{future::Future, sync::Arc};

/// An isolated resolution context for one dispatch call.
pub trait Scope: Send + Sync {
    /// Resolve the ordered handler sequence registered for `kind`.
    ///
    /// The order must be reproducible for a given registry snapshot. An
    /// empty result is not an error; it means the dispatch invokes nothing.
    fn resolve_all(&self, kind: SignalKind) -> Vec<Arc<dyn ErasedSignalHandler>>;
}

/// Supplies a fresh [`Scope`] per dispatch call.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid ScopeProvider",
    label = "missing `ScopeProvider` implementation",
    note = "Implement `ScopeProvider` to supply per-dispatch resolution scopes."
)]
pub trait ScopeProvider: Send + Sync {
    /// The scope type this provider creates.
    type Scope: Scope;

    /// Create a scope for a synchronous dispatch.
    fn create_scope(&self) -> Self::Scope;

    /// Create a scope for an asynchronous dispatch.
    ///
    /// Defaults to the synchronous form. Providers whose acquisition is
    /// itself asynchronous can override this.
    fn create_async_scope(&self) -> impl Future<Output = Self::Scope> + Send {
        std::future::ready(self.create_scope())
    }
}
