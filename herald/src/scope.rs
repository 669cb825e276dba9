//! Registry-backed scope provider.
//!
//! The default provider for the common case where handlers live in an
//! immutable [`HandlerRegistry`]: each scope shares the registry and resolves
//! handlers in registration order. Custom providers (e.g. wrapping a DI
//! container) implement [`ScopeProvider`] themselves.

use crate::registry::HandlerRegistry;
use herald_core::{ErasedSignalHandler, Scope, ScopeProvider, SignalKind};
use std::sync::Arc;

/// A [`ScopeProvider`] backed by an immutable handler registry.
pub struct RegistryScopeProvider {
    registry: Arc<HandlerRegistry>,
}

impl RegistryScopeProvider {
    /// Create a provider owning the given registry.
    pub fn new(registry: HandlerRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }
}

impl ScopeProvider for RegistryScopeProvider {
    type Scope = RegistryScope;

    fn create_scope(&self) -> RegistryScope {
        RegistryScope {
            registry: Arc::clone(&self.registry),
        }
    }
}

/// A per-dispatch scope resolving handlers from a shared registry.
///
/// Registry entries are stateless shared instances, so this scope has no
/// teardown of its own; release is its `Drop`.
pub struct RegistryScope {
    registry: Arc<HandlerRegistry>,
}

impl Scope for RegistryScope {
    fn resolve_all(&self, kind: SignalKind) -> Vec<Arc<dyn ErasedSignalHandler>> {
        self.registry.handlers_for(kind)
    }
}
