//! Handler registry and registration builder.
//!
//! The builder is mutable during the configuration phase; `build()` takes a
//! stable snapshot. Snapshots are independent: registrations made after a
//! snapshot never retroactively affect it.

use herald_core::{ErasedHandlerWrapper, ErasedSignalHandler, Signal, SignalHandler, SignalKind};
use std::{any::TypeId, collections::HashMap, sync::Arc};

/// A stored handler together with the identity of its concrete type.
#[derive(Clone)]
struct RegisteredHandler {
    handler_type: TypeId,
    handler: Arc<dyn ErasedSignalHandler>,
}

/// Builder for constructing a [`HandlerRegistry`].
///
/// Registrations are deduplicated by concrete handler type per signal kind:
/// registering the same handler type twice for the same signal is silently
/// skipped, which keeps bulk registration permissive. Insertion order is
/// preserved and becomes the dispatch order of the built registry.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .register::<OrderShipped, _>(EmailHandler::new(mailer))
///     .register::<OrderShipped, _>(AuditHandler::default())
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: HashMap<SignalKind, Vec<RegisteredHandler>>,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a handler for signal type `S`.
    pub fn register<S, H>(mut self, handler: H) -> Self
    where
        S: Signal,
        H: SignalHandler<S>,
    {
        self.register_mut::<S, H>(handler);
        self
    }

    /// Register a handler for signal type `S` (mutable version).
    pub fn register_mut<S, H>(&mut self, handler: H)
    where
        S: Signal,
        H: SignalHandler<S>,
    {
        let slot = self.entries.entry(SignalKind::of::<S>()).or_default();
        let handler_type = TypeId::of::<H>();
        if slot.iter().any(|e| e.handler_type == handler_type) {
            return;
        }
        slot.push(RegisteredHandler {
            handler_type,
            handler: Arc::new(ErasedHandlerWrapper::new(handler)),
        });
    }

    /// Register every handler submitted via [`inventory::submit!`].
    ///
    /// This is the bulk-registration path: unrelated submissions simply
    /// register nothing for kinds the caller never raises, and duplicates
    /// are deduplicated like any other registration.
    #[cfg(feature = "inventory")]
    pub fn register_collected(mut self) -> Self {
        for submission in inventory::iter::<HandlerSubmission>() {
            (submission.register)(&mut self);
        }
        self
    }

    /// Take a stable, independent snapshot of the current registrations.
    ///
    /// The builder stays usable; later registrations affect only later
    /// snapshots.
    pub fn build(&self) -> HandlerRegistry {
        HandlerRegistry {
            entries: self.entries.clone(),
        }
    }

    /// Total number of registered handlers across all signal kinds.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Check if the builder has no registrations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable, thread-safe registry of signal handlers.
///
/// Created by [`RegistryBuilder::build`]. Safe for unsynchronized concurrent
/// reads during dispatch; never mutated afterwards.
pub struct HandlerRegistry {
    entries: HashMap<SignalKind, Vec<RegisteredHandler>>,
}

impl HandlerRegistry {
    /// The ordered handler sequence registered for `kind`.
    ///
    /// Returns shared references to the registry's handler instances, in
    /// registration order. Empty for kinds nothing registered for.
    pub fn handlers_for(&self, kind: SignalKind) -> Vec<Arc<dyn ErasedSignalHandler>> {
        self.entries
            .get(&kind)
            .map(|slot| slot.iter().map(|e| Arc::clone(&e.handler)).collect())
            .unwrap_or_default()
    }

    /// Number of handlers registered for `kind`.
    pub fn handler_count(&self, kind: SignalKind) -> usize {
        self.entries.get(&kind).map_or(0, Vec::len)
    }

    /// Total number of registered handlers across all signal kinds.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A handler registration submitted for bulk collection.
///
/// Submit with `inventory::submit!` next to the handler definition, then
/// gather everything with [`RegistryBuilder::register_collected`].
///
/// # Example
/// ```ignore
/// inventory::submit! {
///     HandlerSubmission::new(|builder| {
///         builder.register_mut::<OrderShipped, _>(AuditHandler::default())
///     })
/// }
/// ```
#[cfg(feature = "inventory")]
pub struct HandlerSubmission {
    register: fn(&mut RegistryBuilder),
}

#[cfg(feature = "inventory")]
impl HandlerSubmission {
    /// Create a submission from a registration function.
    pub const fn new(register: fn(&mut RegistryBuilder)) -> Self {
        Self { register }
    }
}

#[cfg(feature = "inventory")]
inventory::collect!(HandlerSubmission);
