//! Signal trait and runtime type identity.

use std::any::{Any, TypeId, type_name};

/// A marker trait for notification payloads raised through the dispatcher.
///
/// Signals must be `Send + Sync + 'static` to be safe for async use. They
/// are immutable by convention: handlers receive them by shared reference.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug)]
/// struct OrderShipped { order_id: u64 }
///
/// impl Signal for OrderShipped {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Signal",
    label = "must be `Send + Sync + 'static`",
    note = "All notifications raised through Herald must be thread-safe and static."
)]
pub trait Signal: Send + Sync + 'static {}

// Common Signal implementations
impl Signal for () {}
impl Signal for String {}
impl Signal for &'static str {}
impl<T: Signal> Signal for Box<T> {}
impl<T: Signal> Signal for std::sync::Arc<T> {}
impl<T: Signal> Signal for Vec<T> {}
impl<T: Signal> Signal for Option<T> {}

/// The runtime identity of a signal type, used as the registry key.
///
/// Routing is exact-match only: `SignalKind::of::<Box<T>>()` and
/// `SignalKind::of::<T>()` are distinct kinds, and no subtype relation is
/// ever consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignalKind {
    id: TypeId,
    name: &'static str,
}

impl SignalKind {
    /// The kind of the concrete signal type `S`.
    pub fn of<S: Signal>() -> Self {
        Self {
            id: TypeId::of::<S>(),
            name: type_name::<S>(),
        }
    }

    /// Whether a type-erased payload actually has this kind's shape.
    pub fn matches(&self, payload: &(dyn Any + Send + Sync)) -> bool {
        payload.type_id() == self.id
    }

    /// The type name this kind was created from, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }
}
