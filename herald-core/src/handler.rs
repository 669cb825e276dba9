//! Handler traits for signal processing.
//!
//! [`SignalHandler`] is the strongly-typed trait users implement.
//! [`ErasedSignalHandler`] is the object-safe, type-erased form the registry
//! and scopes traffic in; [`ErasedHandlerWrapper`] bridges the two.

use crate::{error::BoxError, signal::Signal};
use std::{any::Any, future::Future, marker::PhantomData, pin::Pin};
use tokio_util::sync::CancellationToken;

/// A unit of work registered for one signal type.
///
/// Handlers receive the signal by shared reference and a cancellation token
/// they may observe internally. The dispatcher never preempts a running
/// handler; a handler that wants to stop early must check the token itself.
///
/// A failure returned from `handle` is captured by the dispatcher and never
/// aborts sibling handlers of the same dispatch.
///
/// # Static vs Dynamic Dispatch
///
/// This trait uses native `async fn` shapes for zero-cost static dispatch.
/// For storage in registries and scopes, handlers are wrapped into
/// [`ErasedSignalHandler`] trait objects.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle signals of type `{S}`",
    label = "missing `SignalHandler<{S}>` implementation",
    note = "Handlers must implement the `handle` method for the signal type `{S}`."
)]
pub trait SignalHandler<S: Signal>: Send + Sync + 'static {
    /// Process one signal.
    fn handle(
        &self,
        signal: &S,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Type-erased handler trait for registry storage and dispatch.
///
/// The signal is passed as `&dyn Any` and downcast to the concrete type
/// internally. The dispatcher validates the payload shape against the
/// registry key before any handler is invoked, so the downcast cannot fail
/// on a resolved handler.
pub trait ErasedSignalHandler: Send + Sync + 'static {
    /// Execute the handler with a type-erased signal.
    fn handle_erased<'a>(
        &'a self,
        signal: &'a (dyn Any + Send + Sync),
        cancel: &'a CancellationToken,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>>;
}

/// Wrapper to implement [`ErasedSignalHandler`] for a typed handler.
pub struct ErasedHandlerWrapper<S, H> {
    handler: H,
    _signal: PhantomData<S>,
}

impl<S, H> ErasedHandlerWrapper<S, H> {
    /// Wrap a typed handler for type-erased storage.
    pub const fn new(handler: H) -> Self {
        Self {
            handler,
            _signal: PhantomData,
        }
    }
}

impl<S, H> ErasedSignalHandler for ErasedHandlerWrapper<S, H>
where
    S: Signal,
    H: SignalHandler<S>,
{
    fn handle_erased<'a>(
        &'a self,
        signal: &'a (dyn Any + Send + Sync),
        cancel: &'a CancellationToken,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>> {
        let signal = signal
            .downcast_ref::<S>()
            .expect("signal type mismatch in erased handler");
        Box::pin(self.handler.handle(signal, cancel))
    }
}
