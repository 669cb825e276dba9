//! # herald-core
//!
//! Core traits for the Herald notification dispatcher.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! crates that define signals and handlers but don't need the full `herald`
//! dispatcher implementation.
//!
//! # Concepts
//!
//! ## Signal ([`Signal`], [`SignalKind`])
//!
//! A signal is a typed notification value raised by a caller. Routing is by
//! *exact* concrete type: a signal reaches only the handlers registered for
//! its own [`SignalKind`], never for a wrapper or related type.
//!
//! ## Handler ([`SignalHandler`])
//!
//! A unit of work registered for one signal type. Many concrete handler
//! types may be registered for the same signal. Handlers receive the signal
//! by reference together with a cancellation token they may observe.
//!
//! ## Scope ([`Scope`], [`ScopeProvider`])
//!
//! An isolated resolution context acquired once per dispatch. The scope
//! bounds the lifetime of every handler instance it resolves and is released
//! (dropped) on every exit path of the dispatch.
//!
//! # Error Types
//!
//! - [`RaiseError`] - the sole error surface of a raise call
//! - [`AggregateError`] - every captured handler failure from one dispatch

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod handler;
mod scope;
mod signal;

// Re-exports
pub use error::{AggregateError, BoxError, RaiseError};
pub use handler::{ErasedHandlerWrapper, ErasedSignalHandler, SignalHandler};
pub use scope::{Scope, ScopeProvider};
pub use signal::{Signal, SignalKind};

// Part of the `SignalHandler` signature.
pub use tokio_util::sync::CancellationToken;
