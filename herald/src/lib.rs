//! # herald - In-process Notification Dispatcher
//!
//! `herald` routes typed notifications ("signals") to the handlers that
//! declared interest in their exact concrete type. A raise call acquires a
//! fresh resolution scope, invokes the resolved handlers sequentially under
//! cooperative cancellation, and aggregates every handler failure into a
//! single reported error instead of stopping at the first one.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use herald::{Dispatcher, RegistryBuilder, Signal, SignalHandler};
//!
//! #[derive(Debug)]
//! struct OrderShipped { order_id: u64 }
//! impl Signal for OrderShipped {}
//!
//! struct EmailHandler;
//! impl SignalHandler<OrderShipped> for EmailHandler { ... }
//!
//! let dispatcher = Dispatcher::new(
//!     RegistryBuilder::new()
//!         .register::<OrderShipped, _>(EmailHandler)
//!         .build(),
//! );
//! dispatcher.raise_async(OrderShipped { order_id: 17 }).await?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use herald_core::{
    // Errors
    AggregateError,
    BoxError,
    // Cancellation
    CancellationToken,
    // Handler
    ErasedHandlerWrapper,
    ErasedSignalHandler,
    RaiseError,
    // Scope contracts
    Scope,
    ScopeProvider,
    // Signal
    Signal,
    SignalHandler,
    SignalKind,
};

mod dispatch;
mod registry;
mod scope;

pub use dispatch::Dispatcher;
#[cfg(feature = "inventory")]
pub use registry::HandlerSubmission;
pub use registry::{HandlerRegistry, RegistryBuilder};
pub use scope::{RegistryScope, RegistryScopeProvider};

pub mod handlers;
pub mod testing;

/// Prelude module - common imports for Herald.
///
/// # Usage
///
/// ```rust,ignore
/// use herald::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, CancellationToken, Dispatcher, RaiseError, RegistryBuilder, Signal,
        SignalHandler, SignalKind,
    };
}

#[cfg(feature = "inventory")]
pub use inventory;
