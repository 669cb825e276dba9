//! Standard handler decorators.
//!
//! These wrap an inner [`SignalHandler`](herald_core::SignalHandler) with a
//! cross-cutting concern. Timeouts in particular are deliberately layered
//! here rather than in the dispatcher: the dispatch loop itself never times
//! a handler out.

#[cfg(feature = "tracing")]
mod logging;
#[cfg(feature = "tracing")]
pub use logging::LoggingHandler;

#[cfg(feature = "timeout")]
mod timeout;
#[cfg(feature = "timeout")]
pub use timeout::{TimeoutError, TimeoutHandler};
