//! Standard handler wrappers.
//!
//! - [`TracingHandler`]: runs each call inside an `update` span
//! - [`TimeoutHandler`]: bounds each call with a deadline
//! - [`KindRouter`]: picks a handler by [`Sequenced::kind`]
//!
//! Wrappers compose: `TracingHandler::new(TimeoutHandler::new(router, limit))`.
//!
//! [`Sequenced::kind`]: courier_core::Sequenced::kind

mod router;
mod timeout;
mod tracing;

pub use router::{KindRouter, KindRouterBuilder};
pub use timeout::{TimeoutError, TimeoutHandler};
pub use self::tracing::TracingHandler;
