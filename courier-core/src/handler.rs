//! # Handlers
//!
//! The terminal point of the dispatch pipeline: user code that receives one
//! fully decoded event and performs its side effects.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|update: Update| async move { ... }`
//! 2. **Struct implementation**: `impl Handler<Update> for MyHandler`
//! 3. **Wrapped**: `TracingHandler::new(TimeoutHandler::new(inner, limit))`
//!    from `courier-std`
//!
//! A handler failure is scoped to the single event it was called with; the
//! engine logs it and moves on.

use crate::{error::BoxError, message::Message, response::IntoOutcome};
use std::{future::Future, pin::Pin};

/// The endpoint an event is delivered to.
///
/// Handlers receive a fully owned event and perform async business logic.
/// They are shared between workers, so `call` takes `&self`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle events of type `{E}`",
    label = "missing `Handler<{E}>` implementation",
    note = "Handlers must implement the `call` method for the event type `{E}`."
)]
pub trait Handler<E: Message>: Send + Sync + 'static {
    /// Process one event.
    fn call(&self, event: E) -> impl Future<Output = Result<(), BoxError>> + Send;
}

// Blanket impl for closures
impl<F, E, Fut, R> Handler<E> for F
where
    E: Message,
    F: Fn(E) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send,
    R: IntoOutcome,
{
    async fn call(&self, event: E) -> Result<(), BoxError> {
        (self)(event).await.into_outcome()
    }
}

/// Object-safe version of [`Handler`].
///
/// Use this trait when handlers of different concrete types live in one
/// collection (e.g. a router keyed by event kind).
pub trait DynHandler<E: Message>: Send + Sync + 'static {
    /// Process one event (dynamic dispatch version).
    fn call_dyn(&self, event: E) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + '_>>;
}

impl<E: Message, H: Handler<E>> DynHandler<E> for H {
    fn call_dyn(&self, event: E) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + '_>> {
        Box::pin(self.call(event))
    }
}
