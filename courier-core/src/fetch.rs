//! The dispatch engine's boundary with the remote transport.

use crate::{error::BoxError, message::Message};
use std::{future::Future, sync::Arc, time::Duration};

/// Parameters of one fetch call.
///
/// The engine builds a fresh request for every iteration of its producer
/// loop; only `offset` changes between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// The cursor: identifier of the first event wanted.
    pub offset: i64,
    /// Maximum number of events to return.
    pub limit: u32,
    /// How long the remote side may hold the request open waiting for events.
    pub timeout: Duration,
    /// Event kinds to receive. Empty means "whatever the remote side
    /// defaults to".
    pub allowed_updates: Arc<[String]>,
}

/// A source of ordered event batches.
///
/// Implementations block for up to `request.timeout` and return events in
/// increasing sequence order. Errors are treated as transient: the engine
/// logs them and calls again. Backoff, if wanted, belongs inside the fetcher
/// (see `courier_std::fetchers::Backoff`).
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot fetch events of type `{E}`",
    label = "missing `Fetcher<{E}>` implementation",
    note = "Implement `Fetcher<{E}>` or pass a closure `Fn(FetchRequest) -> impl Future<Output = Result<Vec<{E}>, BoxError>>`."
)]
pub trait Fetcher<E: Message>: Send + Sync + 'static {
    /// Fetch the next batch starting at `request.offset`.
    fn fetch(
        &self,
        request: FetchRequest,
    ) -> impl Future<Output = Result<Vec<E>, BoxError>> + Send;
}

// Blanket impl for closures
impl<F, E, Fut> Fetcher<E> for F
where
    E: Message,
    F: Fn(FetchRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<E>, BoxError>> + Send,
{
    fn fetch(
        &self,
        request: FetchRequest,
    ) -> impl Future<Output = Result<Vec<E>, BoxError>> + Send {
        (self)(request)
    }
}
