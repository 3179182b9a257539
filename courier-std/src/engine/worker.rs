//! The handler loop run by each pool member.

use super::queue::QueueReceiver;
use courier_core::{Handler, Sequenced};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use tracing::{debug, error};

/// What one worker did before it exited.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WorkerStats {
    pub(crate) handled: u64,
    pub(crate) failed: u64,
    pub(crate) panicked: u64,
}

/// Pop events and hand them to `handler` until the producer is gone and the
/// queue is drained.
///
/// A failing or panicking handler call is logged and costs only the event it
/// was called with.
pub(crate) async fn work<E, H>(
    handler: &H,
    queue: QueueReceiver<E>,
) -> WorkerStats
where
    E: Sequenced,
    H: Handler<E>,
{
    let mut stats = WorkerStats::default();

    while let Some(event) = queue.pop().await {
        let update_id = event.sequence_id();
        debug!(update_id, kind = event.kind(), "dispatching");

        match AssertUnwindSafe(handler.call(event)).catch_unwind().await {
            Ok(Ok(())) => stats.handled += 1,
            Ok(Err(err)) => {
                stats.failed += 1;
                error!(update_id, error = %err, "handler failed");
            }
            Err(panic) => {
                stats.panicked += 1;
                error!(update_id, panic = panic_message(&*panic), "handler panicked");
            }
        }
    }

    stats
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}
