//! Timeout wrapper for time-limited handling.

use courier_core::{BoxError, Handler, Message};
use std::time::Duration;
use tokio::time::timeout;

/// Error returned when a handler call outlives its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("handler timed out after {0:?}")]
pub struct TimeoutError(pub Duration);

/// A handler that wraps another handler with a timeout.
///
/// The inner call is dropped when the deadline passes, so the worker moves on
/// to the next event.
pub struct TimeoutHandler<H> {
    inner: H,
    duration: Duration,
}

impl<H> TimeoutHandler<H> {
    /// Create a new timeout handler.
    pub fn new(inner: H, duration: Duration) -> Self {
        Self { inner, duration }
    }

    /// The configured deadline.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<E: Message, H: Handler<E>> Handler<E> for TimeoutHandler<H> {
    async fn call(&self, event: E) -> Result<(), BoxError> {
        match timeout(self.duration, self.inner.call(event)).await {
            Ok(result) => result,
            Err(_) => Err(Box::new(TimeoutError(self.duration))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fast_call_passes() {
        let handler = TimeoutHandler::new(|_: ()| async {}, Duration::from_secs(1));
        assert!(handler.call(()).await.is_ok());
    }

    #[tokio::test]
    async fn slow_call_times_out() {
        let handler = TimeoutHandler::new(
            |_: ()| tokio::time::sleep(Duration::from_secs(60)),
            Duration::from_millis(10),
        );
        let err = handler.call(()).await.unwrap_err();
        let timeout = err.downcast_ref::<TimeoutError>().unwrap();
        assert_eq!(timeout.0, Duration::from_millis(10));
    }

    #[tokio::test]
    async fn inner_error_is_kept() {
        let handler = TimeoutHandler::new(
            |_: ()| async { Err::<(), BoxError>("inner".into()) },
            Duration::from_secs(1),
        );
        assert_eq!(handler.call(()).await.unwrap_err().to_string(), "inner");
    }
}
