//! Span-per-update instrumentation.

use courier_core::{BoxError, Handler, Sequenced};
use tracing::Instrument;

/// A handler wrapper that runs every call inside an `update` span carrying
/// the update id and kind.
///
/// Outcomes are logged at `debug` only; the engine's worker already reports
/// failures at `error`.
pub struct TracingHandler<H> {
    inner: H,
}

impl<H> TracingHandler<H> {
    /// Wrap `inner`.
    pub const fn new(inner: H) -> Self {
        Self { inner }
    }

    /// The wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H: Clone> Clone for TracingHandler<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E, H> Handler<E> for TracingHandler<H>
where
    E: Sequenced,
    H: Handler<E>,
{
    async fn call(&self, event: E) -> Result<(), BoxError> {
        let span = tracing::info_span!(
            "update",
            update_id = event.sequence_id(),
            kind = %event.kind()
        );

        async move {
            let result = self.inner.call(event).await;
            match &result {
                Ok(()) => tracing::debug!("handled"),
                Err(err) => tracing::debug!(error = %err, "handler returned an error"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::Message;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Records the level of every event.
    #[derive(Clone, Default)]
    struct Levels(Arc<Mutex<Vec<Level>>>);

    impl<S: tracing::Subscriber> Layer<S> for Levels {
        fn on_event(&self, event: &tracing::Event<'_>, _: Context<'_, S>) {
            self.0.lock().unwrap().push(*event.metadata().level());
        }
    }

    #[derive(Debug)]
    struct Ping(i64);

    impl Message for Ping {}

    impl Sequenced for Ping {
        fn sequence_id(&self) -> i64 {
            self.0
        }

        fn kind(&self) -> &str {
            "ping"
        }
    }

    #[tokio::test]
    async fn passes_through_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler = TracingHandler::new({
            let calls = Arc::clone(&calls);
            move |_: Ping| {
                calls.fetch_add(1, Ordering::SeqCst);
                async {}
            }
        });

        handler.call(Ping(1)).await.unwrap();
        handler.call(Ping(2)).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn passes_through_errors() {
        let handler = TracingHandler::new(|_: Ping| async { Err::<(), BoxError>("nope".into()) });
        let err = handler.call(Ping(9)).await.unwrap_err();
        assert_eq!(err.to_string(), "nope");
    }

    #[tokio::test]
    async fn failures_are_left_to_the_worker_log() {
        let levels = Levels::default();
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(levels.clone()));

        let handler = TracingHandler::new(|_: Ping| async { Err::<(), BoxError>("nope".into()) });
        assert!(handler.call(Ping(3)).await.is_err());

        assert_eq!(*levels.0.lock().unwrap(), vec![Level::DEBUG]);
    }
}
