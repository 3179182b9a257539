//! The fetch loop.

use super::config::EngineConfig;
use super::queue::{PushError, QueueSender};
use super::state::Shared;
use courier_core::{FetchRequest, Fetcher, Sequenced};
use tracing::{debug, warn};

/// What the producer did before it exited.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ProducerStats {
    pub(crate) fetches: u64,
    pub(crate) fetch_errors: u64,
    pub(crate) enqueued: u64,
}

/// Fetch batches from the cursor onward and enqueue them in order until
/// cancelled.
///
/// The cursor moves past an event as soon as it is enqueued.
pub(crate) async fn produce<E, F>(
    fetcher: &F,
    queue: QueueSender<E>,
    config: &EngineConfig,
    shared: &Shared,
) -> ProducerStats
where
    E: Sequenced,
    F: Fetcher<E>,
{
    let cancel = &shared.cancel;
    let mut stats = ProducerStats::default();
    let mut cursor = shared.cursor();

    // Only the offset changes between requests; the allow-list is shared.
    let template = config.request(cursor);

    'fetch: while !cancel.is_cancelled() {
        let request = FetchRequest {
            offset: cursor,
            ..template.clone()
        };
        let batch = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            batch = fetcher.fetch(request) => batch,
        };
        stats.fetches += 1;

        let batch = match batch {
            Ok(batch) => batch,
            Err(err) => {
                stats.fetch_errors += 1;
                warn!(offset = cursor, error = %err, "fetch failed, retrying");
                tokio::task::yield_now().await;
                continue;
            }
        };

        if batch.is_empty() {
            tokio::task::yield_now().await;
            continue;
        }

        debug!(offset = cursor, count = batch.len(), "fetched batch");
        for event in batch {
            let next = event.sequence_id().saturating_add(1);
            match queue.push(event, cancel).await {
                Ok(()) => {}
                Err(PushError::Cancelled) => break 'fetch,
                Err(PushError::Closed) => {
                    warn!("every worker is gone, stopping the producer");
                    break 'fetch;
                }
            }
            stats.enqueued += 1;
            if next > cursor {
                cursor = next;
                shared.publish_cursor(cursor);
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::queue;
    use courier_core::{BoxError, Message};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, PartialEq)]
    struct Tick(i64);

    impl Message for Tick {}

    impl Sequenced for Tick {
        fn sequence_id(&self) -> i64 {
            self.0
        }
    }

    #[tokio::test]
    async fn stale_ids_do_not_move_cursor_back() {
        let shared = Shared::new(0);
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let fetcher = {
            let offsets = Arc::clone(&offsets);
            let shared = Arc::clone(&shared);
            move |request: FetchRequest| {
                let offsets = Arc::clone(&offsets);
                let shared = Arc::clone(&shared);
                async move {
                    let mut offsets = offsets.lock().unwrap();
                    offsets.push(request.offset);
                    match offsets.len() {
                        1 => Ok(vec![Tick(5), Tick(3), Tick(6)]),
                        _ => {
                            shared.cancel.cancel();
                            Ok::<_, BoxError>(Vec::new())
                        }
                    }
                }
            }
        };

        let (tx, rx) = queue::bounded(8);
        let stats = produce(&fetcher, tx, &EngineConfig::default(), &shared).await;

        assert_eq!(shared.cursor(), 7);
        assert_eq!(stats.enqueued, 3);
        assert_eq!(*offsets.lock().unwrap(), vec![0, 7]);
        assert_eq!(rx.pop().await, Some(Tick(5)));
        assert_eq!(rx.pop().await, Some(Tick(3)));
        assert_eq!(rx.pop().await, Some(Tick(6)));
    }

    #[tokio::test]
    async fn errors_are_retried_from_same_offset() {
        let shared = Shared::new(40);
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let fetcher = {
            let offsets = Arc::clone(&offsets);
            let shared = Arc::clone(&shared);
            move |request: FetchRequest| {
                let offsets = Arc::clone(&offsets);
                let shared = Arc::clone(&shared);
                async move {
                    let mut offsets = offsets.lock().unwrap();
                    offsets.push(request.offset);
                    if offsets.len() == 3 {
                        shared.cancel.cancel();
                    }
                    Err::<Vec<Tick>, BoxError>("unreachable host".into())
                }
            }
        };

        let (tx, _rx) = queue::bounded(1);
        let stats = produce(&fetcher, tx, &EngineConfig::default(), &shared).await;

        assert_eq!(stats.fetch_errors, 3);
        assert_eq!(*offsets.lock().unwrap(), vec![40, 40, 40]);
        assert_eq!(shared.cursor(), 40);
    }

    #[tokio::test]
    async fn allow_list_is_built_once() {
        let shared = Shared::new(0);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let fetcher = {
            let requests = Arc::clone(&requests);
            let shared = Arc::clone(&shared);
            move |request: FetchRequest| {
                let requests = Arc::clone(&requests);
                let shared = Arc::clone(&shared);
                async move {
                    let mut requests = requests.lock().unwrap();
                    requests.push(request);
                    if requests.len() == 3 {
                        shared.cancel.cancel();
                    }
                    Ok::<_, BoxError>(vec![Tick(requests.len() as i64)])
                }
            }
        };

        let config = EngineConfig::default().allowed_updates(["message"]);
        let (tx, _rx) = queue::bounded(8);
        produce(&fetcher, tx, &config, &shared).await;

        let requests = requests.lock().unwrap();
        assert_eq!(
            requests.iter().map(|r| r.offset).collect::<Vec<_>>(),
            vec![0, 2, 3]
        );
        assert!(
            requests
                .windows(2)
                .all(|pair| Arc::ptr_eq(&pair[0].allowed_updates, &pair[1].allowed_updates))
        );
    }

    #[tokio::test]
    async fn cancellation_abandons_rest_of_batch() {
        let shared = Shared::new(0);
        let fetcher =
            |_: FetchRequest| async { Ok::<_, BoxError>(vec![Tick(1), Tick(2), Tick(3)]) };

        // Room for one event only; the second push blocks until cancelled.
        let (tx, rx) = queue::bounded(1);
        let config = EngineConfig::default();
        let producer = produce(&fetcher, tx, &config, &shared);
        let cancel = shared.cancel.clone();
        let canceller = async {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            cancel.cancel();
        };
        let (stats, ()) = tokio::join!(producer, canceller);

        assert_eq!(stats.enqueued, 1);
        assert_eq!(shared.cursor(), 2);
        assert_eq!(rx.pop().await, Some(Tick(1)));
        assert_eq!(rx.pop().await, None);
    }
}
