use courier::engine::{Engine, EngineConfig, EngineError, EngineState};
use courier::testing::{
    CountingHandler, FailingHandler, GatedHandler, RecordingHandler, ScriptedFetcher,
};
use courier::types::Update;
use courier::{BoxError, ConfigError, FetchRequest, Sequenced};
use std::time::Duration;

mod common;
use common::{raw_update, text_update, text_updates};

const PATIENCE: Duration = Duration::from_secs(5);

// ============================================================================
// Ordering and Cursor
// ============================================================================

#[tokio::test]
async fn single_worker_handles_in_order_and_advances_cursor() {
    let engine = Engine::<Update>::new(EngineConfig::default()).unwrap();
    let handle = engine.handle();
    let fetcher = ScriptedFetcher::new()
        .batch(text_updates([10, 11]))
        .batch(vec![])
        .then_cancel(handle.clone());
    let handler = RecordingHandler::new();

    let summary = engine.run(fetcher.clone(), handler.clone()).await.unwrap();

    assert_eq!(handler.ids(), vec![10, 11]);
    assert_eq!(summary.cursor, 12);
    assert_eq!(handle.cursor(), 12);
    assert_eq!(fetcher.offsets(), vec![0, 12, 12]);
    assert_eq!(handle.state(), EngineState::Stopped);
}

#[tokio::test]
async fn cursor_never_moves_backwards() {
    let engine = Engine::<Update>::new(EngineConfig::default().offset(5)).unwrap();
    let handle = engine.handle();
    // The second batch replays stale ids below the cursor.
    let fetcher = ScriptedFetcher::new()
        .batch(text_updates([5, 6, 7]))
        .batch(vec![raw_update(3), raw_update(8)])
        .then_cancel(handle.clone());
    let handler = RecordingHandler::new();

    let summary = engine.run(fetcher.clone(), handler.clone()).await.unwrap();

    assert_eq!(fetcher.offsets(), vec![5, 8, 9]);
    assert_eq!(summary.cursor, 9);
    assert_eq!(handler.count(), 5);
}

#[tokio::test]
async fn request_carries_config() {
    let config = EngineConfig::default()
        .limit(20)
        .timeout(Duration::from_secs(3))
        .allowed_updates(["message", "callback_query"]);
    let engine = Engine::<Update>::new(config).unwrap();
    let fetcher = ScriptedFetcher::new().then_cancel(engine.handle());

    engine.run(fetcher.clone(), CountingHandler::new()).await.unwrap();

    let requests: Vec<FetchRequest> = fetcher.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].limit, 20);
    assert_eq!(requests[0].timeout, Duration::from_secs(3));
    assert_eq!(&*requests[0].allowed_updates, ["message", "callback_query"]);
}

// ============================================================================
// Backpressure and Draining
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn full_queue_blocks_fetching() {
    let config = EngineConfig::default().concurrency(1).queue_capacity(2);
    let engine = Engine::<Update>::new(config).unwrap();
    let handle = engine.handle();
    let fetcher = ScriptedFetcher::new().batch(text_updates(0..5));
    let recording = RecordingHandler::new();
    let gated = GatedHandler::new(recording.clone());

    let run = tokio::spawn(engine.run(fetcher.clone(), gated.clone()));
    tokio::time::sleep(Duration::from_millis(50)).await;

    // One event held by the worker, two queued, the producer parked on the
    // fourth: the cursor has only moved past what was enqueued.
    assert_eq!(gated.started(), 1);
    assert_eq!(handle.cursor(), 3);
    assert_eq!(fetcher.calls(), 1);

    gated.open();
    tokio::time::timeout(PATIENCE, recording.wait_for_count(5))
        .await
        .expect("all updates handled");
    assert_eq!(recording.ids(), vec![0, 1, 2, 3, 4]);

    handle.stop().await;
    let summary = run.await.unwrap().unwrap();
    assert_eq!(summary.handled, 5);
    assert_eq!(summary.cursor, 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn queued_updates_are_drained_after_stop() {
    let config = EngineConfig::default().concurrency(1).queue_capacity(4);
    let engine = Engine::<Update>::new(config).unwrap();
    let handle = engine.handle();
    let fetcher = ScriptedFetcher::new().batch(text_updates(1..=4));
    let recording = RecordingHandler::new();
    let gated = GatedHandler::new(recording.clone());

    let run = tokio::spawn(engine.run(fetcher, gated.clone()));
    while handle.cursor() < 5 || gated.started() < 1 {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    handle.cancel();
    assert_eq!(handle.state(), EngineState::Stopping);
    gated.open();

    let summary = tokio::time::timeout(PATIENCE, run)
        .await
        .expect("run returns after stop")
        .unwrap()
        .unwrap();
    // Everything past the cursor reached the handler.
    assert_eq!(recording.ids(), vec![1, 2, 3, 4]);
    assert_eq!(summary.handled, 4);
    assert_eq!(summary.cursor, 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn cancelling_mid_push_loses_nothing() {
    for round in 0..200 {
        let config = EngineConfig::default().concurrency(1).queue_capacity(1);
        let engine = Engine::<Update>::new(config).unwrap();
        let handle = engine.handle();
        // Endless supply, so the producer is always parked in a push.
        let fetcher = |request: FetchRequest| async move {
            Ok::<_, BoxError>(text_updates(request.offset..request.offset + 8))
        };
        let handler = FailingHandler::new().fail_on([3]);

        let run = tokio::spawn(engine.run(fetcher, handler.clone()));
        while handler.calls().len() < 1 + round % 4 {
            tokio::task::yield_now().await;
        }
        handle.cancel();

        let summary = tokio::time::timeout(PATIENCE, run)
            .await
            .expect("run returns after cancel")
            .unwrap()
            .unwrap();
        let calls = handler.calls();
        assert_eq!(
            summary.enqueued,
            summary.handled + summary.failed + summary.panicked,
            "round {round}"
        );
        assert_eq!(calls.len() as u64, summary.enqueued, "round {round}");
        assert_eq!(
            summary.cursor,
            calls.last().map_or(0, |id| id + 1),
            "round {round}"
        );
    }
}

// ============================================================================
// Stop Semantics
// ============================================================================

#[tokio::test]
async fn stop_is_idempotent() {
    let engine = Engine::<Update>::new(EngineConfig::default()).unwrap();
    let handle = engine.handle();
    let run = tokio::spawn(engine.run(ScriptedFetcher::new(), CountingHandler::new()));

    while handle.state() != EngineState::Running {
        tokio::task::yield_now().await;
    }
    handle.stop().await;
    handle.stop().await;
    handle.cancel();

    assert_eq!(handle.state(), EngineState::Stopped);
    assert!(run.await.unwrap().is_ok());
}

#[tokio::test]
async fn stop_before_run() {
    let engine = Engine::<Update>::new(EngineConfig::default()).unwrap();
    let handle = engine.handle();
    handle.stop().await;
    assert_eq!(handle.state(), EngineState::Stopped);
    assert!(handle.is_cancelled());

    let err = engine
        .run(ScriptedFetcher::new(), CountingHandler::new())
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::NotIdle(EngineState::Stopped)));
}

// ============================================================================
// Failure Isolation
// ============================================================================

#[tokio::test]
async fn handler_errors_and_panics_are_scoped_to_one_update() {
    let engine = Engine::<Update>::new(EngineConfig::default()).unwrap();
    let handle = engine.handle();
    let fetcher = ScriptedFetcher::new()
        .batch(text_updates(1..=5))
        .then_cancel(handle.clone());
    let handler = FailingHandler::new().fail_on([2]).panic_on([4]);

    let summary = engine.run(fetcher, handler.clone()).await.unwrap();

    assert_eq!(handler.calls(), vec![1, 2, 3, 4, 5]);
    assert_eq!(summary.handled, 3);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.panicked, 1);
    assert_eq!(summary.cursor, 6);
}

#[tokio::test]
async fn fetch_errors_are_retried_from_the_same_offset() {
    let engine = Engine::<Update>::new(EngineConfig::default().offset(7)).unwrap();
    let handle = engine.handle();
    let fetcher = ScriptedFetcher::new()
        .error("connection reset")
        .error("502 bad gateway")
        .batch(vec![text_update(7)])
        .then_cancel(handle.clone());
    let handler = RecordingHandler::new();

    let summary = engine.run(fetcher.clone(), handler.clone()).await.unwrap();

    assert_eq!(fetcher.offsets(), vec![7, 7, 7, 8]);
    assert_eq!(summary.fetch_errors, 2);
    assert_eq!(handler.ids(), vec![7]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn worker_pool_handles_everything() {
    let config = EngineConfig::default().concurrency(4).queue_capacity(8);
    let engine = Engine::<Update>::new(config).unwrap();
    let handle = engine.handle();
    let fetcher = ScriptedFetcher::new()
        .batch(text_updates(0..50))
        .batch(text_updates(50..100))
        .then_cancel(handle.clone());
    let handler = RecordingHandler::new();

    let summary = engine.run(fetcher, handler.clone()).await.unwrap();

    let mut ids = handler.ids();
    ids.sort_unstable();
    assert_eq!(ids, (0..100).collect::<Vec<_>>());
    assert_eq!(summary.enqueued, 100);
    assert_eq!(summary.cursor, 100);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn zero_concurrency_becomes_one() {
    let engine = Engine::<Update>::new(EngineConfig::default().concurrency(0)).unwrap();
    assert_eq!(engine.config().concurrency, 1);
}

#[test]
fn invalid_configs_are_rejected() {
    let err = Engine::<Update>::new(EngineConfig::default().queue_capacity(0)).unwrap_err();
    assert_eq!(err, ConfigError::ZeroQueueCapacity);

    let err = Engine::<Update>::new(EngineConfig::default().queue_capacity(usize::MAX))
        .unwrap_err();
    assert!(matches!(err, ConfigError::QueueTooLarge { capacity: usize::MAX, .. }));

    let err = Engine::<Update>::new(EngineConfig::default().concurrency(8).queue_capacity(4))
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::QueueSmallerThanPool {
            capacity: 4,
            concurrency: 8
        }
    );

    let err = Engine::<Update>::new(EngineConfig::default().limit(101)).unwrap_err();
    assert_eq!(err, ConfigError::BatchLimit(101));

    let err = Engine::<Update>::new(EngineConfig::default().allowed_updates(["mesage"]))
        .unwrap_err();
    assert_eq!(err, ConfigError::UnknownUpdateType("mesage".into()));
}

#[test]
fn every_official_kind_is_allowed() {
    let config = EngineConfig::default().allowed_updates(Update::KINDS.iter().copied());
    assert!(Engine::<Update>::new(config).is_ok());
}
