//! Testing utilities for courier.
//!
//! Scripted fetchers and instrumented handlers for exercising an
//! [`Engine`](crate::engine::Engine) without a network.
//!
//! # Features
//!
//! - [`ScriptedFetcher`]: plays back a fixed list of batches and errors
//! - [`RecordingHandler`]: records every event it receives
//! - [`CountingHandler`]: counts invocations
//! - [`GatedHandler`]: holds calls until released
//! - [`FailingHandler`]: errors or panics on chosen updates

use crate::engine::EngineHandle;
use courier_core::{BoxError, FetchRequest, Fetcher, Handler, Message, Sequenced};
use std::{
    collections::{HashSet, VecDeque},
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};
use tokio::sync::{Semaphore, watch};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Scripted Fetcher
// ============================================================================

enum Step<E> {
    Batch(Vec<E>),
    Error(String),
}

struct Script<E> {
    steps: Mutex<VecDeque<Step<E>>>,
    requests: Mutex<Vec<FetchRequest>>,
    on_exhausted: Mutex<Option<EngineHandle>>,
}

/// A fetcher that plays back a fixed script.
///
/// Each fetch consumes one step. Once the script is exhausted the fetcher
/// either cancels the engine (see [`then_cancel`](Self::then_cancel)) and
/// returns an empty batch, or behaves like an idle long poll: it waits out
/// `request.timeout` and returns nothing.
///
/// Clones share one script, so a test can keep a clone to inspect the
/// requests after the engine consumed the original. Steps appended through
/// any clone are visible to all of them.
///
/// # Example
///
/// ```rust,ignore
/// let fetcher = ScriptedFetcher::new()
///     .batch(vec![update(10), update(11)])
///     .batch(vec![])
///     .then_cancel(engine.handle());
/// engine.run(fetcher.clone(), handler).await?;
/// assert_eq!(fetcher.offsets(), vec![0, 12, 12]);
/// ```
pub struct ScriptedFetcher<E> {
    script: Arc<Script<E>>,
}

impl<E> ScriptedFetcher<E> {
    /// An empty script.
    pub fn new() -> Self {
        Self {
            script: Arc::new(Script {
                steps: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
                on_exhausted: Mutex::new(None),
            }),
        }
    }

    /// Append a successful batch.
    pub fn batch(self, events: Vec<E>) -> Self {
        lock(&self.script.steps).push_back(Step::Batch(events));
        self
    }

    /// Append a failing fetch.
    pub fn error(self, message: impl Into<String>) -> Self {
        lock(&self.script.steps).push_back(Step::Error(message.into()));
        self
    }

    /// Cancel the engine behind `handle` once the script runs out.
    pub fn then_cancel(self, handle: EngineHandle) -> Self {
        *lock(&self.script.on_exhausted) = Some(handle);
        self
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<FetchRequest> {
        lock(&self.script.requests).clone()
    }

    /// The offset of every request received so far.
    pub fn offsets(&self) -> Vec<i64> {
        lock(&self.script.requests)
            .iter()
            .map(|request| request.offset)
            .collect()
    }

    /// Number of fetch calls so far.
    pub fn calls(&self) -> usize {
        lock(&self.script.requests).len()
    }

    /// Steps not yet played.
    pub fn remaining(&self) -> usize {
        lock(&self.script.steps).len()
    }
}

impl<E> Default for ScriptedFetcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for ScriptedFetcher<E> {
    fn clone(&self) -> Self {
        Self {
            script: Arc::clone(&self.script),
        }
    }
}

impl<E: Message> Fetcher<E> for ScriptedFetcher<E> {
    async fn fetch(&self, request: FetchRequest) -> Result<Vec<E>, BoxError> {
        let idle = request.timeout.max(Duration::from_millis(1));
        lock(&self.script.requests).push(request);

        let step = lock(&self.script.steps).pop_front();
        match step {
            Some(Step::Batch(events)) => Ok(events),
            Some(Step::Error(message)) => Err(message.into()),
            None => {
                let handle = lock(&self.script.on_exhausted).clone();
                match handle {
                    Some(handle) => handle.cancel(),
                    None => tokio::time::sleep(idle).await,
                }
                Ok(Vec::new())
            }
        }
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

struct Recording<E> {
    events: Mutex<Vec<E>>,
    count: watch::Sender<usize>,
}

/// A handler that records every event it receives.
///
/// Useful for asserting on delivery order and completeness.
pub struct RecordingHandler<E> {
    recording: Arc<Recording<E>>,
}

impl<E> RecordingHandler<E> {
    /// Create a new recording handler.
    pub fn new() -> Self {
        let (count, _) = watch::channel(0);
        Self {
            recording: Arc::new(Recording {
                events: Mutex::new(Vec::new()),
                count,
            }),
        }
    }

    /// Get the number of recorded events.
    pub fn count(&self) -> usize {
        lock(&self.recording.events).len()
    }

    /// Wait until at least `n` events have been recorded.
    pub async fn wait_for_count(&self, n: usize) {
        let mut rx = self.recording.count.subscribe();
        // The sender is owned by `self`, so the channel stays open.
        let _ = rx.wait_for(|count| *count >= n).await;
    }

    fn record(&self, event: E) {
        let mut events = lock(&self.recording.events);
        events.push(event);
        let len = events.len();
        drop(events);
        self.recording.count.send_replace(len);
    }
}

impl<E: Clone> RecordingHandler<E> {
    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<E> {
        lock(&self.recording.events).clone()
    }
}

impl<E: Sequenced> RecordingHandler<E> {
    /// Sequence ids of the recorded events, in handling order.
    pub fn ids(&self) -> Vec<i64> {
        lock(&self.recording.events)
            .iter()
            .map(Sequenced::sequence_id)
            .collect()
    }
}

impl<E> Default for RecordingHandler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for RecordingHandler<E> {
    fn clone(&self) -> Self {
        Self {
            recording: Arc::clone(&self.recording),
        }
    }
}

impl<E: Message> Handler<E> for RecordingHandler<E> {
    async fn call(&self, event: E) -> Result<(), BoxError> {
        self.record(event);
        Ok(())
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations.
#[derive(Debug, Clone, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<E: Message> Handler<E> for CountingHandler {
    async fn call(&self, _event: E) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Gated Handler
// ============================================================================

/// A handler wrapper that holds every call until a permit is released.
///
/// Calls enter, count themselves as started, then wait on the gate. Use
/// [`release`](Self::release) to let a fixed number through or
/// [`open`](Self::open) to let everything through from then on.
pub struct GatedHandler<H> {
    inner: H,
    gate: Arc<Semaphore>,
    started: Arc<AtomicUsize>,
}

impl<H> GatedHandler<H> {
    /// Wrap `inner` behind a closed gate.
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            gate: Arc::new(Semaphore::new(0)),
            started: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Let `n` more calls through.
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }

    /// Let every current and future call through.
    pub fn open(&self) {
        self.gate.close();
    }

    /// Calls that have entered, whether or not they passed the gate.
    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }
}

impl<H: Clone> Clone for GatedHandler<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            gate: Arc::clone(&self.gate),
            started: Arc::clone(&self.started),
        }
    }
}

impl<E: Message, H: Handler<E>> Handler<E> for GatedHandler<H> {
    async fn call(&self, event: E) -> Result<(), BoxError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        // A closed gate means open: every acquire fails immediately.
        if let Ok(permit) = self.gate.acquire().await {
            permit.forget();
        }
        self.inner.call(event).await
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A handler that errors or panics on chosen sequence ids and succeeds on
/// the rest. Every call is recorded, including the failing ones.
#[derive(Debug, Clone, Default)]
pub struct FailingHandler {
    fail_on: HashSet<i64>,
    panic_on: HashSet<i64>,
    calls: Arc<Mutex<Vec<i64>>>,
}

impl FailingHandler {
    /// A handler that succeeds on everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return an error for these ids.
    pub fn fail_on(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.fail_on.extend(ids);
        self
    }

    /// Panic for these ids.
    pub fn panic_on(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.panic_on.extend(ids);
        self
    }

    /// Ids of every call so far, in call order.
    pub fn calls(&self) -> Vec<i64> {
        lock(&self.calls).clone()
    }
}

impl<E: Sequenced> Handler<E> for FailingHandler {
    async fn call(&self, event: E) -> Result<(), BoxError> {
        let id = event.sequence_id();
        lock(&self.calls).push(id);
        if self.panic_on.contains(&id) {
            panic!("scripted panic for update {id}");
        }
        if self.fail_on.contains(&id) {
            return Err(format!("scripted failure for update {id}").into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tick(i64);

    impl Message for Tick {}

    impl Sequenced for Tick {
        fn sequence_id(&self) -> i64 {
            self.0
        }
    }

    fn request(offset: i64) -> FetchRequest {
        FetchRequest {
            offset,
            limit: 100,
            timeout: Duration::from_millis(1),
            allowed_updates: Arc::from([]),
        }
    }

    #[tokio::test]
    async fn scripted_fetcher_plays_back_in_order() {
        let fetcher = ScriptedFetcher::new()
            .batch(vec![Tick(1)])
            .error("flaky")
            .batch(vec![]);
        let observer = fetcher.clone();

        assert_eq!(fetcher.fetch(request(0)).await.unwrap(), vec![Tick(1)]);
        assert_eq!(fetcher.fetch(request(2)).await.unwrap_err().to_string(), "flaky");
        assert!(fetcher.fetch(request(2)).await.unwrap().is_empty());
        assert_eq!(observer.remaining(), 0);
        assert!(fetcher.fetch(request(2)).await.unwrap().is_empty());

        assert_eq!(observer.offsets(), vec![0, 2, 2, 2]);
        assert_eq!(observer.calls(), 4);
    }

    #[tokio::test]
    async fn recording_handler_wakes_waiters() {
        let recorder = RecordingHandler::<Tick>::new();
        let waiter = tokio::spawn({
            let recorder = recorder.clone();
            async move { recorder.wait_for_count(2).await }
        });

        recorder.call(Tick(1)).await.unwrap();
        recorder.call(Tick(2)).await.unwrap();
        waiter.await.unwrap();

        assert_eq!(recorder.ids(), vec![1, 2]);
        assert_eq!(recorder.events(), vec![Tick(1), Tick(2)]);
    }

    #[tokio::test]
    async fn gated_handler_holds_until_released() {
        let counter = CountingHandler::new();
        let gated = GatedHandler::new(counter.clone());

        let call = tokio::spawn({
            let gated = gated.clone();
            async move { gated.call(Tick(1)).await }
        });
        while gated.started() == 0 {
            tokio::task::yield_now().await;
        }
        assert_eq!(counter.count(), 0);

        gated.release(1);
        call.await.unwrap().unwrap();
        assert_eq!(counter.count(), 1);

        gated.open();
        gated.call(Tick(2)).await.unwrap();
        assert_eq!(counter.count(), 2);
    }

    #[tokio::test]
    async fn failing_handler_follows_script() {
        let handler = FailingHandler::new().fail_on([2]);
        assert!(handler.call(Tick(1)).await.is_ok());
        assert!(handler.call(Tick(2)).await.is_err());
        assert_eq!(handler.calls(), vec![1, 2]);
    }
}
