//! # Dispatch Engine
//!
//! Pulls ordered event batches from a [`Fetcher`] and hands each event to a
//! [`Handler`] on a fixed pool of workers.
//!
//! ```text
//! fetcher ──> producer ──> bounded queue ──> worker 0..N ──> handler
//!                │
//!                └── cursor (published through EngineHandle)
//! ```
//!
//! # Delivery
//!
//! - Events are enqueued in fetch order. With one worker they are also
//!   handled in that order; with more, handling order is not guaranteed.
//! - The cursor moves past an event as soon as it is enqueued. Every enqueued
//!   event, including one whose push completes as cancellation arrives, is
//!   handled before `run` returns (`enqueued == handled + failed + panicked`),
//!   but a process crash between enqueue and handling loses them: delivery
//!   is at-least-once only for events that reach a worker.
//! - A full queue blocks the producer, so fetching never outruns the pool by
//!   more than the queue capacity.
//! - Fetch errors are logged and retried immediately. Handler errors and
//!   panics are logged and cost only the event involved.
//!
//! # Example
//!
//! ```rust
//! use courier_core::{BoxError, FetchRequest, Message, Sequenced};
//! use courier_std::engine::{Engine, EngineConfig};
//!
//! #[derive(Debug)]
//! struct Tick(i64);
//!
//! impl Message for Tick {}
//!
//! impl Sequenced for Tick {
//!     fn sequence_id(&self) -> i64 {
//!         self.0
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = Engine::<Tick>::new(EngineConfig::default())?;
//! let handle = engine.handle();
//!
//! let fetcher = move |request: FetchRequest| {
//!     let handle = handle.clone();
//!     async move {
//!         if request.offset >= 3 {
//!             handle.cancel();
//!             return Ok(Vec::new());
//!         }
//!         Ok::<_, BoxError>(vec![Tick(request.offset), Tick(request.offset + 1)])
//!     }
//! };
//!
//! let summary = engine.run(fetcher, |tick: Tick| async move {
//!     println!("tick {}", tick.0);
//! }).await?;
//! assert_eq!(summary.handled, 4);
//! assert_eq!(summary.cursor, 4);
//! # Ok(())
//! # }
//! ```

mod config;
mod producer;
pub mod queue;
mod state;
mod worker;

pub use config::{EngineConfig, MAX_BATCH_LIMIT, MAX_QUEUE_CAPACITY};
pub use state::{EngineHandle, EngineState};

use courier_core::{ConfigError, Fetcher, Handler, Sequenced};
use producer::{ProducerStats, produce};
use state::{FinishGuard, Shared};
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::task::{JoinError, JoinSet};
use tracing::{Instrument, error, info, info_span};
use worker::{WorkerStats, work};

/// Errors returned by [`Engine::run`].
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// `run` was called on an engine that already ran or was stopped.
    #[error("engine is {0}, only an idle engine can run")]
    NotIdle(EngineState),

    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The producer or a worker task itself panicked or was aborted.
    #[error("engine task failed: {0}")]
    Task(#[from] JoinError),
}

/// Totals reported once every engine task has exited.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Fetch calls that completed, successful or not.
    pub fetches: u64,
    /// Fetch calls that returned an error.
    pub fetch_errors: u64,
    /// Events pushed onto the queue.
    pub enqueued: u64,
    /// Handler calls that succeeded.
    pub handled: u64,
    /// Handler calls that returned an error.
    pub failed: u64,
    /// Handler calls that panicked.
    pub panicked: u64,
    /// Cursor after the last enqueue.
    pub cursor: i64,
}

impl RunSummary {
    fn absorb(&mut self, report: TaskReport) {
        match report {
            TaskReport::Producer(stats) => {
                self.fetches += stats.fetches;
                self.fetch_errors += stats.fetch_errors;
                self.enqueued += stats.enqueued;
            }
            TaskReport::Worker(stats) => {
                self.handled += stats.handled;
                self.failed += stats.failed;
                self.panicked += stats.panicked;
            }
        }
    }
}

enum TaskReport {
    Producer(ProducerStats),
    Worker(WorkerStats),
}

/// A cursor-driven fetch loop feeding a bounded worker pool.
///
/// An engine runs once: [`run`](Self::run) consumes it. Control it from
/// elsewhere through an [`EngineHandle`].
pub struct Engine<E> {
    config: EngineConfig,
    shared: Arc<Shared>,
    _event: PhantomData<fn() -> E>,
}

impl<E> std::fmt::Debug for Engine<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("state", &self.shared.state())
            .field("cursor", &self.shared.cursor())
            .finish()
    }
}

impl<E: Sequenced> Engine<E> {
    /// Validate `config` and build an idle engine.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let config = config.validate::<E>()?;
        let shared = Shared::new(config.offset);
        Ok(Self {
            config,
            shared,
            _event: PhantomData,
        })
    }

    /// A handle to observe and stop this engine.
    pub fn handle(&self) -> EngineHandle {
        EngineHandle::new(Arc::clone(&self.shared))
    }

    /// The validated configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run until cancelled, then drain the queue and return.
    ///
    /// Spawns one producer and `concurrency` workers on the current tokio
    /// runtime. Returns once all of them have exited. If a task itself fails
    /// the others are cancelled, allowed to drain, and the first failure is
    /// returned.
    pub async fn run<F, H>(self, fetcher: F, handler: H) -> Result<RunSummary, EngineError>
    where
        F: Fetcher<E>,
        H: Handler<E>,
    {
        let Self { config, shared, .. } = self;
        shared.begin().map_err(EngineError::NotIdle)?;
        let _finish = FinishGuard(Arc::clone(&shared));

        info!(
            concurrency = config.concurrency,
            queue_capacity = config.queue_capacity,
            offset = shared.cursor(),
            "engine starting"
        );

        let config = Arc::new(config);
        let fetcher = Arc::new(fetcher);
        let handler = Arc::new(handler);
        let (tx, rx) = queue::bounded(config.queue_capacity);
        let mut tasks = JoinSet::new();

        {
            let config = Arc::clone(&config);
            let shared = Arc::clone(&shared);
            tasks.spawn(
                async move { TaskReport::Producer(produce(&*fetcher, tx, &config, &shared).await) }
                    .instrument(info_span!("producer")),
            );
        }

        for id in 0..config.concurrency {
            let handler = Arc::clone(&handler);
            let queue = rx.clone();
            tasks.spawn(
                async move { TaskReport::Worker(work(&*handler, queue).await) }
                    .instrument(info_span!("worker", id)),
            );
        }
        drop(rx);

        let mut summary = RunSummary::default();
        let mut failure = None;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(report) => summary.absorb(report),
                Err(err) => {
                    error!(error = %err, "engine task failed, stopping");
                    shared.request_stop();
                    failure.get_or_insert(err);
                }
            }
        }
        summary.cursor = shared.cursor();

        info!(
            cursor = summary.cursor,
            handled = summary.handled,
            failed = summary.failed,
            panicked = summary.panicked,
            "engine stopped"
        );

        match failure {
            Some(err) => Err(EngineError::Task(err)),
            None => Ok(summary),
        }
    }
}
