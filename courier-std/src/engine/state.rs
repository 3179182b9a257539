//! Lifecycle state shared between an engine and its handles.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Where an engine is in its lifecycle.
///
/// Transitions only move forward: `Idle -> Running -> Stopping -> Stopped`,
/// or `Idle -> Stopped` when stopped before it ever ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EngineState {
    /// Constructed, not yet running.
    Idle,
    /// Producer and workers are live.
    Running,
    /// Cancellation requested; workers are draining the queue.
    Stopping,
    /// Every task has exited.
    Stopped,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Stopping => "stopping",
            Self::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub(crate) struct Shared {
    pub(crate) cancel: CancellationToken,
    state: watch::Sender<EngineState>,
    cursor: AtomicI64,
}

impl Shared {
    pub(crate) fn new(offset: i64) -> Arc<Self> {
        let (state, _) = watch::channel(EngineState::Idle);
        Arc::new(Self {
            cancel: CancellationToken::new(),
            state,
            cursor: AtomicI64::new(offset),
        })
    }

    pub(crate) fn state(&self) -> EngineState {
        *self.state.borrow()
    }

    /// `Idle -> Running`. Fails with the current state otherwise.
    pub(crate) fn begin(&self) -> Result<(), EngineState> {
        let mut current = EngineState::Idle;
        let started = self.state.send_if_modified(|state| {
            current = *state;
            if *state == EngineState::Idle {
                *state = EngineState::Running;
                true
            } else {
                false
            }
        });
        if started { Ok(()) } else { Err(current) }
    }

    /// Cancel, moving `Running` to `Stopping` and `Idle` straight to
    /// `Stopped`.
    pub(crate) fn request_stop(&self) {
        self.state.send_if_modified(|state| match *state {
            EngineState::Idle => {
                *state = EngineState::Stopped;
                true
            }
            EngineState::Running => {
                *state = EngineState::Stopping;
                true
            }
            EngineState::Stopping | EngineState::Stopped => false,
        });
        self.cancel.cancel();
    }

    pub(crate) fn finish(&self) {
        self.cancel.cancel();
        self.state.send_if_modified(|state| {
            if *state == EngineState::Stopped {
                false
            } else {
                *state = EngineState::Stopped;
                true
            }
        });
    }

    pub(crate) fn cursor(&self) -> i64 {
        self.cursor.load(Ordering::Acquire)
    }

    /// Move the cursor forward to `next`. Never moves it back.
    pub(crate) fn publish_cursor(&self, next: i64) {
        self.cursor.fetch_max(next, Ordering::AcqRel);
    }

    async fn stopped(&self) {
        let mut rx = self.state.subscribe();
        // The sender lives in `self`, so the channel cannot close under us.
        let _ = rx.wait_for(|state| *state == EngineState::Stopped).await;
    }
}

/// Marks the engine stopped when `run` returns or its future is dropped.
pub(crate) struct FinishGuard(pub(crate) Arc<Shared>);

impl Drop for FinishGuard {
    fn drop(&mut self) {
        self.0.finish();
    }
}

/// Remote control for an [`Engine`](super::Engine).
///
/// Handles are cheap to clone and stay valid after the engine is consumed by
/// [`run`](super::Engine::run).
#[derive(Debug, Clone)]
pub struct EngineHandle {
    shared: Arc<Shared>,
}

impl EngineHandle {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    /// Cancel the engine and wait until every task has exited.
    ///
    /// Idempotent. On an engine that never ran this moves it straight to
    /// [`EngineState::Stopped`]. Calling this from inside a handler waits on
    /// itself; use [`cancel`](Self::cancel) there instead.
    pub async fn stop(&self) {
        self.shared.request_stop();
        self.shared.stopped().await;
    }

    /// Signal cancellation without waiting.
    pub fn cancel(&self) {
        self.shared.request_stop();
    }

    /// Wait until the engine reaches [`EngineState::Stopped`].
    pub async fn stopped(&self) {
        self.shared.stopped().await;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.shared.state()
    }

    /// Current cursor: the identifier of the next event to request.
    pub fn cursor(&self) -> i64 {
        self.shared.cursor()
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.shared.cancel.is_cancelled()
    }
}
