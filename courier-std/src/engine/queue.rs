//! The bounded queue between the producer and the workers.
//!
//! One sender, many receivers. Pushing waits while the queue is full, so a
//! slow worker pool throttles fetching instead of losing events. Receivers
//! only stop once the sender is dropped, so every enqueued event is popped.

use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;

/// Why an event was not enqueued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushError {
    /// Cancellation won the race against a free slot.
    Cancelled,
    /// Every receiver is gone.
    Closed,
}

/// Create a queue holding at most `capacity` events.
///
/// # Panics
///
/// Panics if `capacity` is zero; the engine validates this beforehand.
pub fn bounded<E>(capacity: usize) -> (QueueSender<E>, QueueReceiver<E>) {
    let (tx, rx) = mpsc::channel(capacity);
    (
        QueueSender { tx },
        QueueReceiver {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

/// Producer side of the queue.
#[derive(Debug)]
pub struct QueueSender<E> {
    tx: mpsc::Sender<E>,
}

impl<E> QueueSender<E> {
    /// Enqueue `event`, waiting for a free slot unless `cancel` fires first.
    ///
    /// An already cancelled token always wins, so nothing is enqueued after
    /// cancellation.
    pub async fn push(&self, event: E, cancel: &CancellationToken) -> Result<(), PushError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(PushError::Cancelled),
            sent = self.tx.send(event) => sent.map_err(|_| PushError::Closed),
        }
    }

    /// Free slots right now.
    pub fn available(&self) -> usize {
        self.tx.capacity()
    }
}

/// Worker side of the queue. Clones share one underlying receiver.
#[derive(Debug)]
pub struct QueueReceiver<E> {
    rx: Arc<Mutex<mpsc::Receiver<E>>>,
}

impl<E> Clone for QueueReceiver<E> {
    fn clone(&self) -> Self {
        Self {
            rx: Arc::clone(&self.rx),
        }
    }
}

impl<E> QueueReceiver<E> {
    /// Dequeue the next event.
    ///
    /// Returns `None` only once the sender is gone and the queue is drained.
    /// A push that completes after cancellation is still handed out; the
    /// producer drops its sender when it sees cancellation, ending the wait.
    pub async fn pop(&self) -> Option<E> {
        self.rx.lock().await.recv().await
    }
}
