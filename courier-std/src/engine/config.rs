//! Engine configuration.

use courier_core::{ConfigError, FetchRequest, Sequenced};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::Semaphore;

/// Largest batch the remote side hands out per fetch.
pub const MAX_BATCH_LIMIT: u32 = 100;

/// Largest queue capacity; the bounded channel cannot hold more permits.
pub const MAX_QUEUE_CAPACITY: usize = Semaphore::MAX_PERMITS;

/// Tuning knobs for an [`Engine`](super::Engine).
///
/// Every field has a default, so a partial document deserializes:
///
/// ```rust
/// use courier_std::engine::EngineConfig;
///
/// let config: EngineConfig = serde_json::from_str(r#"{"concurrency": 4}"#).unwrap();
/// assert_eq!(config.concurrency, 4);
/// assert_eq!(config.queue_capacity, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of worker tasks. Zero is coerced to one with a warning.
    pub concurrency: usize,
    /// Events buffered between the producer and the workers.
    pub queue_capacity: usize,
    /// Cursor to start from. Zero lets the remote side pick its oldest
    /// unconfirmed event.
    pub offset: i64,
    /// Batch size requested per fetch.
    pub limit: u32,
    /// Long-poll timeout in seconds.
    pub timeout_secs: u64,
    /// Event kinds to receive; empty means the remote default.
    pub allowed_updates: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            concurrency: 1,
            queue_capacity: 100,
            offset: 0,
            limit: MAX_BATCH_LIMIT,
            timeout_secs: 30,
            allowed_updates: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Set the worker count.
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set the queue capacity.
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Set the starting cursor.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the batch size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the long-poll timeout. Sub-second precision is dropped.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Set the event kinds to receive.
    pub fn allowed_updates<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_updates = kinds.into_iter().map(Into::into).collect();
        self
    }

    /// Long-poll timeout as a [`Duration`].
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check the configuration for event type `E`.
    ///
    /// A worker count of zero is the one value that gets corrected instead
    /// of rejected.
    pub fn validate<E: Sequenced>(mut self) -> Result<Self, ConfigError> {
        if self.concurrency == 0 {
            tracing::warn!("concurrency of 0 requested, running a single worker");
            self.concurrency = 1;
        }
        if self.queue_capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }
        if self.queue_capacity > MAX_QUEUE_CAPACITY {
            return Err(ConfigError::QueueTooLarge {
                capacity: self.queue_capacity,
                max: MAX_QUEUE_CAPACITY,
            });
        }
        if self.queue_capacity < self.concurrency {
            return Err(ConfigError::QueueSmallerThanPool {
                capacity: self.queue_capacity,
                concurrency: self.concurrency,
            });
        }
        if !(1..=MAX_BATCH_LIMIT).contains(&self.limit) {
            return Err(ConfigError::BatchLimit(self.limit));
        }
        if !E::KINDS.is_empty() {
            if let Some(unknown) = self
                .allowed_updates
                .iter()
                .find(|kind| !E::KINDS.contains(&kind.as_str()))
            {
                return Err(ConfigError::UnknownUpdateType(unknown.clone()));
            }
        }
        Ok(self)
    }

    pub(crate) fn request(&self, offset: i64) -> FetchRequest {
        FetchRequest {
            offset,
            limit: self.limit,
            timeout: self.poll_timeout(),
            allowed_updates: self.allowed_updates.iter().cloned().collect(),
        }
    }
}
