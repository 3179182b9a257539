//! Exponential backoff around a failing fetcher.

use courier_core::{BoxError, FetchRequest, Fetcher, Message};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

/// A fetcher wrapper that sleeps after each consecutive failure.
///
/// After the `n`th failure in a row the error is returned only once
/// `min(base * 2^(n-1), max)` has elapsed; a success resets the count. The
/// engine retries failed fetches immediately, so this is where pacing
/// against a struggling remote belongs.
#[derive(Debug)]
pub struct Backoff<F> {
    inner: F,
    base: Duration,
    max: Duration,
    failures: AtomicU32,
}

impl<F> Backoff<F> {
    /// Wrap `inner` with the given initial and maximum delay.
    pub fn new(inner: F, base: Duration, max: Duration) -> Self {
        Self {
            inner,
            base,
            max,
            failures: AtomicU32::new(0),
        }
    }

    /// Failures since the last success.
    pub fn consecutive_failures(&self) -> u32 {
        self.failures.load(Ordering::Acquire)
    }

    /// Delay applied after the `failures`th consecutive failure.
    pub fn delay_for(&self, failures: u32) -> Duration {
        if failures == 0 {
            return Duration::ZERO;
        }
        let factor = 2u32.checked_pow(failures - 1).unwrap_or(u32::MAX);
        self.base.saturating_mul(factor).min(self.max)
    }
}

impl<E: Message, F: Fetcher<E>> Fetcher<E> for Backoff<F> {
    async fn fetch(&self, request: FetchRequest) -> Result<Vec<E>, BoxError> {
        match self.inner.fetch(request).await {
            Ok(batch) => {
                self.failures.store(0, Ordering::Release);
                Ok(batch)
            }
            Err(err) => {
                let failures = self
                    .failures
                    .fetch_add(1, Ordering::AcqRel)
                    .saturating_add(1);
                let delay = self.delay_for(failures);
                tracing::debug!(failures, ?delay, "backing off after fetch error");
                tokio::time::sleep(delay).await;
                Err(err)
            }
        }
    }
}
