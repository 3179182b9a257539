//! Standard fetcher wrappers.

mod backoff;

pub use backoff::Backoff;
