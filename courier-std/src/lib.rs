//! # courier-std
//!
//! Standard implementations for the courier bot API client.
//!
//! This crate provides:
//! - **Envelope codec**: [`codec::decode`], [`codec::encode`], [`envelope!`]
//! - **Dispatch engine**: [`engine::Engine`], [`engine::EngineHandle`]
//! - **Handler wrappers**: Tracing, Timeout, Kind routing
//! - **Fetcher wrappers**: Backoff
//! - **Testing utilities**: scripted fetchers and recording handlers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use courier_core;

// Modules
pub mod codec;
pub mod engine;
pub mod fetchers;
pub mod handlers;
pub mod testing;

/// Items referenced by [`envelope!`] expansions. Not a public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::codec::{deserialize_envelope, serialize_envelope};
    pub use courier_core::{Envelope, VariantRegistry, decoder};
    pub use serde;
    pub use serde_json;
}
