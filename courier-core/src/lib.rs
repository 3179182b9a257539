//! # courier-core
//!
//! Core traits for the courier bot API client.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that supplies fetchers, handlers or wire types without pulling in the
//! tokio-based implementations from `courier-std`.
//!
//! # Two Mechanisms
//!
//! ## Envelope Codec ([`Envelope`], [`VariantRegistry`])
//!
//! Polymorphic wire objects carry a string discriminant (`"type"`,
//! `"status"`, `"source"`, ...) that selects their concrete shape. An
//! envelope is a closed enum with one variant per discriminant; its registry
//! maps each discriminant to the decoder of the matching variant.
//!
//! - **Closed**: an unknown discriminant is an error, never a default variant
//! - **Data-driven**: adding a variant means adding a registry entry
//! - **Never empty**: a value only exists once it decoded completely
//!
//! ## Dispatch Engine Contracts ([`Fetcher`], [`Handler`], [`Sequenced`])
//!
//! The engine pulls batches of [`Sequenced`] events from a [`Fetcher`],
//! advances a cursor past every enqueued event, and hands each one to a
//! [`Handler`] on a bounded worker pool.
//!
//! # Error Types
//!
//! - [`CourierError`] - Top-level error type
//! - [`CodecError`] - Envelope decode/encode failures
//! - [`ConfigError`] - Invalid engine configuration
//! - [`RegistryError`] - Invalid registry construction
//! - [`RouterError`] - Kind router construction errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod envelope;
mod error;
mod fetch;
mod handler;
mod message;
mod registry;
mod response;

// Re-exports
pub use envelope::Envelope;
pub use error::{
    BoxError, CodecError, ConfigError, CourierError, RegistryError, RouterError,
};
pub use fetch::{FetchRequest, Fetcher};
pub use handler::{DynHandler, Handler};
pub use message::{Message, Sequenced};
pub use registry::{DecodeFn, VariantRegistry, VariantRegistryBuilder, decoder};
pub use response::IntoOutcome;
