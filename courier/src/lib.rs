//! # courier - Typed Bot API Client
//!
//! `courier` models the wire data of an HTTP/JSON bot API, decodes its
//! polymorphic objects through one generic envelope codec, and runs a
//! long-polling dispatch engine that feeds updates to your handler.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use courier::prelude::*;
//!
//! let engine = Engine::<Update>::new(EngineConfig::default().concurrency(4))?;
//! let handle = engine.handle();
//!
//! // `fetch` performs the getUpdates call and returns the raw body.
//! let fetcher = move |request: FetchRequest| async move {
//!     let body = fetch(GetUpdatesParams::from(&request)).await?;
//!     Ok::<_, BoxError>(courier::api::decode_updates(&body)?)
//! };
//!
//! engine
//!     .run(fetcher, |update: Update| async move {
//!         if let Some(message) = update.message() {
//!             println!("{}: {:?}", message.chat.id, message.text);
//!         }
//!     })
//!     .await?;
//! ```
//!
//! ## Crates
//!
//! - `courier-core`: traits and error types
//! - `courier-std`: codec, engine, handler wrappers, testing utilities
//! - `courier`: this facade plus the wire model ([`types`]) and the
//!   `getUpdates` helpers ([`api`])

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod api;
pub mod types;

pub use courier_core::{
    // Errors
    BoxError,
    CodecError,
    ConfigError,
    CourierError,
    // Codec
    DecodeFn,
    // Handler
    DynHandler,
    Envelope,
    // Fetcher
    FetchRequest,
    Fetcher,
    Handler,
    IntoOutcome,
    // Events
    Message,
    RegistryError,
    RouterError,
    Sequenced,
    VariantRegistry,
    VariantRegistryBuilder,
};

pub use courier_std::{codec, envelope};

/// The dispatch engine.
pub mod engine {
    pub use courier_std::engine::{
        Engine, EngineConfig, EngineError, EngineHandle, EngineState, MAX_BATCH_LIMIT,
        MAX_QUEUE_CAPACITY, RunSummary,
    };
}

/// Standard handler wrappers.
pub mod handlers {
    pub use courier_std::handlers::{
        KindRouter, KindRouterBuilder, TimeoutError, TimeoutHandler, TracingHandler,
    };
}

/// Standard fetcher wrappers.
pub mod fetchers {
    pub use courier_std::fetchers::Backoff;
}

/// Testing utilities.
pub mod testing {
    pub use courier_std::testing::{
        CountingHandler, FailingHandler, GatedHandler, RecordingHandler, ScriptedFetcher,
    };
}

/// Prelude module - common imports for courier.
///
/// # Usage
///
/// ```rust
/// use courier::prelude::*;
///
/// let config = EngineConfig::default().allowed_updates(["message"]);
/// assert!(Engine::<Update>::new(config).is_ok());
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        CodecError,
        // Core traits
        Envelope,
        FetchRequest,
        Fetcher,
        Handler,
        Sequenced,
        // Wire helpers
        api::{ApiError, ApiResponse, GetUpdatesParams},
        // Engine
        engine::{Engine, EngineConfig, EngineError, EngineHandle, EngineState},
        // Model
        types::{Update, UpdateKind},
    };
}
