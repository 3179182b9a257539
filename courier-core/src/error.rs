//! Error types for courier.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`CourierError`] - Top-level error type
//! - [`CodecError`] - Errors decoding or encoding envelopes
//! - [`ConfigError`] - Invalid engine configuration
//! - [`RegistryError`] - Invalid variant registry construction
//! - [`RouterError`] - Errors building a kind router

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all courier operations.
#[derive(Error, Debug)]
pub enum CourierError {
    /// A payload could not be decoded or encoded.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// The engine configuration was rejected.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A registry could not be built.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A router could not be built.
    #[error("router error: {0}")]
    Router(#[from] RouterError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors raised by the envelope codec.
///
/// Every variant is terminal for the decode or encode call that produced it.
/// A nested envelope failure is reported as the innermost error, so the
/// `tag` always names the deepest discriminant that failed.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The payload has no discriminant field.
    #[error("{envelope}: missing discriminant field `{field}`")]
    MissingDiscriminant {
        /// Envelope being decoded.
        envelope: &'static str,
        /// Name of the missing field.
        field: &'static str,
    },

    /// The discriminant field holds something other than a string.
    #[error("{envelope}: discriminant field `{field}` is not a string")]
    InvalidDiscriminant {
        /// Envelope being decoded.
        envelope: &'static str,
        /// Name of the offending field.
        field: &'static str,
    },

    /// No variant is registered for the discriminant.
    #[error("{envelope}: unknown variant {tag:?}")]
    UnknownVariant {
        /// Envelope being decoded.
        envelope: &'static str,
        /// The unmatched discriminant value.
        tag: String,
    },

    /// The matched variant rejected the payload.
    #[error("{envelope}: failed to decode variant {tag:?}: {source}")]
    VariantDecode {
        /// Envelope being decoded.
        envelope: &'static str,
        /// The matched discriminant value.
        tag: String,
        /// The underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The payload, or an encoded variant, is not a JSON object.
    #[error("{envelope}: expected a JSON object")]
    NotAnObject {
        /// Envelope being decoded or encoded.
        envelope: &'static str,
    },

    /// The held variant failed to serialize.
    #[error("{envelope}: failed to encode variant {tag:?}: {source}")]
    Encode {
        /// Envelope being encoded.
        envelope: &'static str,
        /// Discriminant of the held variant.
        tag: &'static str,
        /// The underlying serialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// A non-envelope payload failed to decode.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    /// The discriminant this error is about, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            CodecError::UnknownVariant { tag, .. } | CodecError::VariantDecode { tag, .. } => {
                Some(tag.as_str())
            }
            CodecError::Encode { tag, .. } => Some(*tag),
            _ => None,
        }
    }

    /// The envelope this error is about, if any.
    pub fn envelope(&self) -> Option<&'static str> {
        match self {
            CodecError::MissingDiscriminant { envelope, .. }
            | CodecError::InvalidDiscriminant { envelope, .. }
            | CodecError::UnknownVariant { envelope, .. }
            | CodecError::VariantDecode { envelope, .. }
            | CodecError::NotAnObject { envelope }
            | CodecError::Encode { envelope, .. } => Some(*envelope),
            CodecError::Json(_) => None,
        }
    }
}

/// Errors raised while validating an engine configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The queue cannot hold a single event.
    #[error("queue capacity must be at least 1")]
    ZeroQueueCapacity,

    /// The queue is larger than the channel behind it can hold.
    #[error("queue capacity {capacity} exceeds the maximum of {max}")]
    QueueTooLarge {
        /// Configured queue capacity.
        capacity: usize,
        /// Largest capacity the queue supports.
        max: usize,
    },

    /// The queue is smaller than the worker pool.
    #[error("queue capacity {capacity} is smaller than the worker pool ({concurrency})")]
    QueueSmallerThanPool {
        /// Configured queue capacity.
        capacity: usize,
        /// Configured worker count.
        concurrency: usize,
    },

    /// The batch limit is outside the range the remote side accepts.
    #[error("batch limit {0} is outside 1..=100")]
    BatchLimit(u32),

    /// The allow-list names an event type that does not exist.
    #[error("unknown update type {0:?} in allow-list")]
    UnknownUpdateType(String),
}

/// Errors raised while building a [`VariantRegistry`](crate::VariantRegistry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two decoders were registered for one discriminant.
    #[error("{envelope}: variant {tag:?} registered twice")]
    DuplicateVariant {
        /// Envelope being built.
        envelope: &'static str,
        /// The repeated discriminant.
        tag: String,
    },
}

/// Errors that can occur while building a router.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// Route already exists.
    #[error("route already exists for key: {0}")]
    AlreadyExists(String),
}

// Convenience conversions
impl From<BoxError> for CourierError {
    fn from(err: BoxError) -> Self {
        CourierError::Custom(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variant_display_names_envelope_and_tag() {
        let err = CodecError::UnknownVariant {
            envelope: "BackgroundFill",
            tag: "nebula".into(),
        };
        assert_eq!(err.to_string(), "BackgroundFill: unknown variant \"nebula\"");
        assert_eq!(err.tag(), Some("nebula"));
        assert_eq!(err.envelope(), Some("BackgroundFill"));
    }

    #[test]
    fn missing_discriminant_has_no_tag() {
        let err = CodecError::MissingDiscriminant {
            envelope: "ReactionType",
            field: "type",
        };
        assert_eq!(err.tag(), None);
        assert!(err.to_string().contains("`type`"));
    }

    #[test]
    fn codec_error_converts_into_top_level() {
        let err: CourierError = CodecError::NotAnObject { envelope: "MenuButton" }.into();
        assert!(matches!(err, CourierError::Codec(CodecError::NotAnObject { .. })));
    }
}
