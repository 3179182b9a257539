//! # Envelope Codec
//!
//! The decode/encode algorithm shared by every [`Envelope`].
//!
//! # Decoding
//!
//! 1. The payload must be a JSON object.
//! 2. The discriminant field is read without touching the rest.
//! 3. The discriminant is looked up in the envelope's registry; an unknown
//!    value fails with [`CodecError::UnknownVariant`], there is no fallback.
//! 4. The full payload is decoded into the matched variant.
//!
//! Envelopes nested inside a variant go through the same steps via their
//! `Deserialize` impls. When one of them fails, the top-level call returns
//! that innermost [`CodecError`] instead of a flattened serde message.
//!
//! # Encoding
//!
//! The held variant serializes itself; the codec then writes the
//! discriminant back under the envelope's field name.
//!
//! # Declaring Envelopes
//!
//! ```rust
//! use courier_std::{codec, envelope};
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! pub struct Solid {
//!     pub color: u32,
//! }
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! pub struct Gradient {
//!     pub top_color: u32,
//!     pub bottom_color: u32,
//! }
//!
//! envelope! {
//!     pub enum Fill in "type" {
//!         "solid" => Solid(Solid),
//!         "gradient" => Gradient(Gradient),
//!     }
//! }
//!
//! let fill: Fill = codec::decode(json!({"type": "solid", "color": 255})).unwrap();
//! assert_eq!(fill, Fill::Solid(Solid { color: 255 }));
//! assert_eq!(codec::encode(&fill).unwrap(), json!({"type": "solid", "color": 255}));
//! ```

mod macros;
mod scope;

use courier_core::{CodecError, Envelope};
use scope::Scope;
use serde::de::{DeserializeOwned, Error as _};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Decode a raw payload into the envelope variant its discriminant selects.
pub fn decode<T: Envelope>(raw: Value) -> Result<T, CodecError> {
    let _scope = Scope::enter();
    let tag = discriminant::<T>(&raw)?;

    let Some(decode) = T::registry().get(&tag) else {
        return Err(CodecError::UnknownVariant {
            envelope: T::NAME,
            tag,
        });
    };

    decode(raw).map_err(|source| {
        scope::take().unwrap_or(CodecError::VariantDecode {
            envelope: T::NAME,
            tag,
            source,
        })
    })
}

/// Encode an envelope, re-inserting its discriminant.
pub fn encode<T: Envelope>(envelope: &T) -> Result<Value, CodecError> {
    let tag = envelope.kind();
    let mut value = envelope
        .encode_variant()
        .map_err(|source| CodecError::Encode {
            envelope: T::NAME,
            tag,
            source,
        })?;

    let Value::Object(fields) = &mut value else {
        return Err(CodecError::NotAnObject { envelope: T::NAME });
    };
    fields.insert(T::DISCRIMINANT.to_owned(), Value::String(tag.to_owned()));
    Ok(value)
}

/// Decode any payload that may contain envelopes.
///
/// Like `serde_json::from_value`, but a failing nested envelope surfaces as
/// its own [`CodecError`].
pub fn from_value<T: DeserializeOwned>(raw: Value) -> Result<T, CodecError> {
    let _scope = Scope::enter();
    serde_json::from_value(raw).map_err(|err| scope::take().unwrap_or(CodecError::Json(err)))
}

/// Decode raw JSON bytes that may contain envelopes.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    let _scope = Scope::enter();
    serde_json::from_slice(bytes).map_err(|err| scope::take().unwrap_or(CodecError::Json(err)))
}

/// Run a codec-level decoder from inside a `Deserialize` impl.
///
/// The payload is buffered as a [`Value`] and handed to `decode`; a failure
/// is parked for the enclosing [`decode`]/[`from_value`] call and reported to
/// serde as a plain message.
pub fn deserialize_with<'de, D, T, F>(deserializer: D, decode: F) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    F: FnOnce(Value) -> Result<T, CodecError>,
{
    let raw = Value::deserialize(deserializer)?;
    decode(raw).map_err(|err| {
        let message = err.to_string();
        scope::stash(err);
        D::Error::custom(message)
    })
}

/// `Deserialize` body shared by every envelope.
pub fn deserialize_envelope<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Envelope,
    D: Deserializer<'de>,
{
    deserialize_with(deserializer, decode::<T>)
}

/// `Serialize` body shared by every envelope.
pub fn serialize_envelope<T, S>(envelope: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Envelope,
    S: Serializer,
{
    encode(envelope).map_err(S::Error::custom)?.serialize(serializer)
}

fn discriminant<T: Envelope>(raw: &Value) -> Result<String, CodecError> {
    let Value::Object(fields) = raw else {
        return Err(CodecError::NotAnObject { envelope: T::NAME });
    };

    match fields.get(T::DISCRIMINANT) {
        Some(Value::String(tag)) => Ok(tag.clone()),
        Some(_) => Err(CodecError::InvalidDiscriminant {
            envelope: T::NAME,
            field: T::DISCRIMINANT,
        }),
        None => Err(CodecError::MissingDiscriminant {
            envelope: T::NAME,
            field: T::DISCRIMINANT,
        }),
    }
}
