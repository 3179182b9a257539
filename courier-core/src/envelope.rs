//! The envelope contract shared by every polymorphic wire object.

use crate::registry::VariantRegistry;
use serde_json::Value;

/// A closed set of variants selected by a string discriminant field.
///
/// Implementations are normally generated by `courier_std::envelope!`, which
/// declares the enum, its registry and the serde impls in one place. The
/// decode/encode algorithm itself lives in `courier_std::codec` and is
/// written once for all envelopes.
///
/// # Invariants
///
/// - `kind()` of a decoded value equals the discriminant it was decoded from
/// - every discriminant the remote side can produce has a registry entry
/// - `registry()` returns the same registry for the lifetime of the process
pub trait Envelope: Sized + Send + Sync + 'static {
    /// Human readable name used in errors (usually the type name).
    const NAME: &'static str;

    /// Name of the field carrying the discriminant.
    const DISCRIMINANT: &'static str;

    /// The discriminant → decoder table for this envelope.
    fn registry() -> &'static VariantRegistry<Self>;

    /// Discriminant of the held variant.
    fn kind(&self) -> &'static str;

    /// Serialize the held variant's own fields.
    ///
    /// The discriminant is added by the codec; variants do not need to
    /// carry it.
    fn encode_variant(&self) -> Result<Value, serde_json::Error>;
}
