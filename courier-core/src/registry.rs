//! Variant registries.
//!
//! A registry maps each discriminant of one envelope kind to the decoder of
//! its concrete variant. Registries are built once and never mutated.

use crate::error::RegistryError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Decodes a full raw payload into one variant of `T`.
pub type DecodeFn<T> = Box<dyn Fn(Value) -> Result<T, serde_json::Error> + Send + Sync>;

/// Build a [`DecodeFn`] that deserializes a `V` and wraps it with `wrap`.
///
/// `wrap` is usually the enum's tuple-variant constructor, e.g.
/// `decoder(BackgroundFill::Solid)`.
pub fn decoder<T, V>(wrap: fn(V) -> T) -> DecodeFn<T>
where
    T: 'static,
    V: DeserializeOwned + 'static,
{
    Box::new(move |raw| serde_json::from_value::<V>(raw).map(wrap))
}

/// The discriminant → decoder table of one envelope kind.
pub struct VariantRegistry<T> {
    envelope: &'static str,
    decoders: HashMap<&'static str, DecodeFn<T>>,
}

impl<T> VariantRegistry<T> {
    /// Start building a registry with duplicate detection.
    pub fn builder(envelope: &'static str) -> VariantRegistryBuilder<T> {
        VariantRegistryBuilder {
            envelope,
            decoders: HashMap::new(),
        }
    }

    /// Create a registry from a fixed table.
    ///
    /// Later entries replace earlier ones with the same discriminant; the
    /// `envelope!` macro rejects such tables at compile time.
    pub fn from_entries<I>(envelope: &'static str, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, DecodeFn<T>)>,
    {
        Self {
            envelope,
            decoders: entries.into_iter().collect(),
        }
    }

    /// Look up the decoder for a discriminant.
    pub fn get(&self, tag: &str) -> Option<&DecodeFn<T>> {
        self.decoders.get(tag)
    }

    /// Check whether a discriminant is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.decoders.contains_key(tag)
    }

    /// Name of the envelope this registry belongs to.
    pub fn envelope(&self) -> &'static str {
        self.envelope
    }

    /// All registered discriminants, sorted.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.decoders.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// Get the number of variants.
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl<T> fmt::Debug for VariantRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantRegistry")
            .field("envelope", &self.envelope)
            .field("tags", &self.tags())
            .finish()
    }
}

/// Builder for [`VariantRegistry`].
pub struct VariantRegistryBuilder<T> {
    envelope: &'static str,
    decoders: HashMap<&'static str, DecodeFn<T>>,
}

impl<T: 'static> VariantRegistryBuilder<T> {
    /// Register a raw decoder for a discriminant.
    pub fn insert(&mut self, tag: &'static str, decode: DecodeFn<T>) -> Result<(), RegistryError> {
        if self.decoders.contains_key(tag) {
            return Err(RegistryError::DuplicateVariant {
                envelope: self.envelope,
                tag: tag.to_owned(),
            });
        }
        self.decoders.insert(tag, decode);
        Ok(())
    }

    /// Register variant type `V`, wrapped into `T` by `wrap`.
    pub fn register<V>(&mut self, tag: &'static str, wrap: fn(V) -> T) -> Result<(), RegistryError>
    where
        V: DeserializeOwned + 'static,
    {
        self.insert(tag, decoder(wrap))
    }

    /// Finalize the registry.
    pub fn build(self) -> VariantRegistry<T> {
        VariantRegistry {
            envelope: self.envelope,
            decoders: self.decoders,
        }
    }
}
