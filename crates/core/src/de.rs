//! Shared deserialization helpers.

use serde::{Deserialize, Deserializer};

/// Decode an explicit JSON `null` as the type's default value.
///
/// Combine with `#[serde(default)]` so that a missing field behaves the same.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
