//! Form encoding for request parameters.
//!
//! The API takes `application/x-www-form-urlencoded` bodies where nested
//! values use bracket notation:
//!
//! ```text
//! items[0][type]=sku
//! items[0][parent]=sku_123
//! shipping[address][line1]=1 Main St
//! metadata[ref]=abc
//! ```
//!
//! [`to_pairs`] flattens any `Serialize` value into those key/value pairs.
//! URL-escaping is left to the HTTP layer.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while flattening parameters.
#[derive(Debug, Error)]
pub enum FormError {
    /// Top-level parameters were not a struct or map.
    #[error("form parameters must serialize to an object, got {0}")]
    NotAnObject(&'static str),

    /// The value could not be serialized.
    #[error("failed to serialize form parameters: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Flatten parameters into form key/value pairs.
///
/// - nested objects become `key[field]`
/// - arrays become `key[0]`, `key[1]`, ...
/// - booleans become `true` / `false`
/// - `null` values and empty arrays/objects produce no pairs
///
/// # Errors
///
/// Returns [`FormError::NotAnObject`] if `params` is not a struct or map, or
/// [`FormError::Serialize`] if serialization fails.
pub fn to_pairs<T>(params: &T) -> Result<Vec<(String, String)>, FormError>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(params)? {
        Value::Object(fields) => {
            let mut pairs = Vec::new();
            for (key, value) in fields {
                flatten(key, value, &mut pairs);
            }
            Ok(pairs)
        }
        other => Err(FormError::NotAnObject(kind(&other))),
    }
}

fn flatten(key: String, value: Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s)),
        Value::Array(items) => {
            for (index, item) in items.into_iter().enumerate() {
                flatten(format!("{key}[{index}]"), item, pairs);
            }
        }
        Value::Object(fields) => {
            for (field, item) in fields {
                flatten(format!("{key}[{field}]"), item, pairs);
            }
        }
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
