//! Outbound request parameters.
//!
//! Every parameter struct serializes only the fields that were set, so a
//! `Default` value sends nothing. Use [`crate::form::to_pairs`] to turn a
//! parameter struct into a request body.

pub mod order;
pub mod source;

use std::collections::BTreeMap;

use serde::Serialize;

pub use order::*;
pub use source::{CardParams, SourceError, SourceParams};

/// Parameters accepted by every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Params {
    /// Fields to return expanded instead of as bare IDs (e.g. `customer`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    /// Sent as the `Idempotency-Key` header, never in the body.
    #[serde(skip)]
    pub idempotency_key: Option<String>,
}

impl Params {
    /// Request expansion of a field.
    pub fn add_expand(&mut self, field: impl Into<String>) {
        self.expand.push(field.into());
    }

    /// Set a metadata key.
    pub fn add_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }
}

/// A parameter struct that carries the shared [`Params`].
pub trait RequestParams: Serialize {
    /// The shared parameters.
    fn params(&self) -> &Params;
}

/// Cursor parameters for list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    /// Page size, 1 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}

/// Filter on a timestamp field: an exact value or a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RangeQuery {
    Exact(i64),
    Bounds(RangeBounds),
}

/// Bounds of a [`RangeQuery`]; unset bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RangeBounds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<i64>,
}
