//! List container returned by list endpoints.

use serde::Deserialize;

use super::expandable::Object;

/// A page of resources from a list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct List<T> {
    /// Resources on this page, in API order.
    #[serde(default)]
    pub data: Vec<T>,
    /// Whether more resources exist after this page.
    #[serde(default)]
    pub has_more: bool,
    /// API path of the list endpoint.
    #[serde(default)]
    pub url: String,
    /// Total count, only present when requested via `include[]=total_count`.
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            has_more: false,
            url: String::new(),
            total_count: None,
        }
    }
}

impl<T: Object> List<T> {
    /// ID of the last resource on the page, for use as `starting_after`.
    #[must_use]
    pub fn last_id(&self) -> Option<&T::Id> {
        self.data.last().map(Object::id)
    }
}
