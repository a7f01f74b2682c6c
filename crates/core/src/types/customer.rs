//! Minimal customer projection.

use std::collections::HashMap;

use serde::Deserialize;

use super::expandable::Object;
use super::id::CustomerId;

/// The customer fields an order consumer reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created: i64,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub metadata: HashMap<String, String>,
}

impl Object for Customer {
    type Id = CustomerId;

    fn id(&self) -> &CustomerId {
        &self.id
    }
}
