//! Minimal charge projection.

use serde::Deserialize;

use super::currency::Currency;
use super::expandable::Object;
use super::id::ChargeId;

/// The charge fields an order consumer reads.
///
/// A paid order points at the charge that captured its payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Charge {
    pub id: ChargeId,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub amount_refunded: i64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub refunded: bool,
    /// Raw status string (`succeeded`, `pending`, `failed`).
    #[serde(default)]
    pub status: String,
}

impl Object for Charge {
    type Id = ChargeId;

    fn id(&self) -> &ChargeId {
        &self.id
    }
}
