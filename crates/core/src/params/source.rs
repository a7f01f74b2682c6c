//! Payment source parameters for paying an order.

use serde::Serialize;
use thiserror::Error;

/// Errors from validating a [`SourceParams`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// A token or source ID was empty.
    #[error("source token cannot be empty")]
    EmptyToken,
    /// Card details were given without a card number.
    #[error("card source requires a card number")]
    MissingCardNumber,
}

/// How the order will be paid: a tokenized source ID or raw card details.
///
/// A token encodes as `source=<id>`; a card encodes as
/// `source[object]=card`, `source[number]=...` and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SourceParams {
    /// Token or source ID (`tok_...`, `src_...`, `card_...`).
    Token(String),
    Card(CardParams),
}

impl SourceParams {
    /// Build a token source.
    #[must_use]
    pub fn token(id: impl Into<String>) -> Self {
        Self::Token(id.into())
    }

    /// Check the source carries enough to be charged.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty token or a card without a number.
    pub fn validate(&self) -> Result<(), SourceError> {
        match self {
            Self::Token(token) if token.trim().is_empty() => Err(SourceError::EmptyToken),
            Self::Card(card) if card.number.trim().is_empty() => {
                Err(SourceError::MissingCardNumber)
            }
            Self::Token(_) | Self::Card(_) => Ok(()),
        }
    }
}

/// Raw card details.
///
/// Implements `Debug` manually to redact the card number and CVC.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "object", rename = "card")]
pub struct CardParams {
    pub number: String,
    pub exp_month: u8,
    pub exp_year: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_zip: Option<String>,
}

impl std::fmt::Debug for CardParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let last4 = self
            .number
            .get(self.number.len().saturating_sub(4)..)
            .unwrap_or_default();
        f.debug_struct("CardParams")
            .field("number", &format_args!("**** {last4}"))
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .field("cvc", &self.cvc.as_ref().map(|_| "[REDACTED]"))
            .field("name", &self.name)
            .field("address_zip", &self.address_zip)
            .finish()
    }
}
