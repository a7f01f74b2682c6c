//! Currency codes and minor-unit conversion.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Currencies that have no minor unit (amounts are already whole units).
const ZERO_DECIMAL_CURRENCIES: &[&str] = &[
    "bif", "clp", "djf", "gnf", "jpy", "kmf", "krw", "mga", "pyg", "rwf", "ugx", "vnd", "vuv",
    "xaf", "xof", "xpf",
];

/// Three-letter ISO 4217 currency code, lowercase on the wire (e.g. `usd`).
///
/// Codes are stored lowercase whether built with [`Currency::new`] or decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Create a currency from a code; the code is lowercased.
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self(code.to_ascii_lowercase())
    }

    /// The lowercase code as sent by the API.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of decimal places in the currency's minor unit.
    #[must_use]
    pub fn exponent(&self) -> u32 {
        if ZERO_DECIMAL_CURRENCIES.contains(&self.0.as_str()) {
            0
        } else {
            2
        }
    }

    /// Convert an amount in minor units (e.g. cents) to major units.
    #[must_use]
    pub fn to_major_units(&self, minor: i64) -> Decimal {
        Decimal::new(minor, self.exponent())
    }

    /// Format an amount in minor units for display (e.g. `12.50 USD`).
    #[must_use]
    pub fn format_amount(&self, minor: i64) -> String {
        format!(
            "{} {}",
            self.to_major_units(minor),
            self.0.to_ascii_uppercase()
        )
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Self::new(&code))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lowercases() {
        assert_eq!(Currency::new("USD").as_str(), "usd");
    }

    #[test]
    fn test_two_decimal_conversion() {
        let usd = Currency::new("usd");
        assert_eq!(usd.exponent(), 2);
        assert_eq!(usd.to_major_units(1250), Decimal::new(1250, 2));
        assert_eq!(usd.format_amount(1250), "12.50 USD");
    }

    #[test]
    fn test_zero_decimal_conversion() {
        let jpy = Currency::new("jpy");
        assert_eq!(jpy.exponent(), 0);
        assert_eq!(jpy.format_amount(500), "500 JPY");
    }

    #[test]
    fn test_decoded_code_is_lowercased() {
        let jpy: Currency = serde_json::from_str(r#""JPY""#).unwrap();
        assert_eq!(jpy, Currency::new("jpy"));
        assert_eq!(jpy.exponent(), 0);
        assert_eq!(jpy.format_amount(500), "500 JPY");
    }
}
