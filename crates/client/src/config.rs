//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PAYDESK_API_KEY` - Secret or restricted API key (`sk_...` / `rk_...`)
//!
//! ## Optional
//! - `PAYDESK_API_BASE` - API base URL (default: `https://api.stripe.com/v1`)
//! - `PAYDESK_TIMEOUT_SECS` - Request timeout in seconds (default: 30)

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com/v1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Prefixes a usable API key starts with.
const API_KEY_PREFIXES: &[&str] = &["sk_", "rk_"];

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &["your-", "your_", "changeme", "replace", "placeholder", "xxx"];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// API client configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct ClientConfig {
    /// Secret API key, sent as a bearer token
    pub api_key: SecretString,
    /// Base URL that endpoint paths are appended to
    pub api_base: Url,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Configuration with the default base URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the key does not look like a secret API key.
    pub fn new(api_key: SecretString) -> Result<Self, ConfigError> {
        validate_api_key(api_key.expose_secret(), "api_key")?;
        Ok(Self {
            api_key,
            api_base: parse_api_base(DEFAULT_API_BASE, "api_base")?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Replace the base URL, e.g. to point at a mock server.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_base` is not an absolute http(s) URL.
    pub fn with_api_base(mut self, api_base: &str) -> Result<Self, ConfigError> {
        self.api_base = parse_api_base(api_base, "api_base")?;
        Ok(self)
    }

    /// Load configuration from the environment (and a `.env` file if present).
    ///
    /// # Errors
    ///
    /// Returns an error if `PAYDESK_API_KEY` is missing or invalid, or an
    /// optional variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("PAYDESK_API_KEY")
            .ok_or_else(|| ConfigError::MissingEnvVar("PAYDESK_API_KEY".to_string()))?;
        validate_api_key(&api_key, "PAYDESK_API_KEY")?;

        let api_base = lookup("PAYDESK_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = parse_api_base(&api_base, "PAYDESK_API_BASE")?;

        let timeout_secs = lookup("PAYDESK_TIMEOUT_SECS")
            .map(|value| {
                value.parse::<u64>().map_err(|e| {
                    ConfigError::InvalidEnvVar("PAYDESK_TIMEOUT_SECS".to_string(), e.to_string())
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key: SecretString::from(api_key),
            api_base,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Parse a base URL, requiring http(s).
fn parse_api_base(value: &str, var_name: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}

/// Reject keys that are clearly not secret API keys.
fn validate_api_key(key: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = key.to_lowercase();

    // Check blocklist
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    if !API_KEY_PREFIXES.iter().any(|prefix| key.starts_with(prefix)) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "expected a secret key starting with sk_ or rk_".to_string(),
        ));
    }

    Ok(())
}
