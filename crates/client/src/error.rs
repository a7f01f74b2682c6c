//! Error types for the API client.

use paydesk_core::FormError;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when calling the API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error ({status}, {error_type}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error category, e.g. `invalid_request_error` or `card_error`.
        error_type: String,
        /// Human-readable message.
        message: String,
        /// Parameter the error relates to, if any.
        param: Option<String>,
    },

    /// Authentication failed (invalid or revoked API key).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limited by the API.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Failed to encode request parameters.
    #[error("encode error: {0}")]
    Encode(#[from] FormError),
}

/// Error envelope returned by the API.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

/// Error details inside [`ApiErrorResponse`].
#[derive(Debug, Deserialize)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub param: Option<String>,
}
