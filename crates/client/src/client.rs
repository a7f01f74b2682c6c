//! HTTP transport for the payments API.
//!
//! Requests carry the API key as a bearer token. Parameters go out as
//! form-encoded pairs (bodies for `POST`, query strings for `GET`), and
//! responses are decoded with the resource types from `paydesk-core`.

use std::sync::Arc;

use paydesk_core::RequestParams;
use paydesk_core::form::to_pairs;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiErrorResponse, ClientError};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("paydesk/", env!("CARGO_PKG_VERSION"));

/// Retry delay assumed when a 429 response has no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 1;

/// Payments API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    api_base: Url,
}

impl Client {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.api_key.expose_secret());
        let mut auth = HeaderValue::from_str(&auth_value)
            .map_err(|e| ClientError::Parse(format!("Invalid API key format: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                api_base: config.api_base.clone(),
            }),
        })
    }

    /// Build an endpoint URL from path segments; segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.inner.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ClientError::Parse(format!(
                    "API base cannot take a path: {}",
                    self.inner.api_base
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Execute a GET request with parameters in the query string.
    pub(crate) async fn get<T, P>(&self, segments: &[&str], params: &P) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        let query = to_pairs(params)?;
        debug!(%url, params = query.len(), "GET");

        let response = self.inner.http.get(url).query(&query).send().await?;
        self.handle_response(response).await
    }

    /// Execute a POST request with parameters as a form body.
    pub(crate) async fn post<T, P>(&self, segments: &[&str], params: &P) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        P: RequestParams,
    {
        let url = self.endpoint(segments)?;
        let form = to_pairs(params)?;
        debug!(%url, params = form.len(), "POST");

        let mut request = self.inner.http.post(url).form(&form);
        if let Some(key) = &params.params().idempotency_key {
            request = request.header("Idempotency-Key", key);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Handle API response and parse JSON.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ClientError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(self.parse_error(response).await)
    }

    /// Parse error response from the API.
    async fn parse_error(&self, response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();

        // Check for rate limiting
        if status == 429 {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            return ClientError::RateLimited(retry_after);
        }

        let body = response.text().await.unwrap_or_default();
        let api_error = serde_json::from_str::<ApiErrorResponse>(&body)
            .ok()
            .map(|envelope| envelope.error);

        // Gateways may answer with HTML or an empty body
        let message = match api_error.as_ref().and_then(|e| e.message.clone()) {
            Some(message) => message,
            None if body.trim().is_empty() => "Unknown error".to_string(),
            None => body.clone(),
        };

        match status {
            401 | 403 => ClientError::Unauthorized(message),
            404 => ClientError::NotFound(message),
            _ => {
                let Some(api_error) = api_error else {
                    error!(status, body = %body, "Unrecognized API error response");
                    return ClientError::Api {
                        status,
                        error_type: "unknown".to_string(),
                        message,
                        param: None,
                    };
                };
                error!(
                    status,
                    error_type = %api_error.error_type,
                    code = ?api_error.code,
                    param = ?api_error.param,
                    "API error"
                );
                ClientError::Api {
                    status,
                    error_type: api_error.error_type,
                    message,
                    param: api_error.param,
                }
            }
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_base", &self.inner.api_base.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn client(api_base: &str) -> Client {
        let config = ClientConfig::new(SecretString::from("sk_test_4eC39H"))
            .unwrap()
            .with_api_base(api_base)
            .unwrap();
        Client::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let client = client("https://api.example.com/v1");
        let url = client.endpoint(&["orders", "or_1", "pay"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/orders/or_1/pay");
    }

    #[test]
    fn test_endpoint_handles_trailing_slash_and_escaping() {
        let client = client("https://api.example.com/v1/");
        let url = client.endpoint(&["orders", "or 1/x"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/orders/or%201%2Fx");
    }

    #[test]
    fn test_debug_hides_key() {
        let client = client("https://api.example.com/v1");
        let debug = format!("{client:?}");
        assert!(!debug.contains("sk_test"));
    }
}
