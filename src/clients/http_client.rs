//! HTTP transport for Partner Center API communication.
//!
//! [`HttpClient`] owns the reqwest client and the request-independent state:
//! base URI, base path, and default headers. It issues single GET requests;
//! retry, timeout, and cancellation policy belong to callers, which can use
//! the error categories to decide what is safe to reissue.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::PartnerConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Partner Center API.
///
/// The client handles:
/// - Base URI construction from the configured endpoint
/// - Default headers including `User-Agent` and the bearer token
/// - Response parsing and error categorization
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g. `https://api.partnercenter.microsoft.com`).
    base_uri: String,
    /// Base path (e.g. "/v1").
    base_path: String,
    /// Default headers included in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g. "/v1")
    /// * `config` - Configuration providing endpoint, token, and UA prefix
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This only
    /// happens in extremely unusual circumstances (e.g. TLS initialization
    /// failure).
    #[must_use]
    pub fn new(base_path: impl Into<String>, config: &PartnerConfig) -> Self {
        let base_path = base_path.into();
        let base_uri = config.endpoint().as_ref().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Partner Center Library v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.access_token().as_ref()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            base_path,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request to the given path (which may carry a query
    /// string, attached verbatim).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if no response was received,
    /// [`HttpError::Unauthorized`] for 401/403 responses, and
    /// [`HttpError::Response`] for any other non-2xx status.
    pub async fn get(
        &self,
        path_and_query: &str,
        extra_headers: Option<&HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let url = format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            path_and_query.trim_start_matches('/')
        );

        tracing::debug!(url = %url, "issuing GET request");

        let mut req_builder = self.client.get(&url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(extra) = extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        let response = HttpResponse::new(code, headers, body);
        tracing::debug!(status = code, "received response");

        if response.is_ok() {
            return Ok(response);
        }

        let message = Self::serialize_error(&response);
        if code == 401 || code == 403 {
            return Err(HttpError::Unauthorized { code, message });
        }
        Err(HttpError::Response(HttpResponseError {
            code,
            message,
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a lowercased multi-value map.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response body into a compact JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["code", "description", "error", "errors"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
