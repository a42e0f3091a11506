//! HTTP response wrapper.
//!
//! [`HttpResponse`] carries the status code, lowercased response headers,
//! and the response body parsed as JSON. The service client deserializes the
//! body into typed models; the raw value is kept here so error reporting can
//! serialize whatever the service sent back.

use std::collections::HashMap;

/// A parsed HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keys lowercased, multi-valued.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body parsed as JSON (`{}` when empty).
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response from its parts.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the first value of a header, case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the service request id (from the `MS-RequestId` header).
    ///
    /// Useful for correlating failures in support requests.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("ms-requestid")
    }
}
