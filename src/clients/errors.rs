//! Transport-level error types.
//!
//! This module contains the error types raised by the HTTP layer. The
//! operations layer propagates these unchanged: the SDK does not interpret
//! server failures beyond categorizing them, and performs no local recovery.
//!
//! # Categories
//!
//! - [`HttpError::Response`]: the service answered with a non-success status
//! - [`HttpError::Unauthorized`]: the service rejected the credentials (401/403)
//! - [`HttpError::Network`]: the request never produced a response
//!
//! # Example
//!
//! ```rust,ignore
//! match partner.relationships().get(relationship_type).await {
//!     Ok(collection) => { /* ... */ }
//!     Err(ApiError::Http(HttpError::Unauthorized { code, .. })) => {
//!         // refresh credentials, do not retry as-is
//!     }
//!     Err(ApiError::Http(HttpError::Network(e))) => {
//!         // transient, eligible for retry upstream
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// The message carries the serialized error body returned by the service;
/// `error_reference` carries the service request id (from the
/// `MS-RequestId` header) for support correlation.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from the MS-RequestId header).
    pub error_reference: Option<String>,
}

/// Unified error type for the HTTP transport.
///
/// The operations layer wraps this in
/// [`ApiError::Http`](crate::ApiError::Http) without reinterpretation.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response other than an authorization rejection.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The service rejected the request's credentials (401 or 403).
    #[error("Authorization failed with status {code}: {message}")]
    Unauthorized {
        /// The HTTP status code (401 or 403).
        code: u16,
        /// Serialized error message from the response body.
        message: String,
    },

    /// Network or connection error; no response was received.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Unauthorized { code, .. } => Some(*code),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
    assert_send_sync::<HttpResponseError>();
};
