//! Operation-level error type.
//!
//! [`ApiError`] is the single error type returned by every operation facade.
//! Each variant is a category a caller can act on: argument errors and
//! config errors are caller bugs, parsing errors are contract mismatches,
//! and HTTP errors carry the transport outcome. [`ApiError::is_retryable`]
//! tells upstream retry machinery which failures are worth reissuing; this
//! crate itself never retries.

use thiserror::Error;

use crate::clients::errors::HttpError;
use crate::error::ConfigError;

/// Unified error type for Partner Center operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A caller-supplied argument was rejected before any request was made.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: String,
    },

    /// A request payload (such as a filter) could not be serialized.
    #[error("Failed to serialize request payload: {0}")]
    RequestParsing(#[source] serde_json::Error),

    /// A response body did not match the expected model.
    #[error("Failed to parse response body: {0}")]
    ResponseParsing(#[source] serde_json::Error),

    /// A route or parameter lookup failed against the configured table.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP layer failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ApiError {
    /// Returns `true` if reissuing the same request could plausibly succeed.
    ///
    /// Network failures and 5xx/429 responses qualify. Argument, config,
    /// parsing, and authorization failures never do.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(HttpError::Network(_)) => true,
            Self::Http(HttpError::Response(e)) => e.code >= 500 || e.code == 429,
            _ => false,
        }
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::HttpResponseError;

    fn response_error(code: u16) -> ApiError {
        ApiError::Http(HttpError::Response(HttpResponseError {
            code,
            message: String::new(),
            error_reference: None,
        }))
    }

    #[test]
    fn test_invalid_argument_is_not_retryable() {
        let error = ApiError::InvalidArgument {
            reason: "only simple queries are supported".to_string(),
        };
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_server_errors_are_retryable() {
        assert!(response_error(500).is_retryable());
        assert!(response_error(503).is_retryable());
        assert!(response_error(429).is_retryable());
    }

    #[test]
    fn test_client_errors_are_not_retryable() {
        assert!(!response_error(400).is_retryable());
        assert!(!response_error(404).is_retryable());
    }

    #[test]
    fn test_unauthorized_is_not_retryable() {
        let error = ApiError::Http(HttpError::Unauthorized {
            code: 401,
            message: String::new(),
        });
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_config_error_converts() {
        let error: ApiError = ConfigError::UnknownOperation {
            operation: "GetNothing".to_string(),
        }
        .into();

        assert!(matches!(error, ApiError::Config(_)));
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_request_parsing_message() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = ApiError::RequestParsing(source);
        assert!(error.to_string().contains("serialize request payload"));
    }
}
