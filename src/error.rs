//! Configuration error types for the Partner Center SDK.
//!
//! This module contains [`ConfigError`], covering fail-fast validation of
//! configuration values and integrity faults in the route/parameter table.
//!
//! # Error Handling
//!
//! Configuration constructors return `Result<T, ConfigError>` so invalid
//! values are rejected at construction time. Route-table faults
//! ([`ConfigError::UnknownOperation`], [`ConfigError::UnknownParameter`])
//! indicate a broken deployment, not a transient condition: they are never
//! retryable and surface immediately from the operation that hit them.
//!
//! # Example
//!
//! ```rust
//! use partner_center::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant carries enough context to make the failure actionable:
/// validation errors name the offending value, route-table faults name the
/// operation and parameter that could not be resolved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid bearer token.")]
    EmptyAccessToken,

    /// API endpoint URL is invalid.
    #[error("Invalid API endpoint '{url}'. Expected an http:// or https:// URL without a trailing slash.")]
    InvalidEndpoint {
        /// The invalid endpoint that was provided.
        url: String,
    },

    /// A required field is missing from the configuration builder.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The route table has no entry for the named operation.
    ///
    /// This is a configuration-integrity fault: the table shipped with the
    /// process does not know the operation an operation object asked for.
    #[error("Route table has no entry for operation '{operation}'.")]
    UnknownOperation {
        /// The operation name that was requested.
        operation: String,
    },

    /// The route entry for an operation has no mapping for a logical
    /// parameter name.
    #[error("Route entry for '{operation}' has no parameter named '{parameter}'.")]
    UnknownParameter {
        /// The operation whose entry was consulted.
        operation: String,
        /// The logical parameter name that was requested.
        parameter: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_access_token_error_message() {
        let error = ConfigError::EmptyAccessToken;
        let message = error.to_string();
        assert!(message.contains("Access token cannot be empty"));
    }

    #[test]
    fn test_invalid_endpoint_error_message() {
        let error = ConfigError::InvalidEndpoint {
            url: "ftp://bad".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://bad"));
        assert!(message.contains("http://"));
    }

    #[test]
    fn test_unknown_operation_error_names_operation() {
        let error = ConfigError::UnknownOperation {
            operation: "GetPartnerRelationships".to_string(),
        };
        assert!(error.to_string().contains("GetPartnerRelationships"));
    }

    #[test]
    fn test_unknown_parameter_error_names_both() {
        let error = ConfigError::UnknownParameter {
            operation: "GetPartnerRelationships".to_string(),
            parameter: "Filter".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("GetPartnerRelationships"));
        assert!(message.contains("Filter"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "access_token",
        };
        let message = error.to_string();
        assert!(message.contains("access_token"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &error;
    }
}
