//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated bearer access token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AccessToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use partner_center::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated API endpoint URL.
///
/// The endpoint is the scheme-and-host portion of the service address, e.g.
/// `https://api.partnercenter.microsoft.com`. A trailing slash is stripped
/// during normalization so path joining stays unambiguous.
///
/// # Example
///
/// ```rust
/// use partner_center::ApiEndpoint;
///
/// let endpoint = ApiEndpoint::new("https://api.partnercenter.microsoft.com").unwrap();
/// assert_eq!(endpoint.as_ref(), "https://api.partnercenter.microsoft.com");
///
/// // Trailing slashes are normalized away
/// let endpoint = ApiEndpoint::new("http://localhost:8080/").unwrap();
/// assert_eq!(endpoint.as_ref(), "http://localhost:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoint(String);

impl ApiEndpoint {
    /// The production Partner Center API endpoint.
    pub const PRODUCTION: &'static str = "https://api.partnercenter.microsoft.com";

    /// Creates a new validated API endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL does not start
    /// with `http://` or `https://` or has no host part.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => {
                Ok(Self(url.trim_end_matches('/').to_string()))
            }
            _ => Err(ConfigError::InvalidEndpoint { url }),
        }
    }

    /// Returns the production endpoint.
    ///
    /// # Panics
    ///
    /// Never panics; the production constant is a valid URL.
    #[must_use]
    pub fn production() -> Self {
        Self::new(Self::PRODUCTION).expect("production endpoint constant is valid")
    }
}

impl AsRef<str> for ApiEndpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_accepts_non_empty() {
        let token = AccessToken::new("abc123").unwrap();
        assert_eq!(token.as_ref(), "abc123");
    }

    #[test]
    fn test_access_token_rejects_empty() {
        let result = AccessToken::new("");
        assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
    }

    #[test]
    fn test_access_token_debug_is_masked() {
        let token = AccessToken::new("super-secret-token").unwrap();
        let debug = format!("{token:?}");
        assert_eq!(debug, "AccessToken(*****)");
        assert!(!debug.contains("super-secret-token"));
    }

    #[test]
    fn test_endpoint_accepts_https() {
        let endpoint = ApiEndpoint::new("https://api.example.com").unwrap();
        assert_eq!(endpoint.as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_endpoint_accepts_http_with_port() {
        let endpoint = ApiEndpoint::new("http://127.0.0.1:3000").unwrap();
        assert_eq!(endpoint.as_ref(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let endpoint = ApiEndpoint::new("https://api.example.com/").unwrap();
        assert_eq!(endpoint.as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_endpoint_rejects_missing_scheme() {
        let result = ApiEndpoint::new("api.example.com");
        assert!(matches!(result, Err(ConfigError::InvalidEndpoint { .. })));
    }

    #[test]
    fn test_endpoint_rejects_empty_host() {
        assert!(ApiEndpoint::new("https://").is_err());
        assert!(ApiEndpoint::new("https:///path").is_err());
    }

    #[test]
    fn test_production_endpoint_is_valid() {
        let endpoint = ApiEndpoint::production();
        assert!(endpoint.as_ref().starts_with("https://"));
    }
}
