//! Configuration types for the Partner Center SDK.
//!
//! This module provides the types used to initialize the SDK for API
//! communication:
//!
//! - [`PartnerConfig`]: the main configuration struct
//! - [`PartnerConfigBuilder`]: builder for constructing [`PartnerConfig`]
//! - [`AccessToken`]: validated bearer token newtype with masked debug output
//! - [`ApiEndpoint`]: validated service endpoint URL
//! - [`Routes`] / [`Route`]: the injected route/parameter table
//!
//! # Example
//!
//! ```rust
//! use partner_center::{AccessToken, PartnerConfig};
//!
//! let config = PartnerConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(config.endpoint().as_ref().starts_with("https://"));
//! ```

mod newtypes;
mod routes;

pub use newtypes::{AccessToken, ApiEndpoint};
pub use routes::{Route, Routes};

use crate::error::ConfigError;

/// Configuration for the Partner Center SDK.
///
/// Holds the credentials, endpoint, and route table needed to construct a
/// [`Partner`](crate::Partner). The route table defaults to
/// [`Routes::standard`] and is injected rather than ambient, so tests can
/// substitute fixtures without global state.
///
/// # Thread Safety
///
/// `PartnerConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct PartnerConfig {
    access_token: AccessToken,
    endpoint: ApiEndpoint,
    user_agent_prefix: Option<String>,
    routes: Routes,
}

// Verify PartnerConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PartnerConfig>();
};

impl PartnerConfig {
    /// Creates a new builder for constructing a `PartnerConfig`.
    #[must_use]
    pub fn builder() -> PartnerConfigBuilder {
        PartnerConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the route table.
    #[must_use]
    pub const fn routes(&self) -> &Routes {
        &self.routes
    }

    /// Consumes the config, returning its route table.
    #[must_use]
    pub fn into_routes(self) -> Routes {
        self.routes
    }
}

/// Builder for [`PartnerConfig`].
///
/// The access token is required; the endpoint defaults to
/// [`ApiEndpoint::production`] and the route table to [`Routes::standard`].
#[derive(Debug, Default)]
pub struct PartnerConfigBuilder {
    access_token: Option<AccessToken>,
    endpoint: Option<ApiEndpoint>,
    user_agent_prefix: Option<String>,
    routes: Option<Routes>,
}

impl PartnerConfigBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API endpoint. Defaults to the production endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: ApiEndpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the route table. Defaults to [`Routes::standard`].
    #[must_use]
    pub fn routes(mut self, routes: Routes) -> Self {
        self.routes = Some(routes);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no access token was
    /// set.
    pub fn build(self) -> Result<PartnerConfig, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(PartnerConfig {
            access_token,
            endpoint: self.endpoint.unwrap_or_else(ApiEndpoint::production),
            user_agent_prefix: self.user_agent_prefix,
            routes: self.routes.unwrap_or_else(Routes::standard),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> AccessToken {
        AccessToken::new("test-token").unwrap()
    }

    #[test]
    fn test_builder_with_defaults() {
        let config = PartnerConfig::builder().access_token(token()).build().unwrap();

        assert_eq!(config.access_token().as_ref(), "test-token");
        assert_eq!(config.endpoint().as_ref(), ApiEndpoint::PRODUCTION);
        assert!(config.user_agent_prefix().is_none());
        assert!(config.routes().lookup("GetPartnerRelationships").is_ok());
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = PartnerConfig::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_overrides_endpoint_and_prefix() {
        let config = PartnerConfig::builder()
            .access_token(token())
            .endpoint(ApiEndpoint::new("http://localhost:9999").unwrap())
            .user_agent_prefix("MyIntegration/2.0")
            .build()
            .unwrap();

        assert_eq!(config.endpoint().as_ref(), "http://localhost:9999");
        assert_eq!(config.user_agent_prefix(), Some("MyIntegration/2.0"));
    }

    #[test]
    fn test_builder_accepts_fixture_routes() {
        let routes = Routes::new().with_route(Route::new("OnlyOne", "one"));
        let config = PartnerConfig::builder()
            .access_token(token())
            .routes(routes)
            .build()
            .unwrap();

        assert!(config.routes().lookup("OnlyOne").is_ok());
        assert!(config.routes().lookup("GetPartnerRelationships").is_err());
    }

    #[test]
    fn test_into_routes_moves_table() {
        let config = PartnerConfig::builder().access_token(token()).build().unwrap();
        let routes = config.into_routes();
        assert!(routes.lookup("GetReconciliationLineItems").is_ok());
    }
}
