//! Route and wire-parameter configuration for API operations.
//!
//! Every operation in the SDK resolves its URL path template and the wire
//! names of its query parameters through a [`Routes`] table instead of
//! hard-coding them. The table maps a logical operation name (e.g.
//! `"GetPartnerRelationships"`) to a [`Route`]: a path template plus a map
//! from logical parameter names to the names actually sent on the wire. This
//! indirection lets a wire-level rename happen without touching call sites.
//!
//! # Lifecycle
//!
//! A `Routes` value is constructed once (normally [`Routes::standard`]),
//! handed to [`PartnerConfig`](crate::PartnerConfig), and never mutated
//! afterward. It is shared read-only across every operation instance, so
//! concurrent access needs no synchronization. Tests substitute fixture
//! tables through the config builder instead of touching global state.
//!
//! # Failure mode
//!
//! A lookup miss means the deployed table does not match the code asking for
//! it. That is a configuration-integrity fault: [`ConfigError`] is returned
//! immediately and is never retryable.
//!
//! # Example
//!
//! ```rust
//! use partner_center::Routes;
//!
//! let routes = Routes::standard();
//! let route = routes.lookup("GetPartnerRelationships").unwrap();
//! assert_eq!(route.path(), "relationships");
//! assert_eq!(route.param("RelationshipType").unwrap(), "relationship_type");
//! ```

use std::collections::HashMap;

use crate::error::ConfigError;

/// A single route entry: path template plus parameter name map.
///
/// Path templates use `{name}` placeholders (e.g.
/// `invoices/{invoice_id}/reconciliationlineitems`) interpolated by the
/// service client from an id map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    operation: String,
    path: String,
    params: HashMap<String, String>,
}

impl Route {
    /// Creates a route entry for the given operation name and path template.
    #[must_use]
    pub fn new(operation: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            path: path.into(),
            params: HashMap::new(),
        }
    }

    /// Adds a logical-name to wire-name parameter mapping.
    #[must_use]
    pub fn with_param(mut self, logical: impl Into<String>, wire: impl Into<String>) -> Self {
        self.params.insert(logical.into(), wire.into());
        self
    }

    /// Returns the operation name this entry belongs to.
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Returns the path template.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Resolves a logical parameter name to its wire name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownParameter`] if the entry has no mapping
    /// for `logical`.
    pub fn param(&self, logical: &str) -> Result<&str, ConfigError> {
        self.params.get(logical).map(String::as_str).ok_or_else(|| {
            ConfigError::UnknownParameter {
                operation: self.operation.clone(),
                parameter: logical.to_string(),
            }
        })
    }
}

/// The read-only operation route table.
///
/// # Thread Safety
///
/// `Routes` is never mutated after construction and is `Send + Sync`, so one
/// table can back any number of concurrent operation invocations.
#[derive(Debug, Clone, Default)]
pub struct Routes {
    apis: HashMap<String, Route>,
}

// Verify shared config types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Route>();
    assert_send_sync::<Routes>();
};

impl Routes {
    /// Creates an empty table. Mostly useful for fixtures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table covering every operation this SDK ships.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_route(
                Route::new("GetPartnerRelationships", "relationships")
                    .with_param("RelationshipType", "relationship_type")
                    .with_param("Filter", "filter"),
            )
            .with_route(
                Route::new(
                    "GetReconciliationLineItems",
                    "invoices/{invoice_id}/reconciliationlineitems",
                )
                .with_param("SeekOperation", "seekOperation"),
            )
            .with_route(Route::new(
                "GetProductUpgradeStatus",
                "productupgrades/{upgrade_id}/status",
            ))
    }

    /// Adds (or replaces) a route entry, keyed by its operation name.
    #[must_use]
    pub fn with_route(mut self, route: Route) -> Self {
        self.apis.insert(route.operation.clone(), route);
        self
    }

    /// Looks up the route entry for an operation name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownOperation`] if the table has no entry.
    pub fn lookup(&self, operation: &str) -> Result<&Route, ConfigError> {
        self.apis
            .get(operation)
            .ok_or_else(|| ConfigError::UnknownOperation {
                operation: operation.to_string(),
            })
    }
}
