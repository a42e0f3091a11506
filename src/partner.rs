//! The Partner Center entry point.

use std::sync::Arc;

use crate::clients::{HttpClient, ServiceClient};
use crate::config::{PartnerConfig, Routes};
use crate::operations::{
    ProductUpgradeOperations, ReconciliationLineItemCollection, RelationshipCollection,
};

/// Base path of the Partner Center REST API.
const API_BASE_PATH: &str = "/v1";

#[derive(Debug)]
struct PartnerInner {
    client: ServiceClient,
    routes: Routes,
}

/// Handle to the Partner Center API.
///
/// `Partner` is a cheaply cloneable handle over shared state (the HTTP
/// client and the route table); operation facades obtained from it hold
/// their own clone, so a facade can outlive the handle that created it.
///
/// # Example
///
/// ```rust,no_run
/// use partner_center::{AccessToken, Partner, PartnerConfig, PartnerRelationshipType};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PartnerConfig::builder()
///     .access_token(AccessToken::new("token")?)
///     .build()?;
/// let partner = Partner::new(config);
///
/// let resellers = partner
///     .relationships()
///     .get(PartnerRelationshipType::IsIndirectResellerOf)
///     .await?;
/// for relationship in &resellers {
///     println!("{:?}", relationship.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Partner {
    inner: Arc<PartnerInner>,
}

// Verify Partner is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Partner>();
};

impl Partner {
    /// Creates a partner handle from the given configuration.
    #[must_use]
    pub fn new(config: PartnerConfig) -> Self {
        let http = HttpClient::new(API_BASE_PATH, &config);
        let routes = config.into_routes();

        Self {
            inner: Arc::new(PartnerInner {
                client: ServiceClient::new(http),
                routes,
            }),
        }
    }

    /// Returns operations on the partner's relationship collection.
    #[must_use]
    pub fn relationships(&self) -> RelationshipCollection {
        RelationshipCollection::new(self.clone())
    }

    /// Returns seek-paged access to one invoice's reconciliation line items.
    #[must_use]
    pub fn reconciliation_line_items(
        &self,
        invoice_id: impl Into<String>,
    ) -> ReconciliationLineItemCollection {
        ReconciliationLineItemCollection::new(self.clone(), invoice_id.into())
    }

    /// Returns operations on product upgrade requests.
    #[must_use]
    pub fn product_upgrades(&self) -> ProductUpgradeOperations {
        ProductUpgradeOperations::new(self.clone())
    }

    pub(crate) fn service_client(&self) -> &ServiceClient {
        &self.inner.client
    }

    pub(crate) fn routes(&self) -> &Routes {
        &self.inner.routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessToken;

    fn partner() -> Partner {
        let config = PartnerConfig::builder()
            .access_token(AccessToken::new("test-token").unwrap())
            .build()
            .unwrap();
        Partner::new(config)
    }

    #[test]
    fn test_partner_clones_share_state() {
        let partner = partner();
        let clone = partner.clone();
        assert!(Arc::ptr_eq(&partner.inner, &clone.inner));
    }

    #[test]
    fn test_facades_outlive_handle() {
        let relationships = {
            let partner = partner();
            partner.relationships()
        };
        // The facade holds its own handle; dropping the original is fine.
        let _ = relationships;
    }

    #[test]
    fn test_reconciliation_facade_binds_invoice() {
        let collection = partner().reconciliation_line_items("D02005YFHI");
        assert_eq!(collection.invoice_id(), "D02005YFHI");
    }
}
