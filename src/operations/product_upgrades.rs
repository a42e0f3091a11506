//! Product upgrade status retrieval.

use std::collections::HashMap;

use crate::models::ProductUpgradeStatus;
use crate::operations::errors::ApiError;
use crate::partner::Partner;

/// Operations on product upgrade requests.
///
/// Obtained from
/// [`Partner::product_upgrades`](crate::Partner::product_upgrades).
#[derive(Debug)]
pub struct ProductUpgradeOperations {
    partner: Partner,
}

impl ProductUpgradeOperations {
    pub(crate) const fn new(partner: Partner) -> Self {
        Self { partner }
    }

    /// Retrieves the status of an upgrade request by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] on route table misses, [`ApiError::Http`]
    /// for transport and response failures, and [`ApiError::ResponseParsing`]
    /// if the body does not deserialize.
    pub async fn get_status(
        &self,
        upgrade_id: &str,
    ) -> Result<ProductUpgradeStatus, ApiError> {
        let route = self.partner.routes().lookup("GetProductUpgradeStatus")?;

        let mut ids = HashMap::new();
        ids.insert("upgrade_id", upgrade_id.to_string());

        self.partner
            .service_client()
            .get(route, &ids, &[], None)
            .await
    }
}
