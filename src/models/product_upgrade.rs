//! Product upgrade status models.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Identifying details of a product on either side of an upgrade.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradedProductDetails {
    /// The product id.
    #[serde(default)]
    pub id: Option<String>,
    /// The product's display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Error details for a line item whose upgrade failed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpgradesErrorDetails {
    /// Service error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable description of the failure.
    #[serde(default)]
    pub description: Option<String>,
}

/// One entitlement's progress within a product upgrade.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpgradesLineItem {
    /// Failure details, present when this line item's upgrade failed.
    #[serde(default)]
    pub error_details: Option<ProductUpgradesErrorDetails>,
    /// The product being upgraded from.
    #[serde(default)]
    pub source_product: Option<UpgradedProductDetails>,
    /// This line item's upgrade status.
    #[serde(default)]
    pub status: Option<String>,
    /// The product being upgraded to.
    #[serde(default)]
    pub target_product: Option<UpgradedProductDetails>,
    /// When the upgrade completed for this line item.
    #[serde(default)]
    pub upgraded_date: Option<DateTime<Utc>>,
}

/// The status of a product upgrade request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpgradeStatus {
    /// The upgrade request id.
    #[serde(default)]
    pub id: Option<String>,
    /// Overall upgrade status (e.g. `"In Progress"`, `"Completed"`).
    #[serde(default)]
    pub status: Option<String>,
    /// Per-entitlement progress.
    #[serde(default)]
    pub line_items: Vec<ProductUpgradesLineItem>,
}
