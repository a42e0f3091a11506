//! Invoice reconciliation line item model.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single billing line on an invoice reconciliation.
///
/// Reconciliation data is sparse and service-versioned, so every field is
/// optional; absent fields deserialize to `None` rather than failing the
/// whole page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineItem {
    /// The partner's tenant id.
    #[serde(default)]
    pub partner_id: Option<String>,
    /// The billed customer's tenant id.
    #[serde(default)]
    pub customer_id: Option<String>,
    /// The billed customer's display name.
    #[serde(default)]
    pub customer_name: Option<String>,
    /// The invoice this line belongs to.
    #[serde(default)]
    pub invoice_number: Option<String>,
    /// Start of the charge period.
    #[serde(default)]
    pub charge_start_date: Option<DateTime<Utc>>,
    /// End of the charge period.
    #[serde(default)]
    pub charge_end_date: Option<DateTime<Utc>>,
    /// The subscription being billed.
    #[serde(default)]
    pub subscription_id: Option<String>,
    /// The purchased offer's display name.
    #[serde(default)]
    pub offer_name: Option<String>,
    /// The billed quantity.
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Price per unit.
    #[serde(default)]
    pub unit_price: Option<f64>,
    /// Amount before tax.
    #[serde(default)]
    pub subtotal: Option<f64>,
    /// Tax amount.
    #[serde(default)]
    pub tax_total: Option<f64>,
    /// Amount after tax.
    #[serde(default)]
    pub total: Option<f64>,
    /// ISO currency code for the amounts.
    #[serde(default)]
    pub currency: Option<String>,
}
