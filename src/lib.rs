//! # Partner Center SDK for Rust
//!
//! An async client for the Microsoft Partner Center REST API, covering
//! partner relationship retrieval, invoice reconciliation paging, and
//! product upgrade status.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use partner_center::{
//!     AccessToken, FieldFilter, Partner, PartnerConfig, PartnerRelationshipType, Query,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PartnerConfig::builder()
//!     .access_token(AccessToken::new(std::env::var("PARTNER_CENTER_TOKEN")?)?)
//!     .build()?;
//! let partner = Partner::new(config);
//!
//! // Plain retrieval.
//! let resellers = partner
//!     .relationships()
//!     .get(PartnerRelationshipType::IsIndirectResellerOf)
//!     .await?;
//!
//! // Filtered retrieval.
//! let query = Query::simple_with_filter(FieldFilter::new("state", "active"));
//! let active = partner
//!     .relationships()
//!     .query(PartnerRelationshipType::IsIndirectResellerOf, &query)
//!     .await?;
//!
//! // Seek-based paging.
//! let invoice = partner.reconciliation_line_items("D02005YFHI");
//! let mut page = invoice.get().await?;
//! loop {
//!     for line in page.items() {
//!         println!("{:?} {:?}", line.offer_name, line.total);
//!     }
//!     if page.is_complete() {
//!         break;
//!     }
//!     page = invoice.get_next(&page).await?;
//! }
//! # let _ = (resellers, active);
//! # Ok(())
//! # }
//! ```
//!
//! ## Design notes
//!
//! - Every operation resolves its URL path and query parameter names from an
//!   injected [`Routes`] table, so wire-level renames never touch call
//!   sites and tests can substitute fixture tables.
//! - Errors are categorized ([`ApiError`]) and never retried internally;
//!   [`ApiError::is_retryable`] tells callers which failures are worth
//!   reissuing.
//! - Response models deserialize leniently: unknown fields are ignored,
//!   absent fields default to `None`.

#![forbid(unsafe_code)]

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod operations;
pub mod partner;
pub mod query;

pub use clients::{HttpError, HttpResponseError};
pub use config::{AccessToken, ApiEndpoint, PartnerConfig, PartnerConfigBuilder, Route, Routes};
pub use error::ConfigError;
pub use models::{
    InvoiceLineItem, PartnerRelationship, PartnerRelationshipType, ProductUpgradeStatus,
    ProductUpgradesErrorDetails, ProductUpgradesLineItem, ResourceCollection,
    SeekBasedResourceCollection, UpgradedProductDetails,
};
pub use operations::{
    ApiError, ProductUpgradeOperations, ReconciliationLineItemCollection, RelationshipCollection,
};
pub use partner::Partner;
pub use query::{FieldFilter, FilterOperator, Query, QueryType};
