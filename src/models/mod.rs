//! Resource models for Partner Center API responses.
//!
//! All response models deserialize leniently: unknown fields are ignored and
//! absent fields default, so additive service changes do not break existing
//! integrations.

pub mod collection;
pub mod invoice;
pub mod product_upgrade;
pub mod relationship;

pub use collection::{ResourceCollection, SeekBasedResourceCollection};
pub use invoice::InvoiceLineItem;
pub use product_upgrade::{
    ProductUpgradeStatus, ProductUpgradesErrorDetails, ProductUpgradesLineItem,
    UpgradedProductDetails,
};
pub use relationship::{PartnerRelationship, PartnerRelationshipType};
