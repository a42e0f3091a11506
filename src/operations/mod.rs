//! Operation facades.
//!
//! Each facade covers one resource family and delegates request mechanics to
//! the shared [`collection`] engine. Facades are obtained from
//! [`Partner`](crate::Partner) accessors rather than constructed directly.

pub mod collection;
pub mod errors;
pub mod product_upgrades;
pub mod reconciliation;
pub mod relationships;

pub use errors::ApiError;
pub use product_upgrades::ProductUpgradeOperations;
pub use reconciliation::ReconciliationLineItemCollection;
pub use relationships::RelationshipCollection;
