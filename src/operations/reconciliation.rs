//! Invoice reconciliation line item retrieval.

use std::collections::HashMap;

use crate::models::{InvoiceLineItem, SeekBasedResourceCollection};
use crate::operations::collection::CollectionOperations;
use crate::operations::errors::ApiError;
use crate::partner::Partner;

/// Seek-paged access to one invoice's reconciliation line items.
///
/// Obtained from
/// [`Partner::reconciliation_line_items`](crate::Partner::reconciliation_line_items).
/// Reconciliation data can run to millions of rows, so it is only served in
/// pages addressed by an opaque continuation token.
#[derive(Debug)]
pub struct ReconciliationLineItemCollection {
    ops: CollectionOperations<InvoiceLineItem>,
    invoice_id: String,
}

impl ReconciliationLineItemCollection {
    pub(crate) const fn new(partner: Partner, invoice_id: String) -> Self {
        Self {
            ops: CollectionOperations::new(partner, "GetReconciliationLineItems"),
            invoice_id,
        }
    }

    /// Returns the invoice id this collection is bound to.
    #[must_use]
    pub fn invoice_id(&self) -> &str {
        &self.invoice_id
    }

    /// Fetches the first page of line items.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] on route table misses, [`ApiError::Http`]
    /// for transport and response failures, and [`ApiError::ResponseParsing`]
    /// if the body does not deserialize.
    pub async fn get(&self) -> Result<SeekBasedResourceCollection<InvoiceLineItem>, ApiError> {
        self.ops.get_seek_collection(&self.ids()).await
    }

    /// Fetches the page after `previous`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if `previous` is the final page
    /// (it carries no continuation token); no request is issued in that
    /// case. Otherwise fails as [`Self::get`] does.
    pub async fn get_next(
        &self,
        previous: &SeekBasedResourceCollection<InvoiceLineItem>,
    ) -> Result<SeekBasedResourceCollection<InvoiceLineItem>, ApiError> {
        let token = previous
            .continuation_token()
            .ok_or_else(|| ApiError::InvalidArgument {
                reason: "the previous page was the final one; it has no continuation token"
                    .to_string(),
            })?;

        self.ops.get_seek_collection_next(&self.ids(), token).await
    }

    fn ids(&self) -> HashMap<&str, String> {
        let mut ids = HashMap::new();
        ids.insert("invoice_id", self.invoice_id.clone());
        ids
    }
}
