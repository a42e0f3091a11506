//! Partner relationship retrieval operations.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{PartnerRelationship, PartnerRelationshipType, ResourceCollection};
use crate::operations::collection::CollectionOperations;
use crate::operations::errors::ApiError;
use crate::partner::Partner;
use crate::query::{Query, QueryType};

/// Operations on the signed-in partner's relationship collection.
///
/// Obtained from [`Partner::relationships`](crate::Partner::relationships).
#[derive(Debug)]
pub struct RelationshipCollection {
    ops: CollectionOperations<PartnerRelationship>,
}

impl RelationshipCollection {
    pub(crate) const fn new(partner: Partner) -> Self {
        Self {
            ops: CollectionOperations::new(partner, "GetPartnerRelationships"),
        }
    }

    /// Retrieves all relationships of the given type.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the route table lacks the operation
    /// or parameter entry, [`ApiError::Http`] for transport and response
    /// failures, and [`ApiError::ResponseParsing`] if the body does not
    /// deserialize.
    pub async fn get(
        &self,
        relationship_type: PartnerRelationshipType,
    ) -> Result<ResourceCollection<PartnerRelationship>, ApiError> {
        let parameters = self.type_parameter(relationship_type)?;
        self.ops.get_collection(&HashMap::new(), &parameters).await
    }

    /// Retrieves relationships of the given type, narrowed by a query.
    ///
    /// Only [`QueryType::Simple`] queries are accepted. When the query
    /// carries a filter, the filter is serialized to JSON, percent-encoded,
    /// and attached under the route's configured filter parameter; the
    /// service receives it as a single encoded query value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] for non-simple queries and
    /// [`ApiError::RequestParsing`] if the filter fails to serialize, both
    /// before any request is issued. Otherwise fails as [`Self::get`] does.
    pub async fn query<F: Serialize>(
        &self,
        relationship_type: PartnerRelationshipType,
        query: &Query<F>,
    ) -> Result<ResourceCollection<PartnerRelationship>, ApiError> {
        if query.query_type() != QueryType::Simple {
            return Err(ApiError::InvalidArgument {
                reason: format!(
                    "relationship queries must be simple, got {:?}",
                    query.query_type()
                ),
            });
        }

        let mut parameters = self.type_parameter(relationship_type)?;

        if let Some(filter) = query.filter() {
            let json = serde_json::to_string(filter).map_err(ApiError::RequestParsing)?;
            let encoded = urlencoding::encode(&json).into_owned();
            let wire_name = self.ops.route()?.param("Filter")?.to_string();
            parameters.push((wire_name, encoded));
        }

        self.ops.get_collection(&HashMap::new(), &parameters).await
    }

    /// Builds the relationship type query parameter under its wire name.
    fn type_parameter(
        &self,
        relationship_type: PartnerRelationshipType,
    ) -> Result<Vec<(String, String)>, ApiError> {
        let wire_name = self.ops.route()?.param("RelationshipType")?.to_string();
        Ok(vec![(wire_name, relationship_type.as_str().to_string())])
    }
}
