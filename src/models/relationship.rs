//! Partner relationship models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of commercial relationship between two partners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartnerRelationshipType {
    /// The partner transacts as an indirect reseller of the other party.
    #[serde(rename = "is_indirect_reseller_of")]
    IsIndirectResellerOf,
    /// The partner transacts as an indirect cloud solution provider.
    #[serde(rename = "is_indirect_cloud_solution_provider_of")]
    IsIndirectCloudSolutionProviderOf,
}

impl PartnerRelationshipType {
    /// Returns the value sent on the wire for this relationship type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IsIndirectResellerOf => "is_indirect_reseller_of",
            Self::IsIndirectCloudSolutionProviderOf => "is_indirect_cloud_solution_provider_of",
        }
    }
}

impl fmt::Display for PartnerRelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relationship between the signed-in partner and another partner.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRelationship {
    /// The other partner's tenant id.
    #[serde(default)]
    pub id: Option<String>,
    /// The other partner's display name.
    #[serde(default)]
    pub name: Option<String>,
    /// The other partner's Microsoft Partner Network id.
    #[serde(default)]
    pub mpn_id: Option<String>,
    /// The other partner's location.
    #[serde(default)]
    pub location: Option<String>,
    /// The state of the relationship (e.g. `"active"`).
    #[serde(default)]
    pub state: Option<String>,
    /// The kind of relationship.
    #[serde(default)]
    pub relationship_type: Option<PartnerRelationshipType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relationship_type_wire_values() {
        assert_eq!(
            PartnerRelationshipType::IsIndirectResellerOf.to_string(),
            "is_indirect_reseller_of"
        );
        assert_eq!(
            PartnerRelationshipType::IsIndirectCloudSolutionProviderOf.to_string(),
            "is_indirect_cloud_solution_provider_of"
        );
    }

    #[test]
    fn test_relationship_deserialization() {
        let relationship: PartnerRelationship = serde_json::from_value(json!({
            "id": "tenant-1",
            "name": "Contoso Reseller",
            "mpnId": "4847383",
            "location": "US",
            "state": "active",
            "relationshipType": "is_indirect_reseller_of"
        }))
        .unwrap();

        assert_eq!(relationship.id.as_deref(), Some("tenant-1"));
        assert_eq!(relationship.mpn_id.as_deref(), Some("4847383"));
        assert_eq!(
            relationship.relationship_type,
            Some(PartnerRelationshipType::IsIndirectResellerOf)
        );
    }

    #[test]
    fn test_relationship_with_sparse_body() {
        let relationship: PartnerRelationship =
            serde_json::from_value(json!({"name": "Fabrikam"})).unwrap();

        assert_eq!(relationship.name.as_deref(), Some("Fabrikam"));
        assert!(relationship.id.is_none());
        assert!(relationship.relationship_type.is_none());
    }
}
