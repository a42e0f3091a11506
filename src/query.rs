//! Query descriptors for filtered collection retrieval.
//!
//! A [`Query`] describes how a collection should be fetched. Only the
//! [`QueryType::Simple`] shape is executable by the retrieval operations in
//! this crate; the other variants exist so callers constructing queries
//! generically get a precise argument error before any request is issued,
//! rather than a confusing service response.

use serde::Serialize;

/// The shape of a collection query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    /// A plain filtered read. The only type the retrieval operations accept.
    Simple,
    /// A paged read addressed by index and page size.
    Indexed,
    /// A count-only read.
    Count,
}

/// Comparison operator for a [`FieldFilter`].
///
/// Serialized in camelCase to match the service contract. Omitted from the
/// wire when unset; the service defaults to equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    Equals,
    StartsWith,
    Substring,
}

/// A single-field filter, serialized as a compact JSON object.
///
/// The serialized form is exactly `{"field":"...","value":"..."}` (plus
/// `"operator"` when set). Operations serialize the filter, percent-encode
/// the result, and attach it under the route's configured wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFilter {
    field: String,
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    operator: Option<FilterOperator>,
}

impl FieldFilter {
    /// Creates a filter matching `field` against `value` (service-default
    /// equality).
    #[must_use]
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            operator: None,
        }
    }

    /// Sets an explicit comparison operator.
    #[must_use]
    pub const fn with_operator(mut self, operator: FilterOperator) -> Self {
        self.operator = Some(operator);
        self
    }

    /// Returns the filtered field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the value being matched.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A query descriptor: a [`QueryType`] plus an optional filter.
///
/// Generic over the filter type so any `Serialize` filter shape can ride
/// along; [`FieldFilter`] is the default and the only shape the built-in
/// operations produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<F = FieldFilter> {
    query_type: QueryType,
    filter: Option<F>,
}

impl<F> Query<F> {
    /// Creates a query of the given type with no filter.
    #[must_use]
    pub const fn new(query_type: QueryType) -> Self {
        Self {
            query_type,
            filter: None,
        }
    }

    /// Creates an unfiltered simple query.
    #[must_use]
    pub const fn simple() -> Self {
        Self::new(QueryType::Simple)
    }

    /// Creates a simple query carrying a filter.
    #[must_use]
    pub const fn simple_with_filter(filter: F) -> Self {
        Self {
            query_type: QueryType::Simple,
            filter: Some(filter),
        }
    }

    /// Returns the query type.
    #[must_use]
    pub const fn query_type(&self) -> QueryType {
        self.query_type
    }

    /// Returns the filter, if any.
    #[must_use]
    pub const fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_filter_serializes_compact() {
        let filter = FieldFilter::new("RelationshipType", "is_indirect_reseller_of");
        let json = serde_json::to_string(&filter).unwrap();

        assert_eq!(
            json,
            r#"{"field":"RelationshipType","value":"is_indirect_reseller_of"}"#
        );
    }

    #[test]
    fn test_field_filter_with_operator() {
        let filter =
            FieldFilter::new("Name", "Contoso").with_operator(FilterOperator::StartsWith);
        let json = serde_json::to_string(&filter).unwrap();

        assert_eq!(
            json,
            r#"{"field":"Name","value":"Contoso","operator":"startsWith"}"#
        );
    }

    #[test]
    fn test_simple_query_has_no_filter() {
        let query: Query = Query::simple();
        assert_eq!(query.query_type(), QueryType::Simple);
        assert!(query.filter().is_none());
    }

    #[test]
    fn test_simple_with_filter_keeps_filter() {
        let query = Query::simple_with_filter(FieldFilter::new("status", "active"));
        assert_eq!(query.query_type(), QueryType::Simple);
        assert_eq!(query.filter().unwrap().field(), "status");
    }

    #[test]
    fn test_non_simple_query_types() {
        let indexed: Query = Query::new(QueryType::Indexed);
        let count: Query = Query::new(QueryType::Count);
        assert_eq!(indexed.query_type(), QueryType::Indexed);
        assert_eq!(count.query_type(), QueryType::Count);
    }
}
