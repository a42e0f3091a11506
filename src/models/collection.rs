//! Typed collection envelopes.
//!
//! Collection endpoints return a JSON envelope with a `totalCount` and an
//! `items` array. Seek-based endpoints additionally return a
//! `continuationToken` that addresses the next page.

use serde::Deserialize;

/// A one-shot collection of resources.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCollection<T> {
    /// Total item count as reported by the service, when present.
    #[serde(default)]
    pub total_count: Option<u64>,
    /// The items in this collection.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> ResourceCollection<T> {
    /// Returns the items as a slice.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the collection, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns the number of items in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this collection holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for ResourceCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResourceCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A page of a seek-based collection.
///
/// The `continuation_token` addresses the next page; its absence marks the
/// final page. The token is opaque and must be passed back unmodified.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeekBasedResourceCollection<T> {
    /// Total item count as reported by the service, when present.
    #[serde(default)]
    pub total_count: Option<u64>,
    /// The items in this page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Opaque token addressing the next page; `None` on the last page.
    #[serde(default)]
    pub continuation_token: Option<String>,
}

impl<T> SeekBasedResourceCollection<T> {
    /// Returns the items of this page as a slice.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns the number of items in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the continuation token, if the collection has more pages.
    #[must_use]
    pub fn continuation_token(&self) -> Option<&str> {
        self.continuation_token.as_deref()
    }

    /// Returns `true` if this is the final page.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.continuation_token.is_none()
    }
}

impl<T> IntoIterator for SeekBasedResourceCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
