//! Shared collection retrieval engine.
//!
//! [`CollectionOperations`] implements the request flow every collection
//! facade shares: resolve the route for its operation name, interpolate the
//! path, attach query parameters, issue the GET, and deserialize into the
//! right envelope. Facades stay thin; they prepare parameters and delegate
//! here.

use std::collections::HashMap;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::config::Route;
use crate::models::{ResourceCollection, SeekBasedResourceCollection};
use crate::operations::errors::ApiError;
use crate::partner::Partner;

/// Retrieval engine for one operation name, typed by its item model.
///
/// `PhantomData<fn() -> T>` keeps the type parameter without implying
/// ownership of a `T`, so the engine stays `Send + Sync` regardless of `T`.
#[derive(Debug)]
pub struct CollectionOperations<T> {
    partner: Partner,
    operation: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> CollectionOperations<T> {
    /// Creates an engine bound to a partner handle and an operation name.
    pub(crate) const fn new(partner: Partner, operation: &'static str) -> Self {
        Self {
            partner,
            operation,
            _marker: PhantomData,
        }
    }

    /// Resolves this operation's route from the configured table.
    pub(crate) fn route(&self) -> Result<&Route, ApiError> {
        Ok(self.partner.routes().lookup(self.operation)?)
    }

    /// Fetches a one-shot collection.
    pub(crate) async fn get_collection(
        &self,
        ids: &HashMap<&str, String>,
        parameters: &[(String, String)],
    ) -> Result<ResourceCollection<T>, ApiError> {
        let route = self.route()?;
        self.partner
            .service_client()
            .get(route, ids, parameters, None)
            .await
    }

    /// Fetches the first page of a seek-based collection.
    pub(crate) async fn get_seek_collection(
        &self,
        ids: &HashMap<&str, String>,
    ) -> Result<SeekBasedResourceCollection<T>, ApiError> {
        let route = self.route()?;
        self.partner.service_client().get(route, ids, &[], None).await
    }

    /// Fetches the next page of a seek-based collection.
    ///
    /// Sends `seekOperation=Next` (under the route's configured wire name)
    /// and the continuation token header.
    pub(crate) async fn get_seek_collection_next(
        &self,
        ids: &HashMap<&str, String>,
        continuation_token: &str,
    ) -> Result<SeekBasedResourceCollection<T>, ApiError> {
        let route = self.route()?;
        let seek_param = route.param("SeekOperation")?.to_string();
        let parameters = [(seek_param, "Next".to_string())];

        self.partner
            .service_client()
            .get(route, ids, &parameters, Some(continuation_token))
            .await
    }
}
