//! Typed service client.
//!
//! [`ServiceClient`] sits between the operations layer and the HTTP
//! transport. It interpolates route path templates, assembles the query
//! string, attaches the continuation-token header for seek requests, and
//! deserializes response bodies into typed models.
//!
//! Query parameter values are attached verbatim. Callers that need a value
//! percent-encoded (such as a serialized filter) encode it before passing it
//! in; the client never re-encodes, so an encoded value appears on the wire
//! exactly as given.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::http_client::HttpClient;
use crate::config::Route;
use crate::operations::errors::ApiError;

/// Header carrying the continuation token on seek requests.
pub const CONTINUATION_TOKEN_HEADER: &str = "MS-ContinuationToken";

/// Typed GET client shared by all operation facades.
#[derive(Debug)]
pub struct ServiceClient {
    http: HttpClient,
}

// Verify ServiceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ServiceClient>();
};

impl ServiceClient {
    /// Creates a service client over the given transport.
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Issues a GET for the given route and deserializes the JSON body.
    ///
    /// `ids` supplies values for `{name}` placeholders in the route's path
    /// template. `parameters` are `(wire_name, value)` pairs appended as the
    /// query string, values verbatim. `continuation_token`, when present, is
    /// sent in the `MS-ContinuationToken` header.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if the path template references
    /// a placeholder missing from `ids`, [`ApiError::Http`] for transport
    /// and response failures, and [`ApiError::ResponseParsing`] if the body
    /// does not match `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        route: &Route,
        ids: &HashMap<&str, String>,
        parameters: &[(String, String)],
        continuation_token: Option<&str>,
    ) -> Result<T, ApiError> {
        let path = Self::build_path(route.path(), ids)?;
        let path_and_query = Self::append_query(path, parameters);

        let extra_headers = continuation_token.map(|token| {
            let mut headers = HashMap::new();
            headers.insert(CONTINUATION_TOKEN_HEADER.to_string(), token.to_string());
            headers
        });

        tracing::debug!(
            operation = route.operation(),
            path = %path_and_query,
            "dispatching operation request"
        );

        let response = self.http.get(&path_and_query, extra_headers.as_ref()).await?;

        serde_json::from_value(response.body).map_err(ApiError::ResponseParsing)
    }

    /// Interpolates `{name}` placeholders in a path template.
    fn build_path(template: &str, ids: &HashMap<&str, String>) -> Result<String, ApiError> {
        let mut path = template.to_string();
        for (name, value) in ids {
            path = path.replace(&format!("{{{name}}}"), value);
        }

        if let (Some(open), Some(close)) = (path.find('{'), path.find('}')) {
            if open < close {
                return Err(ApiError::InvalidArgument {
                    reason: format!(
                        "no value supplied for path placeholder {}",
                        &path[open..=close]
                    ),
                });
            }
        }

        Ok(path)
    }

    /// Appends `(name, value)` pairs as a query string, values verbatim.
    fn append_query(path: String, parameters: &[(String, String)]) -> String {
        if parameters.is_empty() {
            return path;
        }

        let query = parameters
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        format!("{path}?{query}")
    }
}
