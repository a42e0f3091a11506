//! HTTP client layer for Partner Center API communication.
//!
//! - [`HttpClient`]: the low-level transport (reqwest, headers, errors)
//! - [`ServiceClient`]: the typed layer the operation facades call
//! - [`HttpResponse`]: parsed response wrapper
//! - [`HttpError`] / [`HttpResponseError`]: transport error types

pub mod errors;
pub mod http_client;
pub mod http_response;
pub mod service;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::HttpClient;
pub use http_response::HttpResponse;
pub use service::ServiceClient;
