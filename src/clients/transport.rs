//! The transport seam between the resource layer and the network.
//!
//! Everything above this trait is pure request building and response
//! interpretation. [`HttpClient`](crate::clients::HttpClient) is the default
//! implementation; tests and embedders can provide their own.

use std::sync::Arc;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Executes HTTP requests against the load balancer API.
///
/// Implementations own authentication, TLS, pooling, timeouts and any retry
/// policy. A non-2xx status is a successful execution: return it as an
/// [`HttpResponse`] and let the caller interpret it. Only failures to obtain a
/// response at all are errors.
///
/// # Example
///
/// ```rust
/// use lbaas_client::clients::{HttpError, HttpRequest, HttpResponse, Transport};
///
/// struct Canned(&'static str);
///
/// impl Transport for Canned {
///     async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::with_body(200, self.0))
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Executes a single request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request is invalid or no response could be
    /// obtained.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

impl<T: Transport> Transport for Arc<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        T::execute(self, request).await
    }
}

impl<T: Transport> Transport for &T {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        T::execute(self, request).await
    }
}
