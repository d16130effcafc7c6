//! REST client for the load balancer API.
//!
//! This module provides the [`RestClient`] type: a thin, stateless layer over
//! a [`Transport`] that resource operations are issued through.

use std::collections::BTreeMap;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::config::{LbaasConfig, DEFAULT_MAX_PAGES};
use crate::rest::resources::LoadBalancers;
use crate::rest::ResourceError;

/// REST API client for the load balancer API.
///
/// Holds only the injected transport and the pagination page cap; every call
/// is a fresh round trip and nothing is cached between calls.
///
/// # Thread Safety
///
/// `RestClient<HttpClient>` is `Send + Sync`, and all operations take `&self`,
/// so one client can serve any number of concurrent callers.
///
/// # Example
///
/// ```rust,ignore
/// use lbaas_client::{BaseUrl, LbaasConfig, RestClient};
///
/// let config = LbaasConfig::builder()
///     .base_url(BaseUrl::new("https://lb.example.com/v2").unwrap())
///     .build()
///     .unwrap();
///
/// let client = RestClient::new(&config)?;
/// let all = client.load_balancers().list(None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient<T = HttpClient> {
    transport: T,
    max_pages: u32,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient<HttpClient> {
    /// Creates a client backed by the default `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the HTTP client cannot be constructed.
    pub fn new(config: &LbaasConfig) -> Result<Self, HttpError> {
        let transport = HttpClient::new(config)?;
        Ok(Self {
            transport,
            max_pages: config.max_pages(),
        })
    }
}

impl<T: Transport> RestClient<T> {
    /// Creates a client over an arbitrary transport with the default page cap.
    #[must_use]
    pub const fn with_transport(transport: T) -> Self {
        Self {
            transport,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Overrides the pagination page cap. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the maximum number of pages a listing may fetch.
    #[must_use]
    pub const fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Returns the load balancer operations for this client.
    #[must_use]
    pub const fn load_balancers(&self) -> LoadBalancers<'_, T> {
        LoadBalancers::new(self)
    }

    /// Sends a prepared request through the transport.
    ///
    /// The response is returned whatever its status; interpreting it is up to
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] if no response was obtained.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ResourceError> {
        Ok(self.transport.execute(request).await?)
    }

    /// Builds a request from its parts and sends it.
    ///
    /// `body` is required for POST and PUT and rejected for GET and DELETE.
    /// An empty `query` sends no query string.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] if the request is malformed or no
    /// response was obtained.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: BTreeMap<String, String>,
    ) -> Result<HttpResponse, ResourceError> {
        let mut builder = HttpRequest::builder(method, path).query(query);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let request = builder.build().map_err(HttpError::from)?;

        self.send(request).await
    }
}
