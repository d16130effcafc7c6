//! HTTP transport layer.
//!
//! This module provides the seam between the resource layer and the network.
//!
//! # Overview
//!
//! - [`Transport`]: The trait the resource layer sends requests through
//! - [`HttpClient`]: The default `reqwest`-backed transport
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw status + headers + body response
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`HttpError`]: Failures to obtain any response
//!
//! # Example
//!
//! ```rust,ignore
//! use lbaas_client::{BaseUrl, LbaasConfig};
//! use lbaas_client::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
//!
//! let config = LbaasConfig::builder()
//!     .base_url(BaseUrl::new("https://lb.example.com/v2").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "lbaas/loadbalancers")
//!     .build()
//!     .unwrap();
//!
//! let response = client.execute(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::Transport;
