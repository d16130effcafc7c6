//! Transport-level error types.
//!
//! This module contains the errors a [`Transport`](crate::clients::Transport)
//! can report: requests rejected before sending, and failures to obtain any
//! HTTP response at all. Non-2xx responses are *not* transport errors; they
//! are returned as ordinary [`HttpResponse`](crate::clients::HttpResponse)
//! values and interpreted by the resource layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use lbaas_client::clients::{HttpError, Transport};
//!
//! match transport.execute(request).await {
//!     Ok(response) => println!("Status {}", response.code),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::Transport { message }) => println!("Transport error: {message}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if:
/// - A POST or PUT request has no body
/// - A GET or DELETE request carries a body
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that must not carry a body.
        method: String,
    },
}

/// Unified error type for transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error from the default transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure reported by a custom transport.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
    },
}

impl HttpError {
    /// Creates an [`HttpError::Transport`] from any message.
    ///
    /// Intended for [`Transport`](crate::clients::Transport) implementations
    /// that are not backed by `reqwest`.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}
