//! Resource-level error types.
//!
//! Every resource operation returns either a fully decoded result or exactly
//! one [`ResourceError`]. Nothing is retried or swallowed.
//!
//! # Error Handling
//!
//! HTTP status codes are mapped to semantic variants:
//!
//! - **2xx**: success
//! - **404** on an id-addressed operation: [`ResourceError::NotFound`]
//! - **Any other non-2xx**: [`ResourceError::Api`] with status and raw body
//!
//! # Example
//!
//! ```rust,ignore
//! use lbaas_client::rest::ResourceError;
//!
//! match client.load_balancers().get("ae8e2072-...").await {
//!     Ok(lb) => println!("{} is {}", lb.id, lb.provisioning_status),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{resource} {id} is gone");
//!     }
//!     Err(ResourceError::Api { status, body, .. }) => {
//!         println!("server said {status}: {body}");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No HTTP response could be obtained.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The response body did not match the expected envelope or field shape.
    #[error("Failed to decode {resource} response: {message}")]
    Decode {
        /// The type name of the resource (e.g., `LoadBalancer`).
        resource: &'static str,
        /// What was wrong with the body.
        message: String,
    },

    /// The request could not be encoded into a JSON body.
    #[error("Failed to encode {resource} request: {message}")]
    Encode {
        /// The type name of the resource.
        resource: &'static str,
        /// Why encoding failed.
        message: String,
    },

    /// The server answered with a non-2xx status other than an id-addressed 404.
    #[error("{resource} request failed with status {status}: {body}")]
    Api {
        /// The type name of the resource.
        resource: &'static str,
        /// The HTTP status code.
        status: u16,
        /// The raw response body, kept for diagnostics.
        body: String,
        /// The server request id, when the response carried one.
        request_id: Option<String>,
    },

    /// The addressed resource does not exist (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource.
        resource: &'static str,
        /// The id that was requested.
        id: String,
    },

    /// A listing kept advertising next links after the page cap was reached.
    #[error("{resource} listing exceeded {max_pages} pages; the server may be returning a cyclic next link")]
    PaginationLoop {
        /// The type name of the resource.
        resource: &'static str,
        /// The configured page cap.
        max_pages: u32,
    },

    /// No path could be built for the operation, e.g. because the id is empty.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "update", "delete").
        operation: &'static str,
    },
}

impl ResourceError {
    /// Creates a `ResourceError` from a non-2xx HTTP response.
    ///
    /// A 404 maps to [`ResourceError::NotFound`] only when `id` is given, that
    /// is, when the request addressed a single resource. Every other status
    /// maps to [`ResourceError::Api`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use lbaas_client::rest::ResourceError;
    ///
    /// let error = ResourceError::from_http_response(
    ///     404,
    ///     r#"{"faultstring": "Load Balancer abc could not be found."}"#,
    ///     "LoadBalancer",
    ///     Some("abc"),
    ///     None,
    /// );
    /// assert!(error.is_not_found());
    /// ```
    #[must_use]
    pub fn from_http_response(
        code: u16,
        body: &str,
        resource: &'static str,
        id: Option<&str>,
        request_id: Option<&str>,
    ) -> Self {
        match (code, id) {
            (404, Some(id)) => Self::NotFound {
                resource,
                id: id.to_string(),
            },
            _ => Self::Api {
                resource,
                status: code,
                body: body.to_string(),
                request_id: request_id.map(ToString::to_string),
            },
        }
    }

    /// Creates a [`ResourceError::Decode`] from any displayable cause.
    #[must_use]
    pub fn decode(resource: &'static str, message: impl std::fmt::Display) -> Self {
        Self::Decode {
            resource,
            message: message.to_string(),
        }
    }

    /// Creates a [`ResourceError::Encode`] from any displayable cause.
    #[must_use]
    pub fn encode(resource: &'static str, message: impl std::fmt::Display) -> Self {
        Self::Encode {
            resource,
            message: message.to_string(),
        }
    }

    /// Returns `true` for [`ResourceError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the HTTP status the server answered with, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// Returns the server request id if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Api { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}
