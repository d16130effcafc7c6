//! HTTP response types.
//!
//! The body is kept as raw text so that the resource layer can decode it
//! strictly, and so that error responses can be surfaced verbatim.

use std::collections::HashMap;

/// Header names that carry the server-side request id, in lookup order.
const REQUEST_ID_HEADERS: &[&str] = &["x-openstack-request-id", "x-request-id"];

/// A raw HTTP response returned by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body. Empty for `204 No Content`.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`. Header names are lowercased.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_ascii_lowercase(), values))
            .collect();
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Creates a response with no headers.
    #[must_use]
    pub fn with_body(code: u16, body: impl Into<String>) -> Self {
        Self::new(code, HashMap::new(), body)
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the server request id, if present.
    ///
    /// Useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        REQUEST_ID_HEADERS.iter().find_map(|name| self.header(name))
    }
}
