//! JSON envelope codec.
//!
//! The API nests every payload under a single top-level key:
//!
//! ```json
//! {"loadbalancer": {"id": "..."}}
//! {"loadbalancers": [{"id": "..."}], "loadbalancers_links": [{"rel": "next", "href": "..."}]}
//! ```
//!
//! The functions here add and remove that nesting. They are pure and never
//! default anything: a missing key or a field that fails to coerce is a
//! [`ResourceError::Decode`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::ResourceError;

/// A link from a collection's `<plural>_links` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// The link relation, e.g. `next` or `previous`.
    pub rel: String,
    /// The target URL.
    pub href: String,
}

/// One decoded page of a collection response.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    /// The resources on this page, in server order.
    pub items: Vec<R>,
    /// The `href` of the `next` link, if the server advertised one.
    pub next: Option<String>,
}

impl<R> Page<R> {
    /// Returns `true` if this is the final page.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Nests `payload` under `key`.
///
/// # Example
///
/// ```rust
/// use lbaas_client::rest::envelope::wrap_singular;
/// use serde_json::json;
///
/// let body = wrap_singular("loadbalancer", json!({"name": "LB"}));
/// assert_eq!(body, json!({"loadbalancer": {"name": "LB"}}));
/// ```
#[must_use]
pub fn wrap_singular(key: &str, payload: Value) -> Value {
    let mut body = Map::new();
    body.insert(key.to_string(), payload);
    Value::Object(body)
}

/// Extracts and decodes the resource nested under `key`.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] if the body is not a JSON object, `key`
/// is missing, or the nested value does not match `R`.
pub fn unwrap_singular<R: DeserializeOwned>(
    key: &str,
    body: &str,
    resource: &'static str,
) -> Result<R, ResourceError> {
    let mut document = parse_object(body, resource)?;
    let value = document
        .remove(key)
        .ok_or_else(|| ResourceError::decode(resource, format!("missing key '{key}'")))?;

    serde_json::from_value(value)
        .map_err(|e| ResourceError::decode(resource, format!("invalid '{key}': {e}")))
}

/// Extracts and decodes the collection nested under `plural`, plus the `next`
/// link from the sibling `<plural>_links` array.
///
/// A missing or `null` links array means there is no next page.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] if the body is not a JSON object,
/// `plural` is missing or not an array of `R`, or the links array is malformed.
pub fn unwrap_collection<R: DeserializeOwned>(
    plural: &str,
    body: &str,
    resource: &'static str,
) -> Result<Page<R>, ResourceError> {
    let mut document = parse_object(body, resource)?;

    let items_value = document
        .remove(plural)
        .ok_or_else(|| ResourceError::decode(resource, format!("missing key '{plural}'")))?;
    let items: Vec<R> = serde_json::from_value(items_value)
        .map_err(|e| ResourceError::decode(resource, format!("invalid '{plural}': {e}")))?;

    let links_key = format!("{plural}_links");
    let links: Vec<Link> = match document.remove(&links_key) {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => serde_json::from_value(value)
            .map_err(|e| ResourceError::decode(resource, format!("invalid '{links_key}': {e}")))?,
    };

    Ok(Page {
        items,
        next: next_link(&links).map(ToString::to_string),
    })
}

/// Returns the `href` of the first link whose relation is `next`.
#[must_use]
pub fn next_link(links: &[Link]) -> Option<&str> {
    links
        .iter()
        .find(|link| link.rel == "next")
        .map(|link| link.href.as_str())
}

fn parse_object(body: &str, resource: &'static str) -> Result<Map<String, Value>, ResourceError> {
    match serde_json::from_str(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ResourceError::decode(resource, "body is not a JSON object")),
        Err(e) => Err(ResourceError::decode(resource, e)),
    }
}
