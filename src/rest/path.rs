//! Path building for REST resources.
//!
//! Each resource declares a static table of [`ResourcePath`]s, one per
//! operation. The path resolution system selects the most specific path whose
//! required ids are all available and interpolates them into the template.
//! Id values are percent-encoded so that opaque ids can never escape their
//! path segment.
//!
//! # Example
//!
//! ```rust
//! use lbaas_client::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use lbaas_client::clients::HttpMethod;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "lbaas/loadbalancers"),
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Find,
//!         &["id"],
//!         "lbaas/loadbalancers/{id}",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["id"]).unwrap();
//! let url = build_path(path.template, &[("id", "ae8e2072")]);
//! assert_eq!(url, "lbaas/loadbalancers/ae8e2072");
//! ```

use crate::clients::HttpMethod;
use crate::rest::ResourceError;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by id (GET /resources/{id}).
    Find,
    /// List resources (GET /resources).
    All,
    /// Create a new resource (POST /resources).
    Create,
    /// Update an existing resource (PUT /resources/{id}).
    Update,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates use `{id_name}` placeholders for id interpolation, e.g.
/// `lbaas/loadbalancers/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required id parameters in order (e.g., `["id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required ids for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required ids are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Filters paths by operation, keeps those whose required ids are all
/// available, and returns the most specific (most ids) one.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL path from a template by interpolating percent-encoded ids.
///
/// # Example
///
/// ```rust
/// use lbaas_client::rest::build_path;
///
/// let url = build_path("lbaas/loadbalancers/{id}", &[("id", "a b/c")]);
/// assert_eq!(url, "lbaas/loadbalancers/a%20b%2Fc");
/// ```
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }

    result
}

/// Resolves the method and path for an operation, rejecting empty ids.
///
/// # Errors
///
/// Returns [`ResourceError::PathResolutionFailed`] if any supplied id is empty
/// or no path matches the operation and ids.
pub fn resolve_path(
    paths: &[ResourcePath],
    operation: ResourceOperation,
    ids: &[(&str, &str)],
    resource: &'static str,
) -> Result<(HttpMethod, String), ResourceError> {
    let unresolved = || ResourceError::PathResolutionFailed {
        resource,
        operation: operation.as_str(),
    };

    if ids.iter().any(|(_, value)| value.trim().is_empty()) {
        return Err(unresolved());
    }

    let available_ids: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();
    let path = get_path(paths, operation, &available_ids).ok_or_else(unresolved)?;

    Ok((path.http_method, build_path(path.template, ids)))
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
