//! REST Resource trait for CRUD operations.
//!
//! This module defines the [`RestResource`] trait, which provides a standardized
//! interface for enveloped REST resources. Resources that implement this trait
//! gain `find()`, `pages()`, `all()`, `create()`, `update()` and `delete()`.
//!
//! # Implementing a Resource
//!
//! 1. Define the resource struct plus its create, update, delete and list
//!    parameter types with serde derives
//! 2. Implement `RestResource` with the associated types and constants
//! 3. The trait provides the operations as default methods
//!
//! # Example
//!
//! ```rust,ignore
//! use lbaas_client::rest::{RestResource, ResourcePath, ResourceOperation};
//! use lbaas_client::HttpMethod;
//!
//! impl RestResource for Listener {
//!     type CreateRequest = ListenerCreateRequest;
//!     type UpdateRequest = ListenerUpdateRequest;
//!     type DeleteRequest = ListenerDeleteRequest;
//!     type ListParams = ListenerListParams;
//!
//!     const NAME: &'static str = "Listener";
//!     const KEY: &'static str = "listener";
//!     const PLURAL: &'static str = "listeners";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "lbaas/listeners"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "lbaas/listeners/{id}"),
//!         // ...
//!     ];
//!
//!     fn delete_target(request: &Self::DeleteRequest) -> &str {
//!         &request.id
//!     }
//! }
//!
//! let listener = Listener::find(&client, "a1b2").await?;
//! let listeners = Listener::all(&client, None).await?;
//! ```

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpError, HttpRequest, HttpResponse, Transport};
use crate::rest::envelope::{unwrap_singular, wrap_singular};
use crate::rest::{
    encode_update, resolve_path, Paginator, ResourceError, ResourceOperation, ResourcePath,
    RestClient,
};

/// An enveloped REST resource that can be listed, fetched, created, updated
/// and deleted.
///
/// # Associated Types
///
/// - `CreateRequest`: body of `create()`, nested under [`KEY`](Self::KEY)
/// - `UpdateRequest`: body of `update()`; must encode only the fields set
/// - `DeleteRequest`: identifies the resource plus any delete options, which
///   are sent as query parameters
/// - `ListParams`: filters for `pages()` and `all()`
///
/// # Associated Constants
///
/// - `NAME`: the type name used in errors and logs (e.g., "LoadBalancer")
/// - `KEY`: the singular envelope key (e.g., "loadbalancer")
/// - `PLURAL`: the collection envelope key (e.g., "loadbalancers")
/// - `PATHS`: available paths for the operations
#[allow(async_fn_in_trait)]
pub trait RestResource: DeserializeOwned + Send + Sync + Sized {
    /// Request body for `create()`.
    type CreateRequest: Serialize + Send + Sync;

    /// Request body for `update()`.
    type UpdateRequest: Serialize + Send + Sync;

    /// Target and options for `delete()`.
    type DeleteRequest: Serialize + Send + Sync;

    /// Filters for listing operations.
    ///
    /// Use `()` if the collection takes no filters.
    type ListParams: Serialize + Default + Send + Sync;

    /// The type name of the resource (e.g., "LoadBalancer").
    const NAME: &'static str;

    /// The key a single resource is nested under in request and response
    /// bodies.
    const KEY: &'static str;

    /// The key a collection is nested under. Its links live under
    /// `<PLURAL>_links`.
    const PLURAL: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the id of the resource a delete request addresses.
    fn delete_target(request: &Self::DeleteRequest) -> &str;

    /// Finds a single resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if `id` is empty.
    async fn find<T: Transport>(client: &RestClient<T>, id: &str) -> Result<Self, ResourceError> {
        let (method, path) =
            resolve_path(Self::PATHS, ResourceOperation::Find, &[("id", id)], Self::NAME)?;
        tracing::debug!(resource = Self::NAME, id, "fetching resource");

        let response = client.request(method, &path, None, BTreeMap::new()).await?;
        let response = ensure_success(response, Self::NAME, Some(id))?;
        unwrap_singular(Self::KEY, &response.body, Self::NAME)
    }

    /// Returns a lazy paginator over the filtered collection.
    ///
    /// No request is sent until the paginator is polled.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no list path exists.
    /// Returns [`ResourceError::Encode`] if the filters fail to serialize.
    fn pages<T: Transport>(
        client: &RestClient<T>,
        params: Option<Self::ListParams>,
    ) -> Result<Paginator<'_, Self, T>, ResourceError> {
        let (method, path) = resolve_path(Self::PATHS, ResourceOperation::All, &[], Self::NAME)?;

        let query = params
            .map(|p| serialize_to_query(&p, Self::NAME))
            .transpose()?
            .unwrap_or_default();

        let request = HttpRequest::builder(method, path)
            .query(query)
            .build()
            .map_err(HttpError::from)?;

        Ok(Paginator::new(client, request))
    }

    /// Lists every resource matching the filters, following all pages.
    ///
    /// # Errors
    ///
    /// Returns the first error met while walking the pages; already fetched
    /// items are discarded.
    async fn all<T: Transport>(
        client: &RestClient<T>,
        params: Option<Self::ListParams>,
    ) -> Result<Vec<Self>, ResourceError> {
        let items = Self::pages(client, params)?.collect_all().await?;
        tracing::debug!(resource = Self::NAME, count = items.len(), "listed resources");
        Ok(items)
    }

    /// Creates a resource and returns the server's view of it.
    ///
    /// The returned snapshot usually reports a pending provisioning status.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] for any non-2xx answer, including 404.
    async fn create<T: Transport>(
        client: &RestClient<T>,
        request: &Self::CreateRequest,
    ) -> Result<Self, ResourceError> {
        let (method, path) =
            resolve_path(Self::PATHS, ResourceOperation::Create, &[], Self::NAME)?;

        let payload =
            serde_json::to_value(request).map_err(|e| ResourceError::encode(Self::NAME, e))?;
        tracing::debug!(resource = Self::NAME, "creating resource");

        let body = wrap_singular(Self::KEY, payload);
        let response = client.request(method, &path, Some(body), BTreeMap::new()).await?;
        let response = ensure_success(response, Self::NAME, None)?;
        unwrap_singular(Self::KEY, &response.body, Self::NAME)
    }

    /// Applies a partial update and returns the server's view of the
    /// resource.
    ///
    /// Only the fields set on `request` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if `id` is empty.
    async fn update<T: Transport>(
        client: &RestClient<T>,
        id: &str,
        request: &Self::UpdateRequest,
    ) -> Result<Self, ResourceError> {
        let (method, path) =
            resolve_path(Self::PATHS, ResourceOperation::Update, &[("id", id)], Self::NAME)?;

        let fields = encode_update(request, Self::NAME)?;
        tracing::debug!(
            resource = Self::NAME,
            id,
            fields = fields.len(),
            "updating resource"
        );

        let body = wrap_singular(Self::KEY, Value::Object(fields));
        let response = client.request(method, &path, Some(body), BTreeMap::new()).await?;
        let response = ensure_success(response, Self::NAME, Some(id))?;
        unwrap_singular(Self::KEY, &response.body, Self::NAME)
    }

    /// Deletes a resource. Any response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if the id is empty.
    async fn delete<T: Transport>(
        client: &RestClient<T>,
        request: &Self::DeleteRequest,
    ) -> Result<(), ResourceError> {
        let id = Self::delete_target(request);
        let (method, path) =
            resolve_path(Self::PATHS, ResourceOperation::Delete, &[("id", id)], Self::NAME)?;

        let query = serialize_to_query(request, Self::NAME)?;

        tracing::debug!(resource = Self::NAME, id, "deleting resource");

        let response = client.request(method, &path, None, query).await?;
        ensure_success(response, Self::NAME, Some(id))?;
        Ok(())
    }
}

/// Passes 2xx responses through and maps every other status to an error.
///
/// `id` is the addressed resource for single-resource operations; it decides
/// whether a 404 becomes [`ResourceError::NotFound`].
pub(crate) fn ensure_success(
    response: HttpResponse,
    resource: &'static str,
    id: Option<&str>,
) -> Result<HttpResponse, ResourceError> {
    if response.is_ok() {
        return Ok(response);
    }

    tracing::debug!(
        resource,
        status = response.code,
        request_id = response.request_id(),
        "request rejected"
    );

    Err(ResourceError::from_http_response(
        response.code,
        &response.body,
        resource,
        id,
        response.request_id(),
    ))
}

/// Serializes a params struct to a query parameter map.
///
/// Null values are skipped. Only scalar fields can be expressed as query
/// parameters; arrays and nested objects are rejected.
fn serialize_to_query<P: Serialize>(
    params: &P,
    resource: &'static str,
) -> Result<BTreeMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params)
        .map_err(|e| ResourceError::encode(resource, format!("invalid query parameters: {e}")))?;

    let mut query = BTreeMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(_) | Value::Object(_) => {
                    return Err(ResourceError::encode(
                        resource,
                        format!("query parameter `{key}` is not a scalar"),
                    ));
                }
            }
        }
    }

    Ok(query)
}
