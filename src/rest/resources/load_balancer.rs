//! LoadBalancer resource implementation.
//!
//! A load balancer owns a virtual IP (VIP) and fronts a set of listeners and
//! pools. It is provisioned asynchronously: `create`, `update` and `delete`
//! return while the control plane is still applying the change, so the
//! returned snapshot usually reports a `PENDING_*` provisioning status. Poll
//! with `get` until it settles.
//!
//! # Example
//!
//! ```rust,ignore
//! use lbaas_client::rest::resources::{
//!     LoadBalancerCreateRequest, LoadBalancerDeleteRequest, LoadBalancerListParams,
//!     LoadBalancerUpdateRequest, ProvisioningStatus,
//! };
//!
//! let lbs = client.load_balancers();
//!
//! // List active load balancers
//! let params = LoadBalancerListParams {
//!     provisioning_status: Some(ProvisioningStatus::Active),
//!     ..Default::default()
//! };
//! let active = lbs.list(Some(params)).await?;
//!
//! // Create one
//! let created = lbs
//!     .create(&LoadBalancerCreateRequest {
//!         name: "web".to_string(),
//!         vip_subnet_id: Some("bbad9d0a-...".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Take it out of service without touching anything else
//! let update = LoadBalancerUpdateRequest::default().admin_state_up(false);
//! lbs.update(&created.id, &update).await?;
//!
//! // Delete it together with its listeners and pools
//! lbs.delete(&LoadBalancerDeleteRequest::new(&created.id).cascade()).await?;
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::clients::{HttpMethod, Transport};
use crate::rest::{
    Nullable, Paginator, ResourceError, ResourceOperation, ResourcePath, RestClient, RestResource,
};

use super::common::{OperatingStatus, ProvisioningStatus, ResourceRef};

/// A load balancer as reported by the server.
///
/// Snapshots are read-only views: they are never mutated in place, and every
/// change goes through [`LoadBalancers::update`] which returns a fresh one.
///
/// # Fields
///
/// ## Always Present
/// - `id` - server-assigned and immutable
/// - `provisioning_status` / `operating_status` - independent status axes; an
///   object may well be `ACTIVE` and `OFFLINE` at the same time
///
/// ## Defaulted When Absent
/// Every other field. Strings default to `""`, references to an empty list and
/// timestamps to `None`. `admin_state_up` stays `None` when the server leaves it
/// out, since a missing flag says nothing about the administrative state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancer {
    /// The unique identifier of the load balancer.
    pub id: String,

    /// Human-readable name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Free-form description.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    /// Whether the last configuration change has been applied.
    pub provisioning_status: ProvisioningStatus,

    /// Observed data-plane health.
    pub operating_status: OperatingStatus,

    /// Administrative state. `Some(false)` means the load balancer is taken
    /// out of service regardless of its health; `None` means the response did
    /// not report it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state_up: Option<bool>,

    /// The virtual IP address.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vip_address: String,

    /// Subnet the VIP was allocated from.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vip_subnet_id: String,

    /// Network the VIP lives on.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vip_network_id: String,

    /// Port backing the VIP.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vip_port_id: String,

    /// QoS policy attached to the VIP port, if any.
    #[serde(default)]
    pub vip_qos_policy_id: Option<String>,

    /// Flavor the load balancer was created with.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub flavor_id: String,

    /// Provider driver (e.g. `amphora`).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub provider: String,

    /// Size class (e.g. `small`).
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub lb_type: String,

    /// Network attachment type (e.g. `external`).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub network_type: String,

    /// Compute flavor of the backing instances, reported by some deployments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nova_flavor_id: Option<String>,

    /// Legacy alias of `project_id`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tenant_id: String,

    /// Owning project.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub project_id: String,

    /// When the load balancer was created.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,

    /// When the load balancer was last changed. `None` until the first update.
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,

    /// Listeners attached to the load balancer, in server order.
    #[serde(default)]
    pub listeners: Vec<ResourceRef>,

    /// Pools attached to the load balancer, in server order.
    #[serde(default)]
    pub pools: Vec<ResourceRef>,
}

impl LoadBalancer {
    /// Returns `true` when configuration is applied and the data plane is
    /// healthy.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.provisioning_status.is_active() && self.operating_status.is_online()
    }
}

impl RestResource for LoadBalancer {
    type CreateRequest = LoadBalancerCreateRequest;
    type UpdateRequest = LoadBalancerUpdateRequest;
    type DeleteRequest = LoadBalancerDeleteRequest;
    type ListParams = LoadBalancerListParams;

    const NAME: &'static str = "LoadBalancer";
    const KEY: &'static str = "loadbalancer";
    const PLURAL: &'static str = "loadbalancers";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "lbaas/loadbalancers",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "lbaas/loadbalancers/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "lbaas/loadbalancers",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "lbaas/loadbalancers/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "lbaas/loadbalancers/{id}",
        ),
    ];

    fn delete_target(request: &Self::DeleteRequest) -> &str {
        &request.id
    }
}

/// Body of a create call.
///
/// `name`, `description`, `lb_type`, `network_type` and `admin_state_up` are
/// always sent. The VIP placement and ownership fields are only sent when set;
/// the server picks them otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerCreateRequest {
    /// Human-readable name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Size class.
    #[serde(rename = "type")]
    pub lb_type: String,

    /// Network attachment type.
    pub network_type: String,

    /// Initial administrative state. Defaults to `true`.
    pub admin_state_up: bool,

    /// Subnet to allocate the VIP from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vip_subnet_id: Option<String>,

    /// Network to allocate the VIP on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vip_network_id: Option<String>,

    /// Requested VIP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vip_address: Option<String>,

    /// Existing port to use as the VIP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vip_port_id: Option<String>,

    /// QoS policy to attach to the VIP port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vip_qos_policy_id: Option<String>,

    /// Flavor to create the load balancer with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_id: Option<String>,

    /// Provider driver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Owning project, for administrative callers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl Default for LoadBalancerCreateRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            lb_type: String::new(),
            network_type: String::new(),
            admin_state_up: true,
            vip_subnet_id: None,
            vip_network_id: None,
            vip_address: None,
            vip_port_id: None,
            vip_qos_policy_id: None,
            flavor_id: None,
            provider: None,
            project_id: None,
        }
    }
}

impl LoadBalancerCreateRequest {
    /// Creates a request for a load balancer with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Copies the create-equivalent fields of an existing load balancer, e.g. to
/// recreate it elsewhere.
impl From<&LoadBalancer> for LoadBalancerCreateRequest {
    fn from(lb: &LoadBalancer) -> Self {
        let non_empty = |value: &str| Some(value.to_string()).filter(|v| !v.is_empty());

        Self {
            name: lb.name.clone(),
            description: lb.description.clone(),
            lb_type: lb.lb_type.clone(),
            network_type: lb.network_type.clone(),
            admin_state_up: lb.admin_state_up.unwrap_or(true),
            vip_subnet_id: non_empty(&lb.vip_subnet_id),
            vip_network_id: non_empty(&lb.vip_network_id),
            vip_address: non_empty(&lb.vip_address),
            vip_port_id: non_empty(&lb.vip_port_id),
            vip_qos_policy_id: lb.vip_qos_policy_id.clone(),
            flavor_id: non_empty(&lb.flavor_id),
            provider: non_empty(&lb.provider),
            project_id: non_empty(&lb.project_id),
        }
    }
}

/// Body of an update call. Only the fields that are set are sent.
///
/// `Some(false)` and `Some(String::new())` are real values and are sent;
/// `None` leaves the field unchanged. The VIP QoS policy can additionally be
/// detached with [`Nullable::Null`].
///
/// # Example
///
/// ```rust
/// use lbaas_client::rest::encode_update;
/// use lbaas_client::rest::resources::LoadBalancerUpdateRequest;
/// use serde_json::json;
///
/// let update = LoadBalancerUpdateRequest::default()
///     .description("")
///     .admin_state_up(false)
///     .detach_vip_qos_policy();
///
/// let body = encode_update(&update, "LoadBalancer").unwrap();
/// assert_eq!(
///     serde_json::Value::Object(body),
///     json!({"description": "", "admin_state_up": false, "vip_qos_policy_id": null})
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerUpdateRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New administrative state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state_up: Option<bool>,

    /// QoS policy to attach, or [`Nullable::Null`] to detach the current one.
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub vip_qos_policy_id: Nullable<String>,
}

impl LoadBalancerUpdateRequest {
    /// Sets the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the administrative state.
    #[must_use]
    pub const fn admin_state_up(mut self, admin_state_up: bool) -> Self {
        self.admin_state_up = Some(admin_state_up);
        self
    }

    /// Attaches a QoS policy to the VIP port.
    #[must_use]
    pub fn vip_qos_policy_id(mut self, policy_id: impl Into<String>) -> Self {
        self.vip_qos_policy_id = Nullable::Value(policy_id.into());
        self
    }

    /// Detaches the current QoS policy from the VIP port.
    #[must_use]
    pub fn detach_vip_qos_policy(mut self) -> Self {
        self.vip_qos_policy_id = Nullable::Null;
        self
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.admin_state_up.is_none()
            && self.vip_qos_policy_id.is_unset()
    }
}

/// Target of a delete call.
///
/// Only `cascade` travels on the wire, as a query parameter, and only when
/// `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadBalancerDeleteRequest {
    /// The load balancer to delete.
    #[serde(skip)]
    pub id: String,

    /// Also delete every listener, pool and member under the load balancer.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub cascade: bool,
}

impl LoadBalancerDeleteRequest {
    /// Creates a plain delete request for `id`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cascade: false,
        }
    }

    /// Requests a cascading delete.
    #[must_use]
    pub const fn cascade(mut self) -> Self {
        self.cascade = true;
        self
    }
}

/// Filters for listing load balancers.
///
/// Filters only shape the first page request; later pages follow the server's
/// next links, which already carry them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerListParams {
    /// Filter by exact name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Filter by owning project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Filter by provisioning status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_status: Option<ProvisioningStatus>,

    /// Filter by operating status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_status: Option<OperatingStatus>,

    /// Filter by VIP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip_address: Option<String>,

    /// Filter by provider driver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Page size requested from the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Start after the object with this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    /// Attribute to sort by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,

    /// `asc` or `desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<String>,
}

/// Load balancer operations bound to a client.
///
/// Obtained from [`RestClient::load_balancers`]. Cheap to create and copy.
#[derive(Debug)]
pub struct LoadBalancers<'c, T> {
    client: &'c RestClient<T>,
}

impl<T> Clone for LoadBalancers<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LoadBalancers<'_, T> {}

impl<'c, T: Transport> LoadBalancers<'c, T> {
    pub(crate) const fn new(client: &'c RestClient<T>) -> Self {
        Self { client }
    }

    /// Lists every load balancer matching `params`, following all pages.
    ///
    /// # Errors
    ///
    /// Returns the first transport, status, decode or pagination error.
    pub async fn list(
        &self,
        params: Option<LoadBalancerListParams>,
    ) -> Result<Vec<LoadBalancer>, ResourceError> {
        LoadBalancer::all(self.client, params).await
    }

    /// Returns a lazy paginator over the load balancers matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Encode`] if the filters fail to serialize.
    pub fn pages(
        &self,
        params: Option<LoadBalancerListParams>,
    ) -> Result<Paginator<'c, LoadBalancer, T>, ResourceError> {
        LoadBalancer::pages(self.client, params)
    }

    /// Creates a load balancer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the server rejects the request.
    pub async fn create(
        &self,
        request: &LoadBalancerCreateRequest,
    ) -> Result<LoadBalancer, ResourceError> {
        LoadBalancer::create(self.client, request).await
    }

    /// Fetches the current snapshot of a load balancer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: &str) -> Result<LoadBalancer, ResourceError> {
        LoadBalancer::find(self.client, id).await
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the load balancer does not
    /// exist, or [`ResourceError::Api`] if it is immutable right now (e.g.
    /// pending another change).
    pub async fn update(
        &self,
        id: &str,
        request: &LoadBalancerUpdateRequest,
    ) -> Result<LoadBalancer, ResourceError> {
        LoadBalancer::update(self.client, id, request).await
    }

    /// Deletes a load balancer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn delete(&self, request: &LoadBalancerDeleteRequest) -> Result<(), ResourceError> {
        LoadBalancer::delete(self.client, request).await
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
