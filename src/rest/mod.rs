//! REST resource infrastructure for the load balancer API.
//!
//! This module provides:
//!
//! - **[`RestClient`]**: a stateless client over an injected [`Transport`](crate::clients::Transport)
//! - **[`RestResource`] trait**: list, get, create, update and delete for
//!   enveloped resources
//! - **[`envelope`]**: wrapping and unwrapping of the top-level JSON key
//! - **[`encode_update`] and [`Nullable`]**: partial updates that send exactly
//!   the fields the caller set
//! - **[`Paginator`]**: lazy traversal of linked collection pages
//! - **Path building**: per-operation path tables with encoded ids
//! - **[`ResourceError`]**: semantic error types for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use lbaas_client::{BaseUrl, LbaasConfig, RestClient};
//! use lbaas_client::rest::resources::{LoadBalancerCreateRequest, LoadBalancerUpdateRequest};
//!
//! let config = LbaasConfig::builder()
//!     .base_url(BaseUrl::new("https://lb.example.com/v2")?)
//!     .build()?;
//! let client = RestClient::new(&config)?;
//! let lbs = client.load_balancers();
//!
//! // Create, then wait for the control plane to finish
//! let mut lb = lbs.create(&LoadBalancerCreateRequest::new("web")).await?;
//! while lb.provisioning_status.is_pending() {
//!     tokio::time::sleep(std::time::Duration::from_secs(2)).await;
//!     lb = lbs.get(&lb.id).await?;
//! }
//!
//! // Rename it, leaving every other field alone
//! let lb = lbs
//!     .update(&lb.id, &LoadBalancerUpdateRequest::default().name("web-1"))
//!     .await?;
//! ```

mod client;
pub mod envelope;
mod errors;
mod pagination;
mod path;
mod resource;
pub mod resources;
mod update;

pub use client::RestClient;
pub use errors::ResourceError;
pub use pagination::Paginator;
pub use path::{build_path, get_path, resolve_path, ResourceOperation, ResourcePath};
pub use resource::RestResource;
pub use update::{encode_update, Nullable};
