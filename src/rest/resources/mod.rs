//! Load balancer resource implementations.
//!
//! ```text
//! resources/
//!   mod.rs            <- This file (re-exports)
//!   common.rs         <- Status enums and references shared by objects
//!   load_balancer.rs  <- LoadBalancer and its request types
//! ```
//!
//! # Using Resources
//!
//! ```rust,ignore
//! use lbaas_client::rest::resources::{LoadBalancerListParams, OperatingStatus};
//!
//! let degraded = client
//!     .load_balancers()
//!     .list(Some(LoadBalancerListParams {
//!         operating_status: Some(OperatingStatus::Degraded),
//!         ..Default::default()
//!     }))
//!     .await?;
//! ```

mod common;
mod load_balancer;

pub use common::{OperatingStatus, ProvisioningStatus, ResourceRef};
pub use load_balancer::{
    LoadBalancer, LoadBalancerCreateRequest, LoadBalancerDeleteRequest, LoadBalancerListParams,
    LoadBalancerUpdateRequest, LoadBalancers,
};
