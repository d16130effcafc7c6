//! # Load Balancer API Rust Client
//!
//! A typed async client for a cloud load-balancer control plane (an
//! Octavia-style `lbaas` REST API), providing validated configuration, a
//! pluggable HTTP transport, and resource operations with correct
//! partial-update and pagination semantics.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`LbaasConfig`] and [`LbaasConfigBuilder`]
//! - Validated newtypes for the endpoint and the auth token
//! - An async `reqwest` transport ([`HttpClient`]) behind the [`Transport`] trait
//! - List, get, create, update and delete for load balancers
//! - Partial updates that distinguish "unset" from `false`, `0` and `""`
//! - Lazy, loop-guarded traversal of paginated listings
//!
//! ## Quick Start
//!
//! ```rust
//! use lbaas_client::{AuthToken, BaseUrl, LbaasConfig};
//! use std::time::Duration;
//!
//! let config = LbaasConfig::builder()
//!     .base_url(BaseUrl::new("https://lb.example.com/v2").unwrap())
//!     .auth_token(AuthToken::new("gAAAAAB...").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_pages(), lbaas_client::DEFAULT_MAX_PAGES);
//! ```
//!
//! ## Working With Load Balancers
//!
//! ```rust,ignore
//! use lbaas_client::{LoadBalancerDeleteRequest, LoadBalancerUpdateRequest, RestClient};
//!
//! let client = RestClient::new(&config)?;
//! let lbs = client.load_balancers();
//!
//! for lb in lbs.list(None).await? {
//!     println!("{} {} {}", lb.id, lb.provisioning_status, lb.operating_status);
//! }
//!
//! let lb = lbs.get("ae8e2072-31fb-464a-8285-bc2f2a6bab4d").await?;
//! lbs.update(&lb.id, &LoadBalancerUpdateRequest::default().admin_state_up(false)).await?;
//! lbs.delete(&LoadBalancerDeleteRequest::new(&lb.id).cascade()).await?;
//! ```
//!
//! ## Custom Transports
//!
//! Anything implementing [`Transport`] can stand in for [`HttpClient`], which
//! is how tests drive the client without a network:
//!
//! ```rust,ignore
//! let client = RestClient::with_transport(my_transport).with_max_pages(50);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **No hidden retries**: every failure surfaces as exactly one error
//! - **Thread-safe**: all client types are `Send + Sync`

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AuthToken, BaseUrl, LbaasConfig, LbaasConfigBuilder, DEFAULT_MAX_PAGES};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, Transport,
};

// Re-export resource types
pub use rest::resources::{
    LoadBalancer, LoadBalancerCreateRequest, LoadBalancerDeleteRequest, LoadBalancerListParams,
    LoadBalancerUpdateRequest, LoadBalancers, OperatingStatus, ProvisioningStatus, ResourceRef,
};
pub use rest::{Nullable, Paginator, ResourceError, RestClient, RestResource};
