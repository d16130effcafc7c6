//! Configuration types for the load balancer client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`LbaasConfig`]: The main configuration struct holding all client settings
//! - [`LbaasConfigBuilder`]: A builder for constructing [`LbaasConfig`] instances
//! - [`BaseUrl`]: A validated API endpoint
//! - [`AuthToken`]: A validated token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use lbaas_client::{AuthToken, BaseUrl, LbaasConfig};
//! use std::time::Duration;
//!
//! let config = LbaasConfig::builder()
//!     .base_url(BaseUrl::new("https://lb.example.com/v2").unwrap())
//!     .auth_token(AuthToken::new("token").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AuthToken, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Default cap on the number of pages a single listing may fetch.
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Configuration for the load balancer client.
///
/// `LbaasConfig` is `Clone`, `Send`, and `Sync`, so one configuration can back
/// any number of clients.
#[derive(Clone, Debug)]
pub struct LbaasConfig {
    base_url: BaseUrl,
    auth_token: Option<AuthToken>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    max_pages: u32,
}

impl LbaasConfig {
    /// Creates a new builder for constructing an `LbaasConfig`.
    #[must_use]
    pub fn builder() -> LbaasConfigBuilder {
        LbaasConfigBuilder::new()
    }

    /// Returns the API endpoint.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the auth token, if configured.
    #[must_use]
    pub const fn auth_token(&self) -> Option<&AuthToken> {
        self.auth_token.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout applied by the default transport.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the maximum number of pages a listing may fetch.
    #[must_use]
    pub const fn max_pages(&self) -> u32 {
        self.max_pages
    }
}

// Verify LbaasConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LbaasConfig>();
};

/// Builder for constructing [`LbaasConfig`] instances.
///
/// `base_url` is required. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `auth_token`: `None` (no `X-Auth-Token` header)
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no client-side timeout)
/// - `max_pages`: [`DEFAULT_MAX_PAGES`]
#[derive(Debug, Default)]
pub struct LbaasConfigBuilder {
    base_url: Option<BaseUrl>,
    auth_token: Option<AuthToken>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    max_pages: Option<u32>,
}

impl LbaasConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API endpoint (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the token sent as `X-Auth-Token`.
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout used by the default transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the maximum number of pages a single listing may fetch before
    /// failing with a pagination loop error.
    #[must_use]
    pub const fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Builds the [`LbaasConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set,
    /// and [`ConfigError::InvalidMaxPages`] if `max_pages` is zero.
    pub fn build(self) -> Result<LbaasConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        let max_pages = self.max_pages.unwrap_or(DEFAULT_MAX_PAGES);
        if max_pages == 0 {
            return Err(ConfigError::InvalidMaxPages { value: max_pages });
        }

        Ok(LbaasConfig {
            base_url,
            auth_token: self.auth_token,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
            max_pages,
        })
    }
}
