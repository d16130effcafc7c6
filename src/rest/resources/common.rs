//! Lifecycle status types shared by load balancer objects.
//!
//! The control plane reports two independent status axes for every object:
//!
//! - [`ProvisioningStatus`]: whether the last configuration change has been
//!   applied (`PENDING_*` while work is in flight)
//! - [`OperatingStatus`]: the data-plane health of the object
//!
//! Both are closed enums with an [`Unknown`](ProvisioningStatus::Unknown)
//! fallback, so a value introduced by a newer server still decodes and
//! re-encodes verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Control-plane status: whether requested configuration has been applied.
///
/// # Example
///
/// ```rust
/// use lbaas_client::rest::resources::ProvisioningStatus;
///
/// let status: ProvisioningStatus = serde_json::from_str("\"PENDING_UPDATE\"").unwrap();
/// assert!(status.is_pending());
///
/// let status: ProvisioningStatus = serde_json::from_str("\"RESIZING\"").unwrap();
/// assert_eq!(status, ProvisioningStatus::Unknown("RESIZING".to_string()));
/// assert_eq!(serde_json::to_string(&status).unwrap(), "\"RESIZING\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProvisioningStatus {
    /// Configuration is applied.
    Active,
    /// The object is being created.
    PendingCreate,
    /// A change is being applied.
    PendingUpdate,
    /// The object is being deleted.
    PendingDelete,
    /// The last change failed to apply.
    Error,
    /// A value this client does not know.
    Unknown(String),
}

impl ProvisioningStatus {
    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "ACTIVE",
            Self::PendingCreate => "PENDING_CREATE",
            Self::PendingUpdate => "PENDING_UPDATE",
            Self::PendingDelete => "PENDING_DELETE",
            Self::Error => "ERROR",
            Self::Unknown(other) => other,
        }
    }

    /// Returns `true` while the control plane is still working on the object.
    ///
    /// Objects in a pending state reject further mutations.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(
            self,
            Self::PendingCreate | Self::PendingUpdate | Self::PendingDelete
        )
    }

    /// Returns `true` once configuration has been applied.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns `true` if the last change failed.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl From<String> for ProvisioningStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ACTIVE" => Self::Active,
            "PENDING_CREATE" => Self::PendingCreate,
            "PENDING_UPDATE" => Self::PendingUpdate,
            "PENDING_DELETE" => Self::PendingDelete,
            "ERROR" => Self::Error,
            _ => Self::Unknown(value),
        }
    }
}

impl From<ProvisioningStatus> for String {
    fn from(status: ProvisioningStatus) -> Self {
        match status {
            ProvisioningStatus::Unknown(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProvisioningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data-plane status: the observed health of the object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OperatingStatus {
    /// Serving traffic.
    Online,
    /// Not serving traffic (e.g. administratively down or still building).
    Offline,
    /// Serving traffic with some members down.
    Degraded,
    /// Health checks fail.
    Error,
    /// Finishing existing connections, accepting no new ones.
    Draining,
    /// No health monitor is configured.
    NoMonitor,
    /// A value this client does not know.
    Unknown(String),
}

impl OperatingStatus {
    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
            Self::Degraded => "DEGRADED",
            Self::Error => "ERROR",
            Self::Draining => "DRAINING",
            Self::NoMonitor => "NO_MONITOR",
            Self::Unknown(other) => other,
        }
    }

    /// Returns `true` when the object is fully healthy.
    #[must_use]
    pub const fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }
}

impl From<String> for OperatingStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ONLINE" => Self::Online,
            "OFFLINE" => Self::Offline,
            "DEGRADED" => Self::Degraded,
            "ERROR" => Self::Error,
            "DRAINING" => Self::Draining,
            "NO_MONITOR" => Self::NoMonitor,
            _ => Self::Unknown(value),
        }
    }
}

impl From<OperatingStatus> for String {
    fn from(status: OperatingStatus) -> Self {
        match status {
            OperatingStatus::Unknown(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OperatingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weak reference to a child object, as embedded in a parent's payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRef {
    /// The id of the referenced object.
    pub id: String,
}
