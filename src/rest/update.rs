//! Partial-update encoding.
//!
//! An update body must contain exactly the fields the caller set. A field set
//! to `false`, `0` or `""` is still set and must be sent; a field the caller
//! never touched must not appear at all, not even as `null`.
//!
//! Plain updatable fields are modelled as `Option<T>` with
//! `#[serde(skip_serializing_if = "Option::is_none")]`: `None` is "leave
//! unchanged", `Some(v)` is "set to `v`". Association fields that the server
//! allows to be detached use [`Nullable<T>`], which adds an explicit
//! [`Nullable::Null`] state that encodes as JSON `null`.
//!
//! # Example
//!
//! ```rust
//! use lbaas_client::rest::{encode_update, Nullable};
//! use serde::Serialize;
//! use serde_json::json;
//!
//! #[derive(Serialize)]
//! struct Update {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     admin_state_up: Option<bool>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     description: Option<String>,
//!     #[serde(skip_serializing_if = "Nullable::is_unset")]
//!     vip_qos_policy_id: Nullable<String>,
//! }
//!
//! let body = encode_update(
//!     &Update {
//!         admin_state_up: Some(false),
//!         description: None,
//!         vip_qos_policy_id: Nullable::Null,
//!     },
//!     "LoadBalancer",
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     serde_json::Value::Object(body),
//!     json!({"admin_state_up": false, "vip_qos_policy_id": null})
//! );
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::rest::ResourceError;

/// A three-state update field: leave unchanged, clear, or set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// Not part of the update. Must be skipped when serializing.
    #[default]
    Unset,
    /// Clear the field on the server (encodes as `null`).
    Null,
    /// Set the field to this value.
    Value(T),
}

impl<T> Nullable<T> {
    /// Returns `true` when the field is not part of the update.
    ///
    /// Use as `#[serde(skip_serializing_if = "Nullable::is_unset")]`.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns `true` when the field will be cleared.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the value to set, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Unset is skipped by the containing struct; if it ever reaches the
            // serializer it is indistinguishable from Null.
            Self::Unset | Self::Null => serializer.serialize_none(),
            Self::Value(value) => value.serialize(serializer),
        }
    }
}

/// A present key decodes to `Null` or `Value`; pair with `#[serde(default)]`
/// so that an absent key decodes to `Unset`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Self::Null, Self::Value))
    }
}

/// Encodes an update request into the JSON object that goes inside the
/// envelope. Only set fields appear in the result.
///
/// # Errors
///
/// Returns [`ResourceError::Encode`] if the request fails to serialize or does
/// not serialize to a JSON object.
pub fn encode_update<U: Serialize>(
    request: &U,
    resource: &'static str,
) -> Result<Map<String, Value>, ResourceError> {
    match serde_json::to_value(request) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(ResourceError::encode(
            resource,
            format!("update request must encode to an object, got {other}"),
        )),
        Err(e) => Err(ResourceError::encode(resource, e)),
    }
}
