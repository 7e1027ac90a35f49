//! Canonical domain types shared across the workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, service-assigned device identifier.
///
/// Stable per physical device, but far too long to type interactively --
/// users address devices by their 1-based directory position instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// One registered device as reported by the cloud service.
///
/// Materialized fresh from the session for each invocation that needs it;
/// never persisted. The directory position is not part of this type -- it
/// is assigned by [`DeviceDirectory`](crate::DeviceDirectory) and only
/// meaningful for the lifetime of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSummary {
    pub id: DeviceId,
    pub group: String,
    pub name: String,
    pub model: String,
}
