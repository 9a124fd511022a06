//! Response types for health monitoring.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Health status report for the API server.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// Overall service status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// When the status was produced.
    pub updated_at: Timestamp,
}

impl HealthStatus {
    /// Reports a healthy server.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            updated_at: Timestamp::now(),
        }
    }
}
