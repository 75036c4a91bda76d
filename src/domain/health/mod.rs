//! Backend liveness.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

/// Response of `GET /health/simple`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self.status.as_str(), "ok" | "healthy")
    }
}
