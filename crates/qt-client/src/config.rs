//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default origin of the report API.
pub const DEFAULT_API_URL: &str = "http://localhost:5001";

/// Default origin of the metric record endpoint.
pub const DEFAULT_RECORD_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the server lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Origin of the report API, without the `/api/v3` suffix.
    pub api_url: String,

    /// Origin of the metric record endpoint; the metric id is appended to it.
    pub record_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            record_url: DEFAULT_RECORD_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientSettings {
    /// The request timeout. A zero setting falls back to the default.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(self.timeout_secs)
        }
    }
}
