//! Detection service configuration.

use serde::{Deserialize, Serialize};

/// Settings for the external anomaly-detection model service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Base URL of the model service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout() -> u64 {
    30
}
