//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Which password digest backend the session manager uses.
///
/// The checksum backend reproduces the device store's historical digest
/// format and stays the default; existing stored digests only verify
/// against the backend that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DigestBackend {
    /// Non-cryptographic 32-bit checksum rendered as hex. Weak by design.
    #[default]
    Checksum,
    /// Salted Argon2id hashing.
    Argon2,
}

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Artificial delay applied to login and signup, modeling a remote call.
    #[serde(default = "default_latency")]
    pub simulated_latency_ms: u64,
    /// Password digest backend.
    #[serde(default)]
    pub digest: DigestBackend,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_latency(),
            digest: DigestBackend::default(),
        }
    }
}

fn default_latency() -> u64 {
    500
}
