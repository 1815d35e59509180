//! Pluggable password digest backends.

pub mod argon;
pub mod checksum;

use std::sync::Arc;

use sentinel_core::config::auth::{AuthConfig, DigestBackend};
use sentinel_core::result::AppResult;

pub use argon::Argon2Digest;
pub use checksum::ChecksumDigest;

/// Turns a plaintext password into its stored digest and checks
/// candidates against stored digests.
///
/// The session manager's contract is identical across backends; stored
/// digests only verify against the backend that produced them.
pub trait PasswordDigest: Send + Sync + 'static {
    /// Digest a plaintext password for storage.
    fn digest(&self, password: &str) -> AppResult<String>;

    /// Check a plaintext password against a stored digest.
    fn verify(&self, password: &str, stored: &str) -> AppResult<bool>;
}

/// Construct the configured digest backend.
pub fn from_config(config: &AuthConfig) -> Arc<dyn PasswordDigest> {
    match config.digest {
        DigestBackend::Checksum => Arc::new(ChecksumDigest::new()),
        DigestBackend::Argon2 => Arc::new(Argon2Digest::new()),
    }
}
