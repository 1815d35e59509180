//! Salted Argon2id digest backend.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use sentinel_core::error::AppError;
use sentinel_core::result::AppResult;

use super::PasswordDigest;

/// Argon2id digests with a random salt per password.
///
/// The production-grade alternative to the checksum backend. Outputs are
/// PHC strings and are not equality-comparable; verification re-derives
/// the hash from the stored parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Digest;

impl Argon2Digest {
    /// Create the Argon2id backend.
    pub fn new() -> Self {
        Self
    }
}

impl PasswordDigest for Argon2Digest {
    fn digest(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password digest failed: {e}")))?;

        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, stored: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(stored)
            .map_err(|e| AppError::internal(format!("Invalid password digest format: {e}")))?;

        let argon2 = Argon2::default();
        match argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}
