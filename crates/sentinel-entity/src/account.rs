//! Registered account model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account in the device store.
///
/// Serde field names match the persisted JSON layout under the `users`
/// key. Accounts are created by signup and never mutated or deleted
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Email address, the unique key. Compared case-sensitively as stored.
    pub email: String,
    /// Human-readable full name.
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// Digest of the password, never the plaintext.
    #[serde(rename = "passwordDigest")]
    pub password_digest: String,
    /// When the account was registered.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account record stamped with the current time.
    ///
    /// The caller is responsible for digesting the password first.
    pub fn new(
        email: impl Into<String>,
        full_name: impl Into<String>,
        password_digest: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            full_name: full_name.into(),
            password_digest: password_digest.into(),
            created_at: Utc::now(),
        }
    }
}
