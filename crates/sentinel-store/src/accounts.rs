//! Repository over the persisted `users` collection.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use sentinel_core::error::{AppError, ErrorKind};
use sentinel_core::result::AppResult;
use sentinel_entity::account::Account;

use crate::device::DeviceStore;
use crate::keys;

/// Registered accounts, persisted as one JSON array under the `users` key.
///
/// The collection is read in full and rewritten in full on every mutation.
/// Registrations within one process are serialized through a writer lock;
/// separate processes sharing a data directory still race last-write-wins.
pub struct AccountRepository {
    store: Arc<dyn DeviceStore>,
    write_lock: Mutex<()>,
}

impl AccountRepository {
    /// Create a repository over the given device store.
    pub fn new(store: Arc<dyn DeviceStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Register a new account.
    ///
    /// Fails with a conflict when the email is already registered; the
    /// stored collection is left untouched in that case.
    pub async fn register(&self, account: Account) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut accounts = self.load_all().await?;
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(AppError::conflict(
                "Email already registered. Please sign in instead.",
            ));
        }

        info!(email = %account.email, "Registering account");
        accounts.push(account);
        self.save_all(&accounts).await
    }

    /// Find an account by its exact, case-sensitive email.
    pub async fn find(&self, email: &str) -> AppResult<Option<Account>> {
        let accounts = self.load_all().await?;
        Ok(accounts.into_iter().find(|a| a.email == email))
    }

    /// Read the whole persisted collection. An absent key is an empty
    /// collection; corrupt JSON is surfaced, not silently replaced.
    async fn load_all(&self) -> AppResult<Vec<Account>> {
        match self.store.get(keys::USERS).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Serialization,
                    "Stored account records are corrupt",
                    e,
                )
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Rewrite the whole persisted collection.
    async fn save_all(&self, accounts: &[Account]) -> AppResult<()> {
        let raw = serde_json::to_string(accounts)?;
        self.store.set(keys::USERS, &raw).await
    }
}
