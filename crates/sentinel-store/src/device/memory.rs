//! In-memory device store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use sentinel_core::error::AppError;
use sentinel_core::result::AppResult;

use super::DeviceStore;

/// Device store backed by a process-local map. Nothing survives exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeviceStore for MemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AppError::internal("Device store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::internal("Device store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::internal("Device store lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}
