//! File-backed device store: one JSON file per key under a data directory.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use sentinel_core::error::{AppError, ErrorKind};
use sentinel_core::result::AppResult;

use super::DeviceStore;

/// Device store persisting each key as `<data_dir>/<key>.json`.
///
/// Writes replace the file in full. Concurrent processes sharing the same
/// data directory race last-write-wins; there is no cross-process locking.
#[derive(Debug)]
pub struct FileStore {
    /// Directory holding one file per key.
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at the given directory, creating it if needed.
    pub async fn open(data_dir: &str) -> AppResult<Self> {
        let root = PathBuf::from(data_dir);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create data directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a key to its backing file path.
    fn resolve(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl DeviceStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.resolve(key);
        match fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read store key '{key}'"),
                e,
            )),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.resolve(key);
        fs::write(&path, value).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write store key '{key}'"),
                e,
            )
        })?;
        debug!(key, bytes = value.len(), "Wrote store key");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.resolve(key);
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(key, "Removed store key");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to remove store key '{key}'"),
                e,
            )),
        }
    }
}
