//! The device-scoped key-value store abstraction.

pub mod file;
pub mod memory;

use async_trait::async_trait;

use sentinel_core::result::AppResult;

pub use file::FileStore;
pub use memory::MemoryStore;

/// A device-scoped key-value store holding JSON-encoded values.
///
/// Values are opaque strings at this layer; callers serialize and parse.
/// Reads of absent keys return `Ok(None)`. Writes replace the whole value
/// under the key.
#[async_trait]
pub trait DeviceStore: Send + Sync + 'static {
    /// Read the raw JSON string stored under `key`, if any.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> AppResult<()>;
}
