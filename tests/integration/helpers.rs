//! Shared test helpers for integration tests.

// Not every test target uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use tempfile::TempDir;

use sentinel_auth::digest::ChecksumDigest;
use sentinel_auth::session::SessionManager;
use sentinel_core::config::auth::AuthConfig;
use sentinel_store::device::{DeviceStore, FileStore};

/// Test fixture: a session manager over a file store in a temp directory.
pub struct TestConsole {
    /// Keeps the data directory alive for the test's duration.
    _data_dir: TempDir,
    /// The shared device store.
    pub store: Arc<FileStore>,
    /// The session manager under test.
    pub session: SessionManager,
    /// The auth configuration used to build `session`.
    pub config: AuthConfig,
}

impl TestConsole {
    /// Create a fresh console with an empty store and zero simulated
    /// latency.
    pub async fn new() -> Self {
        Self::with_latency(0).await
    }

    /// Create a fresh console with the given simulated latency.
    pub async fn with_latency(latency_ms: u64) -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create temp data dir");
        let store = Arc::new(
            FileStore::open(data_dir.path().to_str().unwrap())
                .await
                .expect("Failed to open file store"),
        );
        let config = AuthConfig {
            simulated_latency_ms: latency_ms,
            ..AuthConfig::default()
        };
        let session = Self::manager(&store, &config);

        Self {
            _data_dir: data_dir,
            store,
            session,
            config,
        }
    }

    /// Build a second manager over the same store, as a freshly started
    /// process would.
    pub fn reopen(&self) -> SessionManager {
        Self::manager(&self.store, &self.config)
    }

    /// Register the standing test account.
    pub async fn register_jane(&self) {
        self.session
            .signup("Jane Doe", "jane@x.com", "Abcdef1!")
            .await
            .expect("Signup failed");
    }

    fn manager(store: &Arc<FileStore>, config: &AuthConfig) -> SessionManager {
        let store: Arc<dyn DeviceStore> = store.clone();
        SessionManager::new(store, Arc::new(ChecksumDigest::new()), config)
    }
}
