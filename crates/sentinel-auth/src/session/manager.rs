//! Session lifecycle manager — signup, login, logout, detection flag,
//! restore.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::{Mutex, watch};
use tracing::{info, warn};

use sentinel_core::config::auth::AuthConfig;
use sentinel_core::error::AppError;
use sentinel_core::result::AppResult;
use sentinel_entity::account::Account;
use sentinel_entity::session::SessionState;
use sentinel_store::accounts::AccountRepository;
use sentinel_store::device::DeviceStore;
use sentinel_store::keys;

use crate::digest::PasswordDigest;

/// Owns the process-wide [`SessionState`] and every operation that may
/// change it.
///
/// Consumers never mutate the state directly: they read snapshots through
/// [`current`](Self::current) or react to changes through
/// [`subscribe`](Self::subscribe). Each state-changing operation persists
/// its device-store fields before broadcasting the new state.
///
/// `signup`, `login`, and `logout` queue behind one internal lock (depth
/// 1). A logout issued while a login is still suspended in its simulated
/// latency runs after it and wins, so a slow login cannot resurrect a
/// session the user already left.
pub struct SessionManager {
    /// Session field persistence.
    store: Arc<dyn DeviceStore>,
    /// Registered accounts, backed by the same store.
    accounts: AccountRepository,
    /// Configured digest backend.
    digest: Arc<dyn PasswordDigest>,
    /// Current state; the sender side doubles as the broadcast handle.
    state: watch::Sender<SessionState>,
    /// Serializes the auth operations.
    auth_queue: Mutex<()>,
    /// Artificial delay modeling the remote auth round trip.
    latency: Duration,
}

impl SessionManager {
    /// Create a manager over the given store and digest backend, starting
    /// from the anonymous state. Call [`restore`](Self::restore) once at
    /// startup to pick up a persisted session.
    pub fn new(
        store: Arc<dyn DeviceStore>,
        digest: Arc<dyn PasswordDigest>,
        config: &AuthConfig,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::anonymous());
        Self {
            accounts: AccountRepository::new(Arc::clone(&store)),
            store,
            digest,
            state,
            auth_queue: Mutex::new(()),
            latency: Duration::from_millis(config.simulated_latency_ms),
        }
    }

    /// A snapshot of the current session state.
    pub fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Subscribe to session state changes. The receiver sees every
    /// transition published after this call.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Reconstruct the session persisted by a previous process.
    ///
    /// Absent or malformed fields fail open to the anonymous default; a
    /// detection flag is only honored alongside a restored authenticated
    /// session, so the flag can never outlive its session.
    pub async fn restore(&self) -> AppResult<()> {
        let authenticated = self
            .read_field::<bool>(keys::AUTH_STATE)
            .await?
            .unwrap_or(false);
        let account = self.read_field::<Account>(keys::CURRENT_USER).await?;
        let detection = self
            .read_field::<bool>(keys::DETECTION_COMPLETE)
            .await?
            .unwrap_or(false);

        let restored = match (authenticated, account) {
            (true, Some(account)) => {
                info!(email = %account.email, "Restored authenticated session");
                SessionState {
                    is_authenticated: true,
                    current_account: Some(account),
                    detection_complete: detection,
                }
            }
            _ => SessionState::anonymous(),
        };

        self.state.send_replace(restored);
        Ok(())
    }

    /// Register a new account. Never changes the session state: signup
    /// does not auto-authenticate.
    ///
    /// Credential validation is the caller's responsibility; this
    /// operation digests the password and stores the record, failing with
    /// a conflict for an already-registered email.
    pub async fn signup(&self, full_name: &str, email: &str, password: &str) -> AppResult<()> {
        let _guard = self.auth_queue.lock().await;
        tokio::time::sleep(self.latency).await;

        let password_digest = self.digest.digest(password)?;
        self.accounts
            .register(Account::new(email, full_name, password_digest))
            .await?;

        info!(email, "Account registered");
        Ok(())
    }

    /// Authenticate and open a session.
    ///
    /// Fails with not-found for an unknown email and with an
    /// authentication error for a wrong password, leaving the state
    /// untouched in both cases. On success the detection flag is forced
    /// back to false; it never carries over from a previous session.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<()> {
        let _guard = self.auth_queue.lock().await;
        tokio::time::sleep(self.latency).await;

        let account = self
            .accounts
            .find(email)
            .await?
            .ok_or_else(|| AppError::not_found("Email not found. Please sign up first."))?;

        if !self.digest.verify(password, &account.password_digest)? {
            warn!(email, "Login rejected: password mismatch");
            return Err(AppError::authentication(
                "Invalid password. Please try again.",
            ));
        }

        // Persist all three session fields before the in-memory flip.
        self.write_field(keys::AUTH_STATE, &true).await?;
        self.write_field(keys::CURRENT_USER, &account).await?;
        self.write_field(keys::DETECTION_COMPLETE, &false).await?;

        info!(email, "Login successful");
        self.state.send_replace(SessionState::authenticated(account));
        Ok(())
    }

    /// End the session unconditionally and clear its persisted fields.
    ///
    /// Always succeeds; logging out of an anonymous session is a no-op.
    /// A field that fails to clear is logged and skipped rather than
    /// keeping the user signed in.
    pub async fn logout(&self) {
        let _guard = self.auth_queue.lock().await;

        for key in [keys::AUTH_STATE, keys::CURRENT_USER, keys::DETECTION_COMPLETE] {
            if let Err(e) = self.store.remove(key).await {
                warn!(key, error = %e, "Failed to clear persisted session field");
            }
        }

        if self.state.borrow().is_authenticated {
            info!("Logged out");
        }
        self.state.send_replace(SessionState::anonymous());
    }

    /// Record that the detection workflow completed this session.
    ///
    /// Carries no authorization check of its own: the flag is set and
    /// persisted even for an anonymous session. Callers are expected to
    /// invoke it only while authenticated.
    pub async fn mark_detection_complete(&self) -> AppResult<()> {
        self.set_detection_flag(true).await
    }

    /// Clear the detection flag, gating the result pages again.
    pub async fn reset_detection(&self) -> AppResult<()> {
        self.set_detection_flag(false).await
    }

    async fn set_detection_flag(&self, complete: bool) -> AppResult<()> {
        self.write_field(keys::DETECTION_COMPLETE, &complete).await?;
        info!(complete, "Detection flag updated");
        self.state
            .send_modify(|state| state.detection_complete = complete);
        Ok(())
    }

    /// Read one persisted session field. Malformed JSON is logged and
    /// treated as absent, never surfaced.
    async fn read_field<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "Persisted session field is corrupt; treating as absent");
                Ok(None)
            }
        }
    }

    async fn write_field<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::ChecksumDigest;
    use sentinel_store::device::MemoryStore;

    fn make_manager() -> SessionManager {
        let config = AuthConfig {
            simulated_latency_ms: 0,
            ..AuthConfig::default()
        };
        SessionManager::new(
            Arc::new(MemoryStore::new()),
            Arc::new(ChecksumDigest::new()),
            &config,
        )
    }

    #[tokio::test]
    async fn test_signup_does_not_authenticate() {
        let manager = make_manager();
        manager
            .signup("Jane Doe", "jane@x.com", "Abcdef1!")
            .await
            .unwrap();
        assert_eq!(manager.current(), SessionState::anonymous());
    }

    #[tokio::test]
    async fn test_detection_flag_is_set_unconditionally() {
        // Observed behavior: the flag does not check authentication.
        let manager = make_manager();
        manager.mark_detection_complete().await.unwrap();
        assert!(manager.current().detection_complete);
        manager.reset_detection().await.unwrap();
        assert!(!manager.current().detection_complete);
    }

    #[tokio::test]
    async fn test_failed_login_leaves_state_unchanged() {
        let manager = make_manager();
        manager
            .signup("Jane Doe", "jane@x.com", "Abcdef1!")
            .await
            .unwrap();

        let err = manager.login("jane@x.com", "wrong").await.unwrap_err();
        assert_eq!(err.kind, sentinel_core::error::ErrorKind::Authentication);
        assert_eq!(manager.current(), SessionState::anonymous());
    }

    #[tokio::test]
    async fn test_subscribe_sees_transitions() {
        let manager = make_manager();
        let mut receiver = manager.subscribe();
        manager
            .signup("Jane Doe", "jane@x.com", "Abcdef1!")
            .await
            .unwrap();
        manager.login("jane@x.com", "Abcdef1!").await.unwrap();

        receiver.changed().await.unwrap();
        assert!(receiver.borrow().is_authenticated);
    }
}
