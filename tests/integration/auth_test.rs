//! Integration tests for the signup/login/logout lifecycle.

mod helpers;

use std::sync::Arc;

use helpers::TestConsole;

use sentinel_auth::digest::{ChecksumDigest, PasswordDigest};
use sentinel_core::error::ErrorKind;
use sentinel_entity::session::SessionState;
use sentinel_store::{AccountRepository, DeviceStore, keys};

#[tokio::test]
async fn test_signup_then_login() {
    let console = TestConsole::new().await;
    console.register_jane().await;

    console
        .session
        .login("jane@x.com", "Abcdef1!")
        .await
        .unwrap();

    let state = console.session.current();
    assert!(state.is_authenticated);
    assert!(!state.detection_complete);
    assert_eq!(
        state.current_account.unwrap().email,
        "jane@x.com".to_string()
    );
}

#[tokio::test]
async fn test_login_unknown_email() {
    let console = TestConsole::new().await;

    let err = console
        .session
        .login("nobody@x.com", "Abcdef1!")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "Email not found. Please sign up first.");
    assert_eq!(console.session.current(), SessionState::anonymous());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let console = TestConsole::new().await;
    console.register_jane().await;

    let err = console
        .session
        .login("jane@x.com", "WrongPass1!")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
    assert_eq!(err.message, "Invalid password. Please try again.");
    assert_eq!(console.session.current(), SessionState::anonymous());
}

#[tokio::test]
async fn test_duplicate_signup_rejected() {
    let console = TestConsole::new().await;
    console.register_jane().await;

    let err = console
        .session
        .signup("Other Jane", "jane@x.com", "Other1!aa")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(err.message, "Email already registered. Please sign in instead.");
}

#[tokio::test]
async fn test_stored_digest_is_not_the_plaintext() {
    let console = TestConsole::new().await;
    console.register_jane().await;

    let store: Arc<dyn DeviceStore> = console.store.clone();
    let accounts = AccountRepository::new(store);
    let account = accounts.find("jane@x.com").await.unwrap().unwrap();

    let expected = ChecksumDigest::new().digest("Abcdef1!").unwrap();
    assert_eq!(account.password_digest, expected);
    assert_ne!(account.password_digest, "Abcdef1!");
    assert_eq!(account.full_name, "Jane Doe");
}

#[tokio::test]
async fn test_logout_always_returns_to_anonymous() {
    let console = TestConsole::new().await;

    // From anonymous: a no-op that still succeeds.
    console.session.logout().await;
    assert_eq!(console.session.current(), SessionState::anonymous());

    // From a fully unlocked session.
    console.register_jane().await;
    console
        .session
        .login("jane@x.com", "Abcdef1!")
        .await
        .unwrap();
    console.session.mark_detection_complete().await.unwrap();

    console.session.logout().await;
    assert_eq!(console.session.current(), SessionState::anonymous());
}

#[tokio::test]
async fn test_login_resets_detection_flag() {
    let console = TestConsole::new().await;
    console.register_jane().await;

    console
        .session
        .login("jane@x.com", "Abcdef1!")
        .await
        .unwrap();
    console.session.mark_detection_complete().await.unwrap();
    assert!(console.session.current().detection_complete);

    // A fresh login never inherits the previous session's flag.
    console
        .session
        .login("jane@x.com", "Abcdef1!")
        .await
        .unwrap();
    assert!(!console.session.current().detection_complete);
}

#[tokio::test]
async fn test_restore_resumes_persisted_session() {
    let console = TestConsole::new().await;
    console.register_jane().await;
    console
        .session
        .login("jane@x.com", "Abcdef1!")
        .await
        .unwrap();
    console.session.mark_detection_complete().await.unwrap();

    // A freshly started process sees the same session.
    let reopened = console.reopen();
    reopened.restore().await.unwrap();

    let state = reopened.current();
    assert!(state.is_authenticated);
    assert!(state.detection_complete);
    assert_eq!(state.current_account.unwrap().email, "jane@x.com");
}

#[tokio::test]
async fn test_restore_fails_open_on_corrupt_state() {
    let console = TestConsole::new().await;
    console.register_jane().await;
    console
        .session
        .login("jane@x.com", "Abcdef1!")
        .await
        .unwrap();

    console
        .store
        .set(keys::CURRENT_USER, "{definitely not json")
        .await
        .unwrap();

    let reopened = console.reopen();
    reopened.restore().await.unwrap();
    assert_eq!(reopened.current(), SessionState::anonymous());
}

#[tokio::test]
async fn test_corrupt_users_collection_fails_login_without_state_change() {
    let console = TestConsole::new().await;
    console
        .store
        .set(keys::USERS, "[{\"broken\":")
        .await
        .unwrap();

    let err = console
        .session
        .login("jane@x.com", "Abcdef1!")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Serialization);
    assert_eq!(console.session.current(), SessionState::anonymous());
}

#[tokio::test]
async fn test_logout_during_inflight_login_wins() {
    let console = TestConsole::with_latency(50).await;
    console.register_jane().await;

    let session = Arc::new(console.session);

    // Start a login that suspends in its simulated latency, then log out
    // while it is still in flight. The operations queue, so the logout
    // runs after the login completes and the session stays closed.
    let login = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.login("jane@x.com", "Abcdef1!").await })
    };
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    session.logout().await;

    login.await.unwrap().unwrap();
    assert_eq!(session.current(), SessionState::anonymous());
}
