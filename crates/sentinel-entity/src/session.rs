//! Process-wide session state.

use crate::account::Account;

/// The authentication and workflow state of this device.
///
/// Invariants, maintained by the session manager:
/// - `current_account` is `Some` if and only if `is_authenticated` is true.
/// - `detection_complete` never survives a session boundary: login and
///   logout both force it back to false.
///
/// At most one session exists per device at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    /// Whether an account is currently signed in.
    pub is_authenticated: bool,
    /// The signed-in account, if any.
    pub current_account: Option<Account>,
    /// Whether the detection workflow has been completed this session.
    pub detection_complete: bool,
}

impl SessionState {
    /// The anonymous default: signed out, no account, detection not run.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A freshly authenticated session for `account`.
    ///
    /// `detection_complete` starts false; a prior session's flag never
    /// carries over.
    pub fn authenticated(account: Account) -> Self {
        Self {
            is_authenticated: true,
            current_account: Some(account),
            detection_complete: false,
        }
    }
}
