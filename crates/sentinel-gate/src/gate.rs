//! The authoritative access gate.
//!
//! Evaluated for the viewed destination on every session change and every
//! navigation. The navigation presenter also disables links this gate
//! would reject, but bypassing the presenter still lands here.

use sentinel_entity::navigation::{Destination, NavigationEntry};
use sentinel_entity::session::SessionState;

/// Explanatory panel shown while redirecting a destination that is
/// blocked only on the detection requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockNotice {
    /// Panel heading.
    pub title: &'static str,
    /// Why the destination is blocked.
    pub message: &'static str,
    /// Label of the action button.
    pub action_label: &'static str,
}

/// The panel copy for a detection-gated destination.
pub const DETECTION_NOTICE: BlockNotice = BlockNotice {
    title: "Complete Upload First",
    message: "You need to upload and complete anomaly detection before accessing this page.",
    action_label: "Go to Upload",
};

/// Outcome of gating a destination against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The destination is reachable; show it.
    Grant,
    /// Blocked on authentication; redirect to the sign-in page.
    RedirectToLogin,
    /// Authenticated but blocked on the detection requirement; redirect
    /// to the upload page and show the blocking panel while doing so.
    RedirectToUpload(BlockNotice),
}

impl GateDecision {
    /// Where the decision sends the user, if anywhere.
    pub fn redirect(self) -> Option<Destination> {
        match self {
            Self::Grant => None,
            Self::RedirectToLogin => Some(Destination::Login),
            Self::RedirectToUpload(_) => Some(Destination::Upload),
        }
    }
}

/// Whether `entry` is reachable under `session`.
///
/// The single predicate shared by the gate and the navigation presenter.
pub fn is_reachable(entry: &NavigationEntry, session: &SessionState) -> bool {
    (!entry.requires_auth || session.is_authenticated)
        && (!entry.requires_detection || session.detection_complete)
}

/// Gate a destination: grant it or pick the redirect.
///
/// Authentication outranks the detection requirement; an anonymous user
/// is sent to sign in even when the destination also requires detection.
pub fn evaluate(entry: &NavigationEntry, session: &SessionState) -> GateDecision {
    if entry.requires_auth && !session.is_authenticated {
        return GateDecision::RedirectToLogin;
    }
    if entry.requires_detection && !session.detection_complete {
        return GateDecision::RedirectToUpload(DETECTION_NOTICE);
    }
    GateDecision::Grant
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_entity::account::Account;
    use sentinel_entity::navigation::entry_for;

    fn authenticated(detection_complete: bool) -> SessionState {
        SessionState {
            detection_complete,
            ..SessionState::authenticated(Account::new("jane@x.com", "Jane Doe", "4eef75d3"))
        }
    }

    #[test]
    fn test_public_destinations_always_reachable() {
        let anonymous = SessionState::anonymous();
        for destination in [Destination::Home, Destination::About] {
            assert!(is_reachable(&entry_for(destination), &anonymous));
        }
    }

    #[test]
    fn test_anonymous_redirects_to_login() {
        let anonymous = SessionState::anonymous();
        assert_eq!(
            evaluate(&entry_for(Destination::Upload), &anonymous),
            GateDecision::RedirectToLogin
        );
        // Auth outranks detection: Results goes to Login, not Upload.
        assert_eq!(
            evaluate(&entry_for(Destination::Results), &anonymous),
            GateDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_detection_gate_redirects_to_upload() {
        let session = authenticated(false);
        let decision = evaluate(&entry_for(Destination::Results), &session);
        assert_eq!(decision, GateDecision::RedirectToUpload(DETECTION_NOTICE));
        assert_eq!(decision.redirect(), Some(Destination::Upload));
    }

    #[test]
    fn test_detection_complete_grants_gated_pages() {
        let session = authenticated(true);
        for destination in [
            Destination::Results,
            Destination::Dashboard,
            Destination::LiveMonitoring,
        ] {
            assert_eq!(
                evaluate(&entry_for(destination), &session),
                GateDecision::Grant
            );
        }
    }
}
