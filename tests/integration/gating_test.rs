//! Integration tests for access gating across the session lifecycle.

mod helpers;

use helpers::TestConsole;

use sentinel_entity::navigation::{Destination, entry_for};
use sentinel_gate::{GateDecision, LinkState, gate, present};

#[tokio::test]
async fn test_results_unlock_follows_the_session_lifecycle() {
    let console = TestConsole::new().await;
    let results = entry_for(Destination::Results);

    console.register_jane().await;
    assert!(!gate::is_reachable(&results, &console.session.current()));

    console
        .session
        .login("jane@x.com", "Abcdef1!")
        .await
        .unwrap();
    assert!(console.session.current().is_authenticated);
    // Authenticated but detection not yet run: still unreachable.
    assert!(!gate::is_reachable(&results, &console.session.current()));

    console.session.mark_detection_complete().await.unwrap();
    assert!(gate::is_reachable(&results, &console.session.current()));

    console.session.logout().await;
    assert!(!gate::is_reachable(&results, &console.session.current()));
}

#[tokio::test]
async fn test_gate_decisions_across_states() {
    let console = TestConsole::new().await;
    console.register_jane().await;
    let results = entry_for(Destination::Results);
    let upload = entry_for(Destination::Upload);

    // Anonymous: both protected pages send the user to sign in.
    let state = console.session.current();
    assert_eq!(gate::evaluate(&upload, &state), GateDecision::RedirectToLogin);
    assert_eq!(gate::evaluate(&results, &state), GateDecision::RedirectToLogin);

    // Authenticated without detection: upload opens, results blocks with
    // the explanatory panel.
    console
        .session
        .login("jane@x.com", "Abcdef1!")
        .await
        .unwrap();
    let state = console.session.current();
    assert_eq!(gate::evaluate(&upload, &state), GateDecision::Grant);
    match gate::evaluate(&results, &state) {
        GateDecision::RedirectToUpload(notice) => {
            assert_eq!(notice.title, "Complete Upload First");
            assert_eq!(notice.action_label, "Go to Upload");
        }
        other => panic!("Expected a redirect to upload, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rail_reacts_to_every_transition() {
    let console = TestConsole::new().await;
    console.register_jane().await;

    let rail_state = |links: &[sentinel_gate::NavLink], destination| {
        links
            .iter()
            .find(|l| l.destination == destination)
            .unwrap()
            .state
    };

    let links = present(&console.session.current(), Some(Destination::Home));
    assert!(matches!(
        rail_state(&links, Destination::Results),
        LinkState::Disabled { .. }
    ));

    console
        .session
        .login("jane@x.com", "Abcdef1!")
        .await
        .unwrap();
    let links = present(&console.session.current(), Some(Destination::Upload));
    assert!(matches!(
        rail_state(&links, Destination::Upload),
        LinkState::Enabled { active: true }
    ));
    assert!(matches!(
        rail_state(&links, Destination::Results),
        LinkState::Locked { .. }
    ));

    console.session.mark_detection_complete().await.unwrap();
    let links = present(&console.session.current(), Some(Destination::Results));
    assert!(matches!(
        rail_state(&links, Destination::Results),
        LinkState::Enabled { active: true }
    ));

    console.session.logout().await;
    let links = present(&console.session.current(), Some(Destination::Home));
    assert!(matches!(
        rail_state(&links, Destination::Results),
        LinkState::Disabled { .. }
    ));
}

#[tokio::test]
async fn test_subscribers_reevaluate_on_broadcast() {
    let console = TestConsole::new().await;
    console.register_jane().await;
    let results = entry_for(Destination::Results);

    let mut receiver = console.session.subscribe();
    assert!(!gate::is_reachable(&results, &receiver.borrow()));

    console
        .session
        .login("jane@x.com", "Abcdef1!")
        .await
        .unwrap();
    console.session.mark_detection_complete().await.unwrap();

    receiver.changed().await.unwrap();
    let state = receiver.borrow_and_update().clone();
    assert!(gate::is_reachable(&results, &state));
}
