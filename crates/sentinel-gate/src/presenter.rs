//! Navigation rail presentation.
//!
//! A user-experience enforcement surface only: it disables what the gate
//! would reject, but the gate remains authoritative because a destination
//! can be requested without going through the rail.

use sentinel_entity::navigation::{Destination, NAVIGATION_RAIL, NavigationEntry};
use sentinel_entity::session::SessionState;

use crate::gate::{self, GateDecision};

/// How a rail entry renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// Clickable; `active` marks the destination currently viewed.
    Enabled {
        /// Whether this entry is the viewed destination.
        active: bool,
    },
    /// Blocked on authentication; plain disabled treatment.
    Disabled {
        /// Tooltip explaining the block.
        hint: &'static str,
    },
    /// Blocked on the detection requirement alone; locked treatment.
    Locked {
        /// Tooltip explaining the block.
        hint: &'static str,
    },
}

/// One rendered navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Where the link leads.
    pub destination: Destination,
    /// Display label.
    pub label: &'static str,
    /// Render state.
    pub state: LinkState,
}

/// Render the navigation rail for the current session.
///
/// `viewed` marks the active entry. Each entry is mapped through the
/// gate's decision rather than re-deriving reachability here.
pub fn present(session: &SessionState, viewed: Option<Destination>) -> Vec<NavLink> {
    NAVIGATION_RAIL
        .iter()
        .map(|entry| present_entry(entry, session, viewed))
        .collect()
}

fn present_entry(
    entry: &NavigationEntry,
    session: &SessionState,
    viewed: Option<Destination>,
) -> NavLink {
    let state = match gate::evaluate(entry, session) {
        GateDecision::Grant => LinkState::Enabled {
            active: viewed == Some(entry.destination),
        },
        GateDecision::RedirectToLogin => LinkState::Disabled {
            hint: "Sign in to access",
        },
        GateDecision::RedirectToUpload(_) => LinkState::Locked {
            hint: "Complete upload and detection first",
        },
    };

    NavLink {
        destination: entry.destination,
        label: entry.label,
        state,
    }
}
