//! Static navigation catalogue and per-destination access requirements.

use serde::{Deserialize, Serialize};

/// Every page the console can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// Landing page.
    Home,
    /// Traffic-sample upload and detection entry point.
    Upload,
    /// Detection results table.
    Results,
    /// Aggregate dashboard charts.
    Dashboard,
    /// Live traffic monitor.
    LiveMonitoring,
    /// Project information page.
    About,
    /// Sign-in form.
    Login,
    /// Registration form.
    Signup,
}

impl Destination {
    /// The route path of this destination.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Upload => "/upload",
            Self::Results => "/results",
            Self::Dashboard => "/dashboard",
            Self::LiveMonitoring => "/live-monitoring",
            Self::About => "/about",
            Self::Login => "/login",
            Self::Signup => "/signup",
        }
    }
}

/// A destination's declared access requirements.
///
/// Read by the access gate and the navigation presenter; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    /// Where the entry leads.
    pub destination: Destination,
    /// Label shown in the navigation rail.
    pub label: &'static str,
    /// Whether an authenticated session is required.
    pub requires_auth: bool,
    /// Whether a completed detection run is additionally required.
    pub requires_detection: bool,
}

impl NavigationEntry {
    /// Declare an entry.
    pub const fn new(
        destination: Destination,
        label: &'static str,
        requires_auth: bool,
        requires_detection: bool,
    ) -> Self {
        Self {
            destination,
            label,
            requires_auth,
            requires_detection,
        }
    }
}

/// The navigation rail, in display order.
pub const NAVIGATION_RAIL: &[NavigationEntry] = &[
    NavigationEntry::new(Destination::Home, "Home", false, false),
    NavigationEntry::new(Destination::Upload, "Upload", true, false),
    NavigationEntry::new(Destination::Results, "Results", true, true),
    NavigationEntry::new(Destination::Dashboard, "Dashboard", true, true),
    NavigationEntry::new(Destination::LiveMonitoring, "Live Monitor", true, true),
    NavigationEntry::new(Destination::About, "About", false, false),
];

/// Look up the declared requirements for a destination.
///
/// Destinations outside the rail (Login, Signup) are always public.
pub fn entry_for(destination: Destination) -> NavigationEntry {
    NAVIGATION_RAIL
        .iter()
        .find(|entry| entry.destination == destination)
        .copied()
        .unwrap_or(NavigationEntry::new(destination, "", false, false))
}
