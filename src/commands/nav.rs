//! Navigation rail subcommand.

use sentinel_auth::SessionManager;
use sentinel_core::error::AppError;
use sentinel_gate::{LinkState, present};

/// Print each rail entry with its reachability treatment.
pub fn show(session: &SessionManager) -> Result<(), AppError> {
    let state = session.current();

    for link in present(&state, None) {
        let (marker, hint) = match link.state {
            LinkState::Enabled { .. } => (' ', ""),
            LinkState::Disabled { hint } => ('-', hint),
            LinkState::Locked { hint } => ('x', hint),
        };
        println!(
            "{marker} {:<14} {:<18} {hint}",
            link.label,
            link.destination.path()
        );
    }
    Ok(())
}
