//! # Navigation Handlers
//!
//! Path navigation and history movement.

use crate::app::router::Location;
use crate::app::state::AppState;
use parking_lot::RwLock;
use std::sync::Arc;

/// Visit `location` and sync the path bar.
///
/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn navigate(state: &Arc<RwLock<AppState>>, location: Location) -> bool {
    let mut state = state.write();
    tracing::info!(
        from = %state.location(),
        to = %location,
        nav_name = location.nav_name().unwrap_or_default(),
        "Navigate"
    );
    let changed = state.location().path != location.path;
    state.path_input = location.path.clone();
    state.history.push(location);
    changed
}

/// Step back in history.
///
/// Internal handler function - use [`crate::app::App::back`] instead.
pub(crate) fn back(state: &Arc<RwLock<AppState>>) -> bool {
    let mut state = state.write();
    if !state.history.back() {
        return false;
    }
    state.path_input = state.location().path.clone();
    tracing::debug!(to = %state.location(), "History back");
    true
}

/// Step forward in history.
///
/// Internal handler function - use [`crate::app::App::forward`] instead.
pub(crate) fn forward(state: &Arc<RwLock<AppState>>) -> bool {
    let mut state = state.write();
    if !state.history.forward() {
        return false;
    }
    state.path_input = state.location().path.clone();
    tracing::debug!(to = %state.location(), "History forward");
    true
}

/// Navigate to whatever is typed in the path bar.
///
/// Internal handler function - use [`crate::app::App::submit_path_input`] instead.
pub(crate) fn submit_path_input(state: &Arc<RwLock<AppState>>) -> bool {
    let typed = state.read().path_input.clone();
    navigate(state, Location::new(&typed))
}
