//! # Application State Types
//!
//! Everything the UI reads each frame that is not cached remote data: where
//! the user is, what they typed in the path bar and which panels are open.

use super::router::{History, Location, Route};

/// Title of the listing view, also used as the window title there.
pub const COINS_TITLE: &str = "Coins";

#[derive(Debug, Clone)]
pub struct AppState {
    /// Visited locations; the current one selects the view
    pub history: History,
    /// Contents of the editable path bar
    pub path_input: String,
    /// Query inspector window open
    pub inspector_visible: bool,
    /// Title last sent to the native window
    pub window_title: String,
}

impl AppState {
    pub fn new(start: Location, inspector_visible: bool) -> Self {
        Self {
            path_input: start.path.clone(),
            history: History::new(start),
            inspector_visible,
            window_title: COINS_TITLE.to_string(),
        }
    }

    pub fn location(&self) -> &Location {
        self.history.current()
    }

    pub fn route(&self) -> Route {
        self.location().route()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Location::new("/"), false)
    }
}
