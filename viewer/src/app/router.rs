//! # Path Router
//!
//! Maps paths to views and keeps a browser-like history of visited locations.
//!
//! | Path                   | Route                                   |
//! |------------------------|-----------------------------------------|
//! | `/`                    | `Route::Coins`                          |
//! | `/:coinId`             | `Route::Coin { tab: None }`             |
//! | `/:coinId/price[/...]` | `Route::Coin { tab: Some(Price) }`      |
//! | `/:coinId/chart[/...]` | `Route::Coin { tab: Some(Chart) }`      |
//!
//! Matching is a pure prefix match: no guards and no redirects. Segments past
//! the tab are ignored, and an unknown second segment shows the detail view
//! with no tab.

use std::fmt;

/// Nested tab of the coin detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinTab {
    Price,
    Chart,
}

impl CoinTab {
    /// Tabs in display order
    pub fn all() -> &'static [CoinTab] {
        &[CoinTab::Price, CoinTab::Chart]
    }

    /// Path segment that selects this tab
    pub fn segment(&self) -> &'static str {
        match self {
            CoinTab::Price => "price",
            CoinTab::Chart => "chart",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CoinTab::Price => "Price",
            CoinTab::Chart => "Chart",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        CoinTab::all()
            .iter()
            .copied()
            .find(|tab| tab.segment() == segment)
    }
}

/// Top-level view selected by a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Coins,
    Coin { coin_id: String, tab: Option<CoinTab> },
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let path = normalize_path(path);
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());

        match segments.next() {
            None => Route::Coins,
            Some(coin_id) => Route::Coin {
                coin_id: coin_id.to_string(),
                tab: segments.next().and_then(CoinTab::from_segment),
            },
        }
    }

    /// Canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Route::Coins => "/".to_string(),
            Route::Coin { coin_id, tab: None } => coin_path(coin_id),
            Route::Coin { coin_id, tab: Some(tab) } => tab_path(coin_id, *tab),
        }
    }

    pub fn coin_id(&self) -> Option<&str> {
        match self {
            Route::Coins => None,
            Route::Coin { coin_id, .. } => Some(coin_id),
        }
    }

    pub fn tab(&self) -> Option<CoinTab> {
        match self {
            Route::Coins => None,
            Route::Coin { tab, .. } => *tab,
        }
    }
}

/// `/{coin_id}`
pub fn coin_path(coin_id: &str) -> String {
    format!("/{}", coin_id)
}

/// `/{coin_id}/{tab}`
pub fn tab_path(coin_id: &str, tab: CoinTab) -> String {
    format!("/{}/{}", coin_id, tab.segment())
}

/// Whether `path` selects `tab`.
pub fn is_tab_active(path: &str, tab: CoinTab) -> bool {
    Route::parse(path).tab() == Some(tab)
}

/// Leading slash, no query string or fragment.
pub fn normalize_path(path: &str) -> String {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// State carried with a navigation, read by the destination view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    /// Display name of the coin being opened
    pub name: String,
}

/// A path plus the state it was navigated with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub state: Option<NavState>,
}

impl Location {
    pub fn new(path: &str) -> Self {
        Self {
            path: normalize_path(path),
            state: None,
        }
    }

    pub fn with_state(path: &str, state: NavState) -> Self {
        Self {
            path: normalize_path(path),
            state: Some(state),
        }
    }

    pub fn route(&self) -> Route {
        Route::parse(&self.path)
    }

    /// Name carried in the navigation state, if any.
    pub fn nav_name(&self) -> Option<&str> {
        self.state
            .as_ref()
            .map(|state| state.name.as_str())
            .filter(|name| !name.is_empty())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Visited locations with a cursor, like a browser's session history.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    /// Visit `location`, dropping any forward entries. Revisiting the current
    /// path replaces the entry instead of stacking a duplicate.
    pub fn push(&mut self, location: Location) {
        if self.current().path == location.path {
            self.entries[self.index] = location;
            return;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index += 1;
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn back(&mut self) -> bool {
        if self.can_go_back() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn forward(&mut self) -> bool {
        if self.can_go_forward() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::Coins);
        assert_eq!(Route::parse(""), Route::Coins);
        assert_eq!(
            Route::parse("/btc-bitcoin"),
            Route::Coin { coin_id: "btc-bitcoin".to_string(), tab: None }
        );
        assert_eq!(
            Route::parse("/btc-bitcoin/price"),
            Route::Coin { coin_id: "btc-bitcoin".to_string(), tab: Some(CoinTab::Price) }
        );
        assert_eq!(
            Route::parse("btc-bitcoin/chart/"),
            Route::Coin { coin_id: "btc-bitcoin".to_string(), tab: Some(CoinTab::Chart) }
        );
    }

    #[test]
    fn test_parse_is_prefix_match() {
        assert_eq!(Route::parse("/btc-bitcoin/chart/extra/segments").tab(), Some(CoinTab::Chart));
        assert_eq!(Route::parse("/btc-bitcoin/volume").tab(), None);
        assert_eq!(Route::parse("/btc-bitcoin/volume").coin_id(), Some("btc-bitcoin"));
        assert_eq!(Route::parse("/btc-bitcoin?x=1#top").path(), "/btc-bitcoin");
    }

    #[test]
    fn test_route_path_round_trip() {
        for path in ["/", "/eth-ethereum", "/eth-ethereum/price", "/eth-ethereum/chart"] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }

    #[test]
    fn test_tab_active_state() {
        assert!(is_tab_active("/btc-bitcoin/price", CoinTab::Price));
        assert!(!is_tab_active("/btc-bitcoin/price", CoinTab::Chart));
        assert!(is_tab_active("/btc-bitcoin/chart", CoinTab::Chart));
        assert!(!is_tab_active("/btc-bitcoin/chart", CoinTab::Price));
        assert!(!is_tab_active("/btc-bitcoin", CoinTab::Price));
        assert!(!is_tab_active("/", CoinTab::Chart));
    }

    #[test]
    fn test_nav_name_ignores_empty() {
        let named = Location::with_state("/btc-bitcoin", NavState { name: "Bitcoin".to_string() });
        assert_eq!(named.nav_name(), Some("Bitcoin"));
        assert_eq!(Location::new("/btc-bitcoin").nav_name(), None);
        assert_eq!(Location::with_state("/x", NavState::default()).nav_name(), None);
    }

    #[test]
    fn test_history_back_forward() {
        let mut history = History::new(Location::new("/"));
        history.push(Location::with_state("/btc-bitcoin", NavState { name: "Bitcoin".to_string() }));
        history.push(Location::new("/btc-bitcoin/chart"));

        assert!(history.back());
        assert_eq!(history.current().nav_name(), Some("Bitcoin"));
        assert!(history.back());
        assert_eq!(history.current().path, "/");
        assert!(!history.back());

        assert!(history.forward());
        assert_eq!(history.current().path, "/btc-bitcoin");

        history.push(Location::new("/eth-ethereum"));
        assert!(!history.can_go_forward());
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_history_same_path_replaces() {
        let mut history = History::new(Location::new("/btc-bitcoin"));
        history.push(Location::with_state("/btc-bitcoin", NavState { name: "Bitcoin".to_string() }));

        assert_eq!(history.len(), 1);
        assert_eq!(history.current().nav_name(), Some("Bitcoin"));
    }
}
