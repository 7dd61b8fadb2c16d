//! # Application Orchestrator
//!
//! The [`App`] struct ties the router, the query cache and the UI together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drain query events, remount, GC       │   │
//! │  │  - navigate() / back() / forward()                   │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>   (history, path bar)  │   │
//! │  │  Cache: QueryClient             (remote data)        │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (QueryEvent)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Task Threads (Tokio)                     │
//! │  - one fetch task per request (deduplicated per key)        │
//! │  - one interval task per mounted ticker/history observer    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mounting
//!
//! Which queries are alive is a pure function of the current route and the
//! cache (see [`queries`]). Every tick and every navigation the app diffs
//! that set against the handles it holds: handles for keys no longer wanted
//! are dropped (stopping their timers), missing ones are mounted.
//!
//! **Critical**: state locks are held only for the duration of a read or an
//! update, never across a render or an await.

pub(crate) mod handlers;
pub mod queries;
pub mod router;
pub mod state;
mod window_app;

pub use router::{CoinTab, History, Location, NavState, Route};
pub use state::AppState;
pub use window_app::ViewerApp;

use crate::core::config::ViewerConfig;
use crate::core::service::CoinApi;
use crate::query::{QueryClient, QueryEvent, QueryHandle, QueryKey};
use crate::services::api::ApiClient;
use async_channel::Receiver;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Main application orchestrator.
///
/// Must be created and ticked inside a tokio runtime context, since mounting
/// queries spawns fetch and timer tasks.
pub struct App {
    /// Thread-safe shared application state.
    pub state: Arc<RwLock<AppState>>,

    /// Cache of remote data read by the screens.
    pub queries: QueryClient,

    pub config: ViewerConfig,

    /// Settle and eviction notices from the cache. Polled in `on_tick()`.
    event_rx: Receiver<QueryEvent>,

    api: Arc<dyn CoinApi>,

    /// Observers of the current view, by key.
    mounted: HashMap<QueryKey, QueryHandle>,
}

impl App {
    /// Create the app backed by the HTTP client.
    pub fn new(config: ViewerConfig, inspector_visible: bool) -> Self {
        let api: Arc<dyn CoinApi> = Arc::new(ApiClient::new(&config));
        Self::with_api(api, config, inspector_visible)
    }

    /// Create the app with any [`CoinApi`] implementation.
    pub fn with_api(api: Arc<dyn CoinApi>, config: ViewerConfig, inspector_visible: bool) -> Self {
        let queries = QueryClient::new(config.gc_time);
        let start = Location::new(&config.start_path);
        tracing::info!(start = %start, api_base = %config.api_base, "Starting viewer");

        let mut app = Self {
            state: Arc::new(RwLock::new(AppState::new(start, inspector_visible))),
            event_rx: queries.events(),
            queries,
            config,
            api,
            mounted: HashMap::new(),
        };
        app.sync_queries();
        app
    }

    /// Per-frame housekeeping. Returns the number of cache events handled so
    /// the caller knows whether a repaint is due.
    pub fn on_tick(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(&event);
            processed += 1;
        }

        self.sync_queries();
        self.queries.collect_garbage();
        processed
    }

    fn handle_event(&self, event: &QueryEvent) {
        match event {
            QueryEvent::Fetched { key, duration_ms } => {
                tracing::trace!(key = %key, duration_ms, "Query updated");
            }
            QueryEvent::Failed { key, error } => {
                tracing::debug!(key = %key, error = %error, "Query failed");
            }
            QueryEvent::Evicted { key } => {
                tracing::trace!(key = %key, "Query evicted");
            }
        }
    }

    /// Bring the mounted observers in line with the current route.
    pub fn sync_queries(&mut self) {
        let route = self.state.read().route();
        let wanted = queries::wanted_keys(&route, &self.queries);

        self.mounted.retain(|key, _| {
            let keep = wanted.contains(key);
            if !keep {
                tracing::debug!(key = %key, "Unmounting query");
            }
            keep
        });

        for key in wanted {
            if self.mounted.contains_key(&key) {
                continue;
            }
            if let Some(handle) = queries::mount(&key, &self.queries, &self.api, &self.config) {
                self.mounted.insert(key, handle);
            }
        }
    }

    /// Keys with a live observer, sorted.
    pub fn mounted_keys(&self) -> Vec<QueryKey> {
        let mut keys: Vec<QueryKey> = self.mounted.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn navigate(&mut self, location: Location) {
        handlers::navigation::navigate(&self.state, location);
        self.sync_queries();
    }

    /// Open a coin's detail view, carrying its name for the title.
    pub fn open_coin(&mut self, coin_id: &str, name: &str) {
        self.navigate(Location::with_state(
            &router::coin_path(coin_id),
            NavState { name: name.to_string() },
        ));
    }

    /// Switch the detail view's tab, keeping the current navigation state.
    pub fn open_tab(&mut self, coin_id: &str, tab: CoinTab) {
        let state = self.state.read().location().state.clone();
        let path = router::tab_path(coin_id, tab);
        let location = match state {
            Some(state) => Location::with_state(&path, state),
            None => Location::new(&path),
        };
        self.navigate(location);
    }

    pub fn back(&mut self) {
        if handlers::navigation::back(&self.state) {
            self.sync_queries();
        }
    }

    pub fn forward(&mut self) {
        if handlers::navigation::forward(&self.state) {
            self.sync_queries();
        }
    }

    pub fn submit_path_input(&mut self) {
        handlers::navigation::submit_path_input(&self.state);
        self.sync_queries();
    }

    pub fn toggle_inspector(&mut self) {
        let mut state = self.state.write();
        state.inspector_visible = !state.inspector_visible;
        tracing::debug!(visible = state.inspector_visible, "Query inspector toggled");
    }
}
