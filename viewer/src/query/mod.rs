//! # Query Cache
//!
//! Keyed cache of remote data with loading-state tracking, periodic refetch
//! and request deduplication.
//!
//! ## Model
//!
//! ```text
//!  view ──observe(def)──► QueryHandle ──drop──► timer aborted, observer released
//!                              │
//!                              ▼
//!                        QueryClient (Arc<Inner>)
//!                              │
//!          ┌───────────────────┼─────────────────────┐
//!          ▼                   ▼                     ▼
//!   entries: HashMap     in-flight Shared       QueryEvent channel
//!   key → Entry          future per key         (UI repaint, logging)
//! ```
//!
//! - **Keys**: [`QueryKey`] is an operation name plus an optional coin id.
//! - **Observers**: [`QueryClient::observe`] serves cached data at once and
//!   starts a background fetch when the entry is missing or stale.
//! - **Intervals**: an observer with a `refetch_interval` runs a tokio task
//!   that refetches on every tick until its [`QueryHandle`] is dropped.
//! - **Deduplication**: concurrent fetches of one key await the same
//!   `futures::future::Shared`, so only one request is on the wire.
//! - **Garbage collection**: entries nobody observes are evicted after
//!   `gc_time` by [`QueryClient::collect_garbage`].
//!
//! Values are stored type-erased as `Arc<dyn Any + Send + Sync>` and
//! downcast on read; reading a key with the wrong type yields
//! `AppError::Query`.
//!
//! Everything that spawns (`observe`) must run inside a tokio runtime.

pub mod client;
pub mod entry;
pub mod key;
pub mod observer;

pub use client::{QueryClient, QueryEvent};
pub use entry::{QueryInfo, QuerySnapshot, QueryStatus};
pub use key::QueryKey;
pub use observer::{QueryDef, QueryFn, QueryHandle, QueryOptions};
