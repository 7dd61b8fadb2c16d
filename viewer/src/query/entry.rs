//! Cache entries and the read-side views of them

use super::key::QueryKey;
use crate::core::error::AppError;
use futures::future::{BoxFuture, Shared};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tokio::time::{Duration, Instant};

pub(crate) type AnyData = Arc<dyn Any + Send + Sync>;
pub(crate) type SharedFetch = Shared<BoxFuture<'static, Result<AnyData, AppError>>>;

/// One key's slot in the cache.
pub(crate) struct Entry {
    pub(crate) data: Option<AnyData>,
    pub(crate) error: Option<AppError>,
    pub(crate) updated_at: Option<Instant>,
    /// Id and future of the request currently on the wire.
    pub(crate) in_flight: Option<(u64, SharedFetch)>,
    pub(crate) observers: usize,
    /// Set while `observers == 0`; drives garbage collection.
    pub(crate) unobserved_since: Option<Instant>,
    pub(crate) fetch_count: u64,
}

impl Entry {
    pub(crate) fn new(now: Instant) -> Self {
        Self {
            data: None,
            error: None,
            updated_at: None,
            in_flight: None,
            observers: 0,
            unobserved_since: Some(now),
            fetch_count: 0,
        }
    }

    pub(crate) fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub(crate) fn status(&self) -> QueryStatus {
        QueryStatus::from_parts(self.data.is_some(), self.error.is_some())
    }

    /// No data yet, or the last success is at least `stale_time` old.
    pub(crate) fn is_stale(&self, stale_time: Duration, now: Instant) -> bool {
        match self.updated_at {
            Some(updated_at) if self.data.is_some() => now.duration_since(updated_at) >= stale_time,
            _ => true,
        }
    }

    pub(crate) fn is_collectable(&self, gc_time: Duration, now: Instant) -> bool {
        self.observers == 0
            && self.in_flight.is_none()
            && self
                .unobserved_since
                .is_some_and(|since| now.duration_since(since) >= gc_time)
    }

    pub(crate) fn info(&self, key: &QueryKey, now: Instant) -> QueryInfo {
        QueryInfo {
            key: key.clone(),
            status: self.status(),
            is_fetching: self.is_fetching(),
            observers: self.observers,
            fetch_count: self.fetch_count,
            data_age: self.updated_at.map(|at| now.duration_since(at)),
            error: self.error.as_ref().map(ToString::to_string),
        }
    }
}

/// Lifecycle of a key as the views see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// No data and no error yet
    Loading,
    /// Last fetch failed (data from an earlier success may still be present)
    Error,
    /// Data present and the last fetch succeeded
    Success,
}

impl QueryStatus {
    fn from_parts(has_data: bool, has_error: bool) -> Self {
        match (has_data, has_error) {
            (_, true) => QueryStatus::Error,
            (true, false) => QueryStatus::Success,
            (false, false) => QueryStatus::Loading,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QueryStatus::Loading => "loading",
            QueryStatus::Error => "error",
            QueryStatus::Success => "success",
        }
    }
}

/// Typed read of one key at one moment.
pub struct QuerySnapshot<T> {
    pub data: Option<Arc<T>>,
    pub error: Option<AppError>,
    pub is_fetching: bool,
    pub updated_at: Option<Instant>,
}

impl<T> QuerySnapshot<T> {
    pub fn empty() -> Self {
        Self {
            data: None,
            error: None,
            is_fetching: false,
            updated_at: None,
        }
    }

    /// True while no data is available and no error has been recorded.
    pub fn is_loading(&self) -> bool {
        self.data.is_none() && self.error.is_none()
    }

    pub fn status(&self) -> QueryStatus {
        QueryStatus::from_parts(self.data.is_some(), self.error.is_some())
    }
}

impl<T> Clone for QuerySnapshot<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            error: self.error.clone(),
            is_fetching: self.is_fetching,
            updated_at: self.updated_at,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for QuerySnapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuerySnapshot")
            .field("data", &self.data)
            .field("error", &self.error)
            .field("is_fetching", &self.is_fetching)
            .finish()
    }
}

/// Untyped summary of an entry for the query inspector.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryInfo {
    pub key: QueryKey,
    pub status: QueryStatus,
    pub is_fetching: bool,
    pub observers: usize,
    pub fetch_count: u64,
    pub data_age: Option<Duration>,
    pub error: Option<String>,
}
