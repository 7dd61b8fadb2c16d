//! The query cache itself

use super::entry::{AnyData, Entry, QueryInfo, QuerySnapshot};
use super::key::QueryKey;
use super::observer::QueryFn;
use crate::core::error::{AppError, Result};
use async_channel::{Receiver, Sender};
use futures::FutureExt;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::time::{Duration, Instant};

/// Published whenever a fetch settles.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryEvent {
    Fetched { key: QueryKey, duration_ms: u64 },
    Failed { key: QueryKey, error: AppError },
    Evicted { key: QueryKey },
}

/// Shared handle to the cache. Clones refer to the same entries.
#[derive(Clone)]
pub struct QueryClient {
    inner: Arc<Inner>,
}

struct Inner {
    entries: Mutex<HashMap<QueryKey, Entry>>,
    next_fetch_id: AtomicU64,
    gc_time: Duration,
    event_tx: Sender<QueryEvent>,
    event_rx: Receiver<QueryEvent>,
}

impl QueryClient {
    pub fn new(gc_time: Duration) -> Self {
        let (event_tx, event_rx) = async_channel::unbounded();
        Self {
            inner: Arc::new(Inner {
                entries: Mutex::new(HashMap::new()),
                next_fetch_id: AtomicU64::new(1),
                gc_time,
                event_tx,
                event_rx,
            }),
        }
    }

    /// Receiver for settle and eviction events.
    pub fn events(&self) -> Receiver<QueryEvent> {
        self.inner.event_rx.clone()
    }

    pub fn gc_time(&self) -> Duration {
        self.inner.gc_time
    }

    /// Fetch `key` now, or join the fetch already in flight for it.
    ///
    /// The result is written to the cache before it is returned. A failure is
    /// recorded on the entry; data from an earlier success is kept.
    pub async fn fetch<T>(&self, key: &QueryKey, query_fn: &QueryFn<T>) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let (fetch_id, request) = {
            let mut entries = self.inner.entries.lock();
            let entry = entries
                .entry(key.clone())
                .or_insert_with(|| Entry::new(Instant::now()));

            match &entry.in_flight {
                Some((fetch_id, request)) => {
                    tracing::trace!(key = %key, fetch_id, "Joining in-flight fetch");
                    (*fetch_id, request.clone())
                }
                None => {
                    let fetch_id = self.inner.next_fetch_id.fetch_add(1, Ordering::Relaxed);
                    let pending = query_fn();
                    let request = async move { pending.await.map(|data| Arc::new(data) as AnyData) }
                        .boxed()
                        .shared();
                    entry.in_flight = Some((fetch_id, request.clone()));
                    entry.fetch_count += 1;
                    tracing::debug!(key = %key, fetch_id, "Fetch started");
                    (fetch_id, request)
                }
            }
        };

        let start = Instant::now();
        let result = request.await;
        self.settle(key, fetch_id, &result, start.elapsed());

        result.and_then(|data| downcast::<T>(key, data))
    }

    /// Record a finished request. Only the first waiter to arrive writes.
    fn settle(&self, key: &QueryKey, fetch_id: u64, result: &Result<AnyData>, elapsed: Duration) {
        let event = {
            let mut entries = self.inner.entries.lock();
            let Some(entry) = entries.get_mut(key) else {
                return;
            };
            if !matches!(&entry.in_flight, Some((id, _)) if *id == fetch_id) {
                return;
            }
            entry.in_flight = None;

            match result {
                Ok(data) => {
                    entry.data = Some(Arc::clone(data));
                    entry.error = None;
                    entry.updated_at = Some(Instant::now());
                    QueryEvent::Fetched {
                        key: key.clone(),
                        duration_ms: elapsed.as_millis() as u64,
                    }
                }
                Err(error) => {
                    entry.error = Some(error.clone());
                    QueryEvent::Failed {
                        key: key.clone(),
                        error: error.clone(),
                    }
                }
            }
        };

        match &event {
            QueryEvent::Failed { error, .. } => {
                tracing::warn!(key = %key, fetch_id, error = %error, "Fetch failed");
            }
            _ => {
                tracing::debug!(key = %key, fetch_id, duration_ms = elapsed.as_millis(), "Fetch settled");
            }
        }
        self.publish(event);
    }

    fn publish(&self, event: QueryEvent) {
        if let Err(e) = self.inner.event_tx.try_send(event) {
            tracing::trace!(error = %e, "Query event dropped");
        }
    }

    /// Typed read of `key`. Missing keys read as an empty snapshot.
    pub fn snapshot<T>(&self, key: &QueryKey) -> QuerySnapshot<T>
    where
        T: Send + Sync + 'static,
    {
        let entries = self.inner.entries.lock();
        let Some(entry) = entries.get(key) else {
            return QuerySnapshot::empty();
        };

        let data = entry
            .data
            .clone()
            .and_then(|data| match downcast::<T>(key, data) {
                Ok(data) => Some(data),
                Err(e) => {
                    tracing::error!(key = %key, error = %e, "Cached value has the wrong type");
                    None
                }
            });

        QuerySnapshot {
            data,
            error: entry.error.clone(),
            is_fetching: entry.is_fetching(),
            updated_at: entry.updated_at,
        }
    }

    /// Typed cached value, if any.
    pub fn get_data<T>(&self, key: &QueryKey) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.snapshot::<T>(key).data
    }

    /// No data and no error recorded for `key`.
    pub fn is_loading(&self, key: &QueryKey) -> bool {
        self.inner
            .entries
            .lock()
            .get(key)
            .is_none_or(|entry| entry.data.is_none() && entry.error.is_none())
    }

    pub(crate) fn is_stale(&self, key: &QueryKey, stale_time: Duration) -> bool {
        self.inner
            .entries
            .lock()
            .get(key)
            .is_none_or(|entry| entry.is_stale(stale_time, Instant::now()))
    }

    pub(crate) fn add_observer(&self, key: &QueryKey) {
        let mut entries = self.inner.entries.lock();
        let entry = entries
            .entry(key.clone())
            .or_insert_with(|| Entry::new(Instant::now()));
        entry.observers += 1;
        entry.unobserved_since = None;
    }

    pub(crate) fn remove_observer(&self, key: &QueryKey) {
        let mut entries = self.inner.entries.lock();
        if let Some(entry) = entries.get_mut(key) {
            entry.observers = entry.observers.saturating_sub(1);
            if entry.observers == 0 {
                entry.unobserved_since = Some(Instant::now());
            }
        }
    }

    /// Evict entries that have gone unobserved for `gc_time`. Returns how
    /// many were removed.
    pub fn collect_garbage(&self) -> usize {
        let now = Instant::now();
        let gc_time = self.inner.gc_time;
        let evicted: Vec<QueryKey> = {
            let mut entries = self.inner.entries.lock();
            let keys: Vec<QueryKey> = entries
                .iter()
                .filter(|(_, entry)| entry.is_collectable(gc_time, now))
                .map(|(key, _)| key.clone())
                .collect();
            for key in &keys {
                entries.remove(key);
            }
            keys
        };

        for key in &evicted {
            tracing::debug!(key = %key, "Evicted unobserved query");
            self.publish(QueryEvent::Evicted { key: key.clone() });
        }
        evicted.len()
    }

    /// Summaries of every entry, sorted by key.
    pub fn entries_info(&self) -> Vec<QueryInfo> {
        let now = Instant::now();
        let mut infos: Vec<QueryInfo> = self
            .inner
            .entries
            .lock()
            .iter()
            .map(|(key, entry)| entry.info(key, now))
            .collect();
        infos.sort_by(|a, b| a.key.cmp(&b.key));
        infos
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.inner.entries.lock().contains_key(key)
    }
}

fn downcast<T>(key: &QueryKey, data: AnyData) -> Result<Arc<T>>
where
    T: Send + Sync + 'static,
{
    data.downcast::<T>()
        .map_err(|_| AppError::Query(format!("value cached under {} has an unexpected type", key)))
}
