//! Query definitions and the observers views hold while mounted

use super::client::QueryClient;
use super::key::QueryKey;
use crate::core::error::Result;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, MissedTickBehavior};

/// Produces a fresh request future each time the key is fetched.
pub type QueryFn<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T>> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// How long a successful value counts as fresh. Zero means every new
    /// observer triggers a background refetch.
    pub stale_time: Duration,
    /// Refetch period while observed.
    pub refetch_interval: Option<Duration>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            stale_time: Duration::ZERO,
            refetch_interval: None,
        }
    }
}

impl QueryOptions {
    pub fn refetch_every(period: Duration) -> Self {
        Self {
            refetch_interval: Some(period),
            ..Self::default()
        }
    }
}

/// A key, the function that fetches it, and how often.
pub struct QueryDef<T> {
    pub key: QueryKey,
    pub query_fn: QueryFn<T>,
    pub options: QueryOptions,
}

impl<T> QueryDef<T>
where
    T: Send + Sync + 'static,
{
    pub fn new<F, Fut>(key: QueryKey, fetcher: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            key,
            query_fn: Arc::new(move || fetcher().boxed()),
            options: QueryOptions::default(),
        }
    }

    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }
}

impl<T> Clone for QueryDef<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            query_fn: Arc::clone(&self.query_fn),
            options: self.options,
        }
    }
}

/// A mounted observer. Dropping it stops its refetch timer and releases the
/// entry for garbage collection; a request already on the wire still lands.
pub struct QueryHandle {
    client: QueryClient,
    key: QueryKey,
    refetch_task: Option<JoinHandle<()>>,
}

impl QueryHandle {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}

impl Drop for QueryHandle {
    fn drop(&mut self) {
        if let Some(task) = self.refetch_task.take() {
            task.abort();
        }
        self.client.remove_observer(&self.key);
        tracing::trace!(key = %self.key, "Observer dropped");
    }
}

impl QueryClient {
    /// Mount an observer for `def`.
    ///
    /// Cached data stays readable through [`QueryClient::snapshot`]; a
    /// background fetch starts when the entry is missing or stale, and an
    /// interval task refetches on every tick when `refetch_interval` is set.
    pub fn observe<T>(&self, def: QueryDef<T>) -> QueryHandle
    where
        T: Send + Sync + 'static,
    {
        let stale = self.is_stale(&def.key, def.options.stale_time);
        self.add_observer(&def.key);

        if stale {
            self.spawn_fetch(def.key.clone(), Arc::clone(&def.query_fn));
        }

        let refetch_task = def.options.refetch_interval.map(|period| {
            let client = self.clone();
            let key = def.key.clone();
            let query_fn = Arc::clone(&def.query_fn);
            tokio::spawn(async move {
                let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    tracing::trace!(key = %key, "Interval refetch");
                    client.spawn_fetch(key.clone(), Arc::clone(&query_fn));
                }
            })
        });

        tracing::debug!(
            key = %def.key,
            stale,
            refetch_ms = def.options.refetch_interval.map(|d| d.as_millis() as u64),
            "Observer mounted"
        );

        QueryHandle {
            client: self.clone(),
            key: def.key,
            refetch_task,
        }
    }

    /// Fetch on a detached task. Errors are already recorded on the entry.
    pub(crate) fn spawn_fetch<T>(&self, key: QueryKey, query_fn: QueryFn<T>)
    where
        T: Send + Sync + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            let _ = client.fetch(&key, &query_fn).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_def(calls: Arc<AtomicUsize>) -> QueryDef<usize> {
        QueryDef::new(QueryKey::tickers("btc-bitcoin"), move || {
            let calls = calls.clone();
            async move { Ok(calls.fetch_add(1, Ordering::SeqCst) + 1) }
        })
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_observe_fetches_missing_entry() {
        let client = QueryClient::new(Duration::from_secs(300));
        let calls = Arc::new(AtomicUsize::new(0));
        let def = counting_def(calls.clone());

        let _handle = client.observe(def.clone());
        assert!(client.snapshot::<usize>(&def.key).is_loading());

        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(client.get_data::<usize>(&def.key).as_deref(), Some(&1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fresh_entry_is_served_without_refetch() {
        let client = QueryClient::new(Duration::from_secs(300));
        let calls = Arc::new(AtomicUsize::new(0));
        let def = counting_def(calls.clone())
            .with_options(QueryOptions { stale_time: Duration::from_secs(60), refetch_interval: None });

        drop(client.observe(def.clone()));
        settle().await;
        let _second = client.observe(def.clone());
        settle().await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_entry_serves_cache_and_refetches() {
        let client = QueryClient::new(Duration::from_secs(300));
        let calls = Arc::new(AtomicUsize::new(0));
        let def = counting_def(calls.clone());

        drop(client.observe(def.clone()));
        settle().await;

        let _second = client.observe(def.clone());
        assert_eq!(client.get_data::<usize>(&def.key).as_deref(), Some(&1));
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(client.get_data::<usize>(&def.key).as_deref(), Some(&2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_refetches_until_handle_dropped() {
        let client = QueryClient::new(Duration::from_secs(300));
        let calls = Arc::new(AtomicUsize::new(0));
        let def = counting_def(calls.clone())
            .with_options(QueryOptions::refetch_every(Duration::from_secs(5)));

        let handle = client.observe(def);
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_millis(5_000)).await;
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        tokio::time::sleep(Duration::from_millis(10_000)).await;
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 4);

        drop(handle);
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_observers_share_requests() {
        let client = QueryClient::new(Duration::from_secs(300));
        let calls = Arc::new(AtomicUsize::new(0));
        let slow_calls = calls.clone();
        let def: QueryDef<usize> = QueryDef::new(QueryKey::price("btc-bitcoin"), move || {
            let calls = slow_calls.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(500)).await;
                Ok(calls.fetch_add(1, Ordering::SeqCst) + 1)
            }
        });

        let _a = client.observe(def.clone());
        let _b = client.observe(def.clone());
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(client.entries_info()[0].observers, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_releases_observer() {
        let client = QueryClient::new(Duration::from_secs(300));
        let def: QueryDef<u8> = QueryDef::new(QueryKey::info("btc-bitcoin"), || async {
            Err(AppError::Network("offline".to_string()))
        });

        let handle = client.observe(def.clone());
        assert_eq!(handle.key(), &def.key);
        assert_eq!(client.entries_info()[0].observers, 1);

        drop(handle);
        settle().await;
        let info = &client.entries_info()[0];
        assert_eq!(info.observers, 0);
        assert_eq!(info.error.as_deref(), Some("Network error: offline"));
    }
}
