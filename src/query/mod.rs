//! Query cache — keyed, deduplicating, stale-while-revalidate.
//!
//! `QueryClient` is a cheap-to-clone handle on one cache. The application creates
//! it once (usually through `LearningClient`) and passes it around; there is no
//! process-global instance.
//!
//! Fetches run as Tokio tasks, so a request keeps going and fills the cache
//! even if every caller that was waiting for it goes away. Outside a Tokio
//! runtime no fetch is started; the entry records a `Config` error instead.

pub mod key;
pub mod keys;
mod observer;
pub mod state;

pub use key::QueryKey;
pub use observer::QueryObserver;
pub use state::{QueryState, QueryStatus};

use crate::error::SdkError;
use crate::http::retry::RetryConfig;

use futures_util::future::{join_all, BoxFuture, FutureExt, Shared};
use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;

type AnyData = Arc<dyn Any + Send + Sync>;
type FetchOutcome = Result<AnyData, Arc<SdkError>>;
type SharedFetch = Shared<BoxFuture<'static, FetchOutcome>>;
type Fetcher = Arc<dyn Fn() -> BoxFuture<'static, Result<AnyData, SdkError>> + Send + Sync>;

/// Staleness, eviction and retry windows, applied uniformly to every key.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPolicy {
    /// Data older than this is refetched on the next read.
    pub stale_time: Duration,
    /// Unobserved entries are evicted after this long.
    pub gc_time: Duration,
    /// Retries applied to a failed fetch before the error is stored.
    pub retry: RetryConfig,
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(5 * 60),
            gc_time: Duration::from_secs(10 * 60),
            retry: RetryConfig::query(),
        }
    }
}

struct Entry {
    status: QueryStatus,
    data: Option<AnyData>,
    error: Option<Arc<SdkError>>,
    updated_at: Option<Instant>,
    invalidated: bool,
    observers: usize,
    unobserved_since: Option<Instant>,
    in_flight: Option<(u64, SharedFetch)>,
    fetcher: Option<Fetcher>,
}

impl Entry {
    fn new() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            error: None,
            updated_at: None,
            invalidated: false,
            observers: 0,
            unobserved_since: Some(Instant::now()),
            in_flight: None,
            fetcher: None,
        }
    }

    fn is_stale(&self, stale_time: Duration) -> bool {
        match self.updated_at {
            Some(at) => self.invalidated || at.elapsed() >= stale_time,
            None => true,
        }
    }

    fn is_fresh(&self, stale_time: Duration) -> bool {
        self.data.is_some() && !self.is_stale(stale_time)
    }

    fn typed_state<T: Send + Sync + 'static>(&self, stale_time: Duration) -> QueryState<T> {
        QueryState {
            status: self.status,
            data: self.data.clone().and_then(|d| d.downcast::<T>().ok()),
            error: self.error.clone(),
            updated_at: self.updated_at,
            is_stale: self.is_stale(stale_time),
        }
    }
}

struct Inner {
    entries: Mutex<HashMap<QueryKey, Entry>>,
    policy: QueryPolicy,
    next_fetch_id: AtomicU64,
}

/// Handle on a query cache.
#[derive(Clone)]
pub struct QueryClient {
    inner: Arc<Inner>,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new(QueryPolicy::default())
    }
}

impl QueryClient {
    pub fn new(policy: QueryPolicy) -> Self {
        Self {
            inner: Arc::new(Inner {
                entries: Mutex::new(HashMap::new()),
                policy,
                next_fetch_id: AtomicU64::new(1),
            }),
        }
    }

    pub fn policy(&self) -> &QueryPolicy {
        &self.inner.policy
    }

    // ── Reads ────────────────────────────────────────────────────────────

    /// Return fresh cached data, join an in-flight request, or fetch.
    pub async fn fetch<T, F, Fut>(&self, key: &QueryKey, fetcher: F) -> Result<Arc<T>, Arc<SdkError>>
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, SdkError>> + Send + 'static,
    {
        let fetcher = erase(fetcher);
        let pending = {
            let mut entries = self.lock();
            self.evict_expired(&mut entries);
            let entry = entries.entry(key.clone()).or_insert_with(Entry::new);
            entry.fetcher = Some(fetcher);
            if entry.is_fresh(self.inner.policy.stale_time) {
                if let Some(data) = entry.data.clone() {
                    tracing::debug!(%key, "query cache hit");
                    return downcast(key, data);
                }
            }
            self.start_fetch(key, entry, false)
        };
        match pending {
            Some(fetch) => downcast(key, fetch.await?),
            None => Err(Arc::new(no_fetcher(key))),
        }
    }

    /// Start observing a key. Missing, stale or invalidated data is refetched in
    /// the background while the observer already sees whatever is cached.
    pub fn observe<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> QueryObserver<T>
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, SdkError>> + Send + 'static,
    {
        let fetcher = erase(fetcher);
        {
            let mut entries = self.lock();
            self.evict_expired(&mut entries);
            let entry = entries.entry(key.clone()).or_insert_with(Entry::new);
            entry.fetcher = Some(fetcher);
            entry.observers += 1;
            entry.unobserved_since = None;
            if !entry.is_fresh(self.inner.policy.stale_time) {
                let _ = self.start_fetch(&key, entry, false);
            }
        }
        QueryObserver::new(self.clone(), key)
    }

    /// Typed snapshot of an entry; `Idle` when the key is unknown.
    pub fn state<T: Send + Sync + 'static>(&self, key: &QueryKey) -> QueryState<T> {
        let entries = self.lock();
        entries
            .get(key)
            .map(|e| e.typed_state(self.inner.policy.stale_time))
            .unwrap_or_else(QueryState::idle)
    }

    pub fn get_data<T: Send + Sync + 'static>(&self, key: &QueryKey) -> Option<Arc<T>> {
        self.state::<T>(key).data
    }

    /// Seed or overwrite an entry as freshly fetched.
    pub fn set_data<T: Send + Sync + 'static>(&self, key: &QueryKey, data: T) {
        let mut entries = self.lock();
        let entry = entries.entry(key.clone()).or_insert_with(Entry::new);
        entry.data = Some(Arc::new(data));
        entry.error = None;
        entry.updated_at = Some(Instant::now());
        entry.invalidated = false;
        if entry.in_flight.is_none() {
            entry.status = QueryStatus::Success;
        }
    }

    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.lock()
            .get(key)
            .map_or(true, |e| e.is_stale(self.inner.policy.stale_time))
    }

    pub fn observer_count(&self, key: &QueryKey) -> usize {
        self.lock().get(key).map_or(0, |e| e.observers)
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ── Writes ───────────────────────────────────────────────────────────

    /// Mark every entry matching `filter` stale and refetch the observed ones.
    ///
    /// Cached data is left in place until the refetch lands. Unobserved
    /// entries refetch on their next read. Returns the matched keys.
    pub async fn invalidate(&self, filter: &QueryKey) -> Vec<QueryKey> {
        let (matched, refetches) = {
            let mut entries = self.lock();
            let mut matched = Vec::new();
            let mut refetches = Vec::new();
            for (key, entry) in entries.iter_mut() {
                if !key.matches(filter) {
                    continue;
                }
                entry.invalidated = true;
                matched.push(key.clone());
                if entry.observers > 0 {
                    if let Some(fetch) = self.start_fetch(key, entry, true) {
                        refetches.push(fetch);
                    }
                }
            }
            (matched, refetches)
        };

        tracing::debug!(%filter, matched = matched.len(), refetching = refetches.len(), "invalidate");
        join_all(refetches).await;
        matched
    }

    /// Refetch one key now, even if an older request is still running.
    pub async fn refetch<T: Send + Sync + 'static>(&self, key: &QueryKey) -> Result<Arc<T>, Arc<SdkError>> {
        let pending = {
            let mut entries = self.lock();
            entries
                .get_mut(key)
                .and_then(|entry| self.start_fetch(key, entry, true))
        };
        match pending {
            Some(fetch) => downcast(key, fetch.await?),
            None => Err(Arc::new(no_fetcher(key))),
        }
    }

    pub fn remove(&self, key: &QueryKey) -> bool {
        self.lock().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Evict unobserved entries idle for longer than `gc_time`. Returns the number evicted.
    pub fn collect_garbage(&self) -> usize {
        let mut entries = self.lock();
        self.evict_expired(&mut entries)
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn lock(&self) -> MutexGuard<'_, HashMap<QueryKey, Entry>> {
        self.inner
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn evict_expired(&self, entries: &mut HashMap<QueryKey, Entry>) -> usize {
        let gc_time = self.inner.policy.gc_time;
        let before = entries.len();
        entries.retain(|key, entry| {
            let expired = entry.observers == 0
                && entry.in_flight.is_none()
                && entry
                    .unobserved_since
                    .is_some_and(|since| since.elapsed() >= gc_time);
            if expired {
                tracing::debug!(%key, "query evicted");
            }
            !expired
        });
        before - entries.len()
    }

    /// Join the in-flight request for `entry`, or spawn a new one.
    ///
    /// With `force`, a new request is spawned even when one is running; both
    /// write their result on completion, last one wins.
    fn start_fetch(&self, key: &QueryKey, entry: &mut Entry, force: bool) -> Option<SharedFetch> {
        if !force {
            if let Some((_, fetch)) = &entry.in_flight {
                tracing::debug!(%key, "joining in-flight fetch");
                return Some(fetch.clone());
            }
        }
        let fetcher = entry.fetcher.clone()?;
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(%key, "query fetch outside a Tokio runtime");
                let err = Arc::new(SdkError::Config(format!(
                    "query fetch for {key} needs a Tokio runtime: {e}"
                )));
                entry.error = Some(err.clone());
                entry.status = QueryStatus::Error;
                return Some(futures_util::future::ready(Err(err)).boxed().shared());
            }
        };

        let fetch_id = self.inner.next_fetch_id.fetch_add(1, Ordering::Relaxed);
        entry.status = QueryStatus::Fetching;
        tracing::debug!(%key, fetch_id, "query fetch started");

        let client = self.clone();
        let task_key = key.clone();
        let retry = self.inner.policy.retry.clone();
        let task = runtime.spawn(async move {
            let outcome = run_with_retry(&task_key, fetcher, &retry)
                .await
                .map_err(Arc::new);
            client.settle(&task_key, fetch_id, &outcome);
            outcome
        });

        let fetch = async move {
            match task.await {
                Ok(outcome) => outcome,
                Err(e) => Err(Arc::new(SdkError::Other(format!("query task failed: {e}")))),
            }
        }
        .boxed()
        .shared();

        entry.in_flight = Some((fetch_id, fetch.clone()));
        Some(fetch)
    }

    fn settle(&self, key: &QueryKey, fetch_id: u64, outcome: &FetchOutcome) {
        let mut entries = self.lock();
        // Removed while the request was running.
        let Some(entry) = entries.get_mut(key) else {
            return;
        };

        if matches!(entry.in_flight, Some((owner, _)) if owner == fetch_id) {
            entry.in_flight = None;
        }
        if entry.observers == 0 {
            entry.unobserved_since = Some(Instant::now());
        }

        match outcome {
            Ok(data) => {
                entry.data = Some(data.clone());
                entry.error = None;
                entry.updated_at = Some(Instant::now());
                entry.invalidated = false;
                tracing::debug!(%key, fetch_id, "query fetch succeeded");
            }
            Err(e) => {
                entry.error = Some(e.clone());
                tracing::warn!(%key, fetch_id, error = %e, "query fetch failed");
            }
        }

        entry.status = if entry.in_flight.is_some() {
            QueryStatus::Fetching
        } else if outcome.is_ok() {
            QueryStatus::Success
        } else {
            QueryStatus::Error
        };
    }

    pub(crate) fn release(&self, key: &QueryKey) {
        let mut entries = self.lock();
        if let Some(entry) = entries.get_mut(key) {
            entry.observers = entry.observers.saturating_sub(1);
            if entry.observers == 0 {
                entry.unobserved_since = Some(Instant::now());
            }
        }
    }

    /// Await the entry's current request, or start one if the data is not fresh.
    pub(crate) async fn ensure<T: Send + Sync + 'static>(
        &self,
        key: &QueryKey,
    ) -> Result<Arc<T>, Arc<SdkError>> {
        let pending = {
            let mut entries = self.lock();
            let Some(entry) = entries.get_mut(key) else {
                return Err(Arc::new(no_fetcher(key)));
            };
            if entry.in_flight.is_none() && entry.is_fresh(self.inner.policy.stale_time) {
                if let Some(data) = entry.data.clone() {
                    return downcast(key, data);
                }
            }
            self.start_fetch(key, entry, false)
        };
        match pending {
            Some(fetch) => downcast(key, fetch.await?),
            None => Err(Arc::new(no_fetcher(key))),
        }
    }
}

fn erase<T, F, Fut>(fetcher: F) -> Fetcher
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, SdkError>> + Send + 'static,
{
    Arc::new(move || {
        let fut = fetcher();
        async move { fut.await.map(|v| Arc::new(v) as AnyData) }.boxed()
    })
}

fn downcast<T: Send + Sync + 'static>(key: &QueryKey, data: AnyData) -> Result<Arc<T>, Arc<SdkError>> {
    data.downcast::<T>().map_err(|_| {
        Arc::new(SdkError::Other(format!(
            "cached value for {key} has a different type"
        )))
    })
}

fn no_fetcher(key: &QueryKey) -> SdkError {
    SdkError::Other(format!("no fetcher registered for {key}"))
}

async fn run_with_retry(
    key: &QueryKey,
    fetcher: Fetcher,
    retry: &RetryConfig,
) -> Result<AnyData, SdkError> {
    let mut attempt = 0;
    loop {
        match fetcher().await {
            Ok(data) => return Ok(data),
            // Validation failures never reached the backend; retrying cannot help.
            Err(e) if attempt < retry.max_retries && !e.is_validation() => {
                let delay = retry.delay_for_attempt(attempt);
                tracing::debug!(%key, attempt = attempt + 1, delay_ms = delay.as_millis() as u64, error = %e, "retrying query");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting_fetcher(
        calls: Arc<AtomicUsize>,
    ) -> impl Fn() -> BoxFuture<'static, Result<usize, SdkError>> + Send + Sync + 'static {
        move || {
            let calls = calls.clone();
            async move { Ok(calls.fetch_add(1, Ordering::SeqCst) + 1) }.boxed()
        }
    }

    fn no_retry() -> QueryPolicy {
        QueryPolicy {
            retry: RetryConfig::disabled(),
            ..QueryPolicy::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_caches_fresh_data() {
        let client = QueryClient::new(no_retry());
        let calls = Arc::new(AtomicUsize::new(0));
        let key = QueryKey::new("stats");

        let first = client.fetch(&key, counting_fetcher(calls.clone())).await.unwrap();
        let second = client.fetch(&key, counting_fetcher(calls.clone())).await.unwrap();
        assert_eq!(*first, 1);
        assert_eq!(*second, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(client.state::<usize>(&key).is_success());
    }

    #[tokio::test]
    async fn test_concurrent_fetches_share_one_request() {
        let client = QueryClient::new(no_retry());
        let calls = Arc::new(AtomicUsize::new(0));
        let key = QueryKey::new("concepts");

        let slow = {
            let calls = calls.clone();
            move || {
                let calls = calls.clone();
                async move {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    Ok::<_, SdkError>(calls.fetch_add(1, Ordering::SeqCst) + 1)
                }
            }
        };

        let (a, b) = tokio::join!(client.fetch(&key, slow.clone()), client.fetch(&key, slow));
        assert_eq!(*a.unwrap(), 1);
        assert_eq!(*b.unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_data_is_refetched() {
        let client = QueryClient::new(no_retry());
        let calls = Arc::new(AtomicUsize::new(0));
        let key = QueryKey::new("stats");

        client.fetch(&key, counting_fetcher(calls.clone())).await.unwrap();
        tokio::time::advance(Duration::from_secs(5 * 60 + 1)).await;
        assert!(client.is_stale(&key));

        let value = client.fetch(&key, counting_fetcher(calls.clone())).await.unwrap();
        assert_eq!(*value, 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_retried_once() {
        let client = QueryClient::new(QueryPolicy {
            retry: RetryConfig {
                initial_delay: Duration::from_millis(1),
                ..RetryConfig::query()
            },
            ..QueryPolicy::default()
        });
        let calls = Arc::new(AtomicUsize::new(0));
        let key = QueryKey::new("words");

        let failing = {
            let calls = calls.clone();
            move || {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err::<usize, _>(SdkError::Other("backend down".to_string()))
                }
            }
        };

        let err = client.fetch(&key, failing).await.unwrap_err();
        assert_eq!(err.to_string(), "backend down");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(client.state::<usize>(&key).is_error());
    }

    #[tokio::test]
    async fn test_failure_keeps_last_good_data() {
        let client = QueryClient::new(no_retry());
        let key = QueryKey::new("stats");
        client.set_data(&key, 7usize);

        client.invalidate(&key).await;
        let err = client
            .fetch(&key, || async { Err::<usize, _>(SdkError::Other("boom".to_string())) })
            .await;
        assert!(err.is_err());

        let state = client.state::<usize>(&key);
        assert!(state.is_error());
        assert_eq!(state.data.as_deref(), Some(&7));
    }

    #[tokio::test]
    async fn test_invalidate_refetches_observed_entries() {
        let client = QueryClient::new(no_retry());
        let calls = Arc::new(AtomicUsize::new(0));
        let key = QueryKey::new("concepts").with("limit", 100);

        let observer = client.observe(key.clone(), counting_fetcher(calls.clone()));
        assert_eq!(*observer.wait().await.unwrap(), 1);

        let matched = client.invalidate(&QueryKey::new("concepts")).await;
        assert_eq!(matched, vec![key.clone()]);
        assert_eq!(observer.state().data.as_deref(), Some(&2));
        assert!(!observer.state().is_stale);
    }

    #[tokio::test]
    async fn test_invalidate_marks_unobserved_entries_stale_only() {
        let client = QueryClient::new(no_retry());
        let calls = Arc::new(AtomicUsize::new(0));
        let key = QueryKey::new("stats");

        client.fetch(&key, counting_fetcher(calls.clone())).await.unwrap();
        client.invalidate(&key).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(client.is_stale(&key));
        assert_eq!(client.get_data::<usize>(&key).as_deref(), Some(&1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unobserved_entries_are_collected() {
        let client = QueryClient::new(no_retry());
        let calls = Arc::new(AtomicUsize::new(0));
        let key = QueryKey::new("user_words").with("user", "user-1");

        let observer = client.observe(key.clone(), counting_fetcher(calls));
        observer.wait().await.unwrap();
        assert_eq!(client.observer_count(&key), 1);

        tokio::time::advance(Duration::from_secs(11 * 60)).await;
        assert_eq!(client.collect_garbage(), 0);

        drop(observer);
        assert_eq!(client.observer_count(&key), 0);
        tokio::time::advance(Duration::from_secs(9 * 60)).await;
        assert_eq!(client.collect_garbage(), 0);
        tokio::time::advance(Duration::from_secs(60)).await;
        assert_eq!(client.collect_garbage(), 1);
        assert!(!client.contains(&key));
    }

    #[tokio::test]
    async fn test_in_flight_fetch_completes_without_observers() {
        let client = QueryClient::new(no_retry());
        let key = QueryKey::new("inflections").with("word", "w1");
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let rx = Arc::new(tokio::sync::Mutex::new(Some(rx)));

        let gated = move || {
            let rx = rx.clone();
            async move {
                if let Some(rx) = rx.lock().await.take() {
                    let _ = rx.await;
                }
                Ok::<_, SdkError>("done".to_string())
            }
        };

        let observer = client.observe(key.clone(), gated);
        assert!(observer.state().is_loading());
        drop(observer);

        tx.send(()).unwrap();
        for _ in 0..50 {
            if client.get_data::<String>(&key).is_some() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(client.get_data::<String>(&key).as_deref().map(String::as_str), Some("done"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_observer_serves_old_data_while_refetching() {
        let client = QueryClient::new(no_retry());
        let key = QueryKey::new("stats");
        let release = Arc::new(tokio::sync::Notify::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let fetcher = {
            let release = release.clone();
            let calls = calls.clone();
            move || {
                let release = release.clone();
                let calls = calls.clone();
                async move {
                    let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                    if n > 1 {
                        release.notified().await;
                    }
                    Ok::<_, SdkError>(n)
                }
            }
        };

        let observer = client.observe(key.clone(), fetcher);
        assert_eq!(*observer.wait().await.unwrap(), 1);

        let invalidating = tokio::spawn({
            let client = client.clone();
            let key = key.clone();
            async move { client.invalidate(&key).await }
        });
        while !observer.state().is_fetching() {
            tokio::task::yield_now().await;
        }

        let state = observer.state();
        assert_eq!(state.data.as_deref(), Some(&1));
        assert!(!state.is_loading());
        assert!(state.is_stale);

        release.notify_one();
        invalidating.await.unwrap();
        let state = observer.state();
        assert_eq!(state.data.as_deref(), Some(&2));
        assert!(state.is_success());
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_completed_fetch_wins() {
        let client = QueryClient::new(no_retry());
        let key = QueryKey::new("concepts");
        let calls = Arc::new(AtomicUsize::new(0));

        // The first request is slower than the forced second one.
        let fetcher = {
            let calls = calls.clone();
            move || {
                let calls = calls.clone();
                async move {
                    let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                    let delay = if n == 1 { 50 } else { 10 };
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    Ok::<_, SdkError>(n)
                }
            }
        };

        let observer = client.observe(key.clone(), fetcher);
        assert_eq!(*observer.refetch().await.unwrap(), 2);
        assert_eq!(observer.data().as_deref(), Some(&2));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(observer.data().as_deref(), Some(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_observe_outside_runtime_records_error() {
        let client = QueryClient::new(no_retry());
        let key = QueryKey::new("stats");

        let observer = client.observe(key.clone(), || async { Ok::<_, SdkError>(1usize) });
        let state = observer.state();
        assert!(state.is_error());
        assert!(state.data.is_none());
        let message = state.error.map(|e| e.to_string()).unwrap_or_default();
        assert!(message.contains("Tokio runtime"));
    }

    #[tokio::test]
    async fn test_type_mismatch_is_an_error() {
        let client = QueryClient::new(no_retry());
        let key = QueryKey::new("stats");
        client.set_data(&key, 1u32);
        let err = client
            .fetch(&key, || async { Ok::<String, SdkError>("x".to_string()) })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("different type"));
    }
}
