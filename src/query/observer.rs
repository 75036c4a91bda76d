use super::{QueryClient, QueryKey, QueryState};
use crate::error::SdkError;
use std::marker::PhantomData;
use std::sync::Arc;

/// A view's subscription to one cache entry.
///
/// While alive the entry is never garbage-collected and is refetched when
/// invalidated. Dropping it unsubscribes; a request already in flight still
/// completes and fills the cache.
pub struct QueryObserver<T> {
    client: QueryClient,
    key: QueryKey,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Send + Sync + 'static> QueryObserver<T> {
    pub(crate) fn new(client: QueryClient, key: QueryKey) -> Self {
        Self {
            client,
            key,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Current snapshot of the entry.
    pub fn state(&self) -> QueryState<T> {
        self.client.state(&self.key)
    }

    pub fn data(&self) -> Option<Arc<T>> {
        self.state().data
    }

    /// Wait for the current request, or return cached data if it is fresh.
    pub async fn wait(&self) -> Result<Arc<T>, Arc<SdkError>> {
        self.client.ensure(&self.key).await
    }

    /// Force a new request for this entry.
    pub async fn refetch(&self) -> Result<Arc<T>, Arc<SdkError>> {
        self.client.refetch(&self.key).await
    }
}

impl<T> Drop for QueryObserver<T> {
    fn drop(&mut self) {
        self.client.release(&self.key);
    }
}

impl<T> std::fmt::Debug for QueryObserver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryObserver").field("key", &self.key).finish()
    }
}
