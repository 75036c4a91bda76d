//! Per-key query state as seen by a view.

use crate::error::SdkError;
use std::sync::Arc;
use tokio::time::Instant;

/// Lifecycle of one cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Idle,
    Fetching,
    Success,
    Error,
}

/// Snapshot of a cache entry, typed for the reader.
///
/// `data` keeps the last good value while a refetch is running or after it
/// failed (stale-while-revalidate).
#[derive(Debug)]
pub struct QueryState<T> {
    pub status: QueryStatus,
    pub data: Option<Arc<T>>,
    pub error: Option<Arc<SdkError>>,
    pub updated_at: Option<Instant>,
    pub is_stale: bool,
}

impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        Self {
            status: self.status,
            data: self.data.clone(),
            error: self.error.clone(),
            updated_at: self.updated_at,
            is_stale: self.is_stale,
        }
    }
}

impl<T> QueryState<T> {
    pub fn idle() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            error: None,
            updated_at: None,
            is_stale: true,
        }
    }

    /// First load: nothing to show yet.
    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Fetching && self.data.is_none()
    }

    pub fn is_fetching(&self) -> bool {
        self.status == QueryStatus::Fetching
    }

    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_state() {
        let state: QueryState<u32> = QueryState::idle();
        assert!(!state.is_loading());
        assert!(state.is_stale);
        assert!(state.data.is_none());
    }

    #[test]
    fn test_refetch_with_data_is_not_loading() {
        let state = QueryState {
            status: QueryStatus::Fetching,
            data: Some(Arc::new(1u32)),
            error: None,
            updated_at: Some(Instant::now()),
            is_stale: true,
        };
        assert!(state.is_fetching());
        assert!(!state.is_loading());
    }
}
