//! Mutation coordinator — runs one write and invalidates the reads it affects.
//!
//! A `Mutation<T>` is owned by the view that issues the write. It tracks the
//! last run's phase and result; the cache is only touched after a success.

use crate::error::SdkError;
use crate::query::{QueryClient, QueryKey};

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

/// Phase of the most recent run. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationPhase {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

struct MutationState<T> {
    phase: MutationPhase,
    data: Option<Arc<T>>,
    error: Option<Arc<SdkError>>,
    run_id: u64,
}

/// A write plus the cache keys it invalidates on success.
pub struct Mutation<T> {
    queries: QueryClient,
    invalidates: Vec<QueryKey>,
    state: Arc<Mutex<MutationState<T>>>,
}

impl<T> Clone for Mutation<T> {
    fn clone(&self) -> Self {
        Self {
            queries: self.queries.clone(),
            invalidates: self.invalidates.clone(),
            state: self.state.clone(),
        }
    }
}

impl<T: Send + Sync + 'static> Mutation<T> {
    pub fn new(queries: QueryClient, invalidates: Vec<QueryKey>) -> Self {
        Self {
            queries,
            invalidates,
            state: Arc::new(Mutex::new(MutationState {
                phase: MutationPhase::Idle,
                data: None,
                error: None,
                run_id: 0,
            })),
        }
    }

    pub fn invalidates(&self) -> &[QueryKey] {
        &self.invalidates
    }

    pub fn phase(&self) -> MutationPhase {
        self.lock().phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == MutationPhase::Pending
    }

    /// Result of the last successful run.
    pub fn data(&self) -> Option<Arc<T>> {
        self.lock().data.clone()
    }

    pub fn error(&self) -> Option<Arc<SdkError>> {
        self.lock().error.clone()
    }

    pub fn reset(&self) {
        let mut state = self.lock();
        state.phase = MutationPhase::Idle;
        state.data = None;
        state.error = None;
    }

    /// Run the write. On success the declared keys are invalidated (observed
    /// ones are refetched) before this returns.
    ///
    /// Runs are not serialised: the last one to settle decides the phase.
    pub async fn run<Fut>(&self, request: Fut) -> Result<Arc<T>, Arc<SdkError>>
    where
        Fut: Future<Output = Result<T, SdkError>>,
    {
        let run_id = {
            let mut state = self.lock();
            state.run_id += 1;
            state.phase = MutationPhase::Pending;
            state.error = None;
            state.run_id
        };

        match request.await {
            Ok(data) => {
                let data = Arc::new(data);
                {
                    let mut state = self.lock();
                    state.phase = MutationPhase::Success;
                    state.data = Some(data.clone());
                    state.error = None;
                }
                tracing::info!(run_id, invalidates = self.invalidates.len(), "mutation succeeded");
                for key in &self.invalidates {
                    self.queries.invalidate(key).await;
                }
                Ok(data)
            }
            Err(e) => {
                let e = Arc::new(e);
                tracing::warn!(run_id, error = %e, "mutation failed");
                let mut state = self.lock();
                state.phase = MutationPhase::Error;
                state.error = Some(e.clone());
                Err(e)
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, MutationState<T>> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<T> std::fmt::Debug for Mutation<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mutation")
            .field("invalidates", &self.invalidates)
            .finish()
    }
}
