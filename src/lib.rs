//! # Learning Finnish SDK
//!
//! A Rust client for the Learning Finnish vocabulary backend: typed endpoints,
//! a shared query cache, write coordination and per-screen view models.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared ids, domain models, errors, environment config
//! 2. **HTTP API** — `ApiHttp` with JSON encoding, error mapping and retry policies
//! 3. **Query cache** — `QueryClient` keyed reads with dedupe, staleness and GC
//! 4. **Mutations** — `Mutation<T>` writes that invalidate the reads they affect
//! 5. **High-Level Client** — `LearningClient` with nested sub-clients
//! 6. **Views** — Screen state (filters, forms, expanded rows) over observers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use learning_finnish_sdk::prelude::*;
//!
//! let client = LearningClient::builder()
//!     .base_url("http://localhost:8001/api")
//!     .build()?;
//!
//! let result = client.words().search("kissa").await?;
//! let saved = client.wordbook().save(&UserId::default_user(), &result.finnish_word).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Environment and base URL configuration.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies. Retry config is always available.
pub mod http;

// ── Layer 3: Query cache ─────────────────────────────────────────────────────

/// Keyed read cache shared by every view.
pub mod query;

// ── Layer 4: Mutations ───────────────────────────────────────────────────────

/// Writes plus the cache keys they invalidate.
pub mod mutation;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `LearningClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 6: Views ───────────────────────────────────────────────────────────

/// Per-screen view models.
#[cfg(feature = "http")]
pub mod view;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{ConceptId, LessonId, UserId, WordId};

    // Domain types — words and wordbook
    pub use crate::domain::word::{
        AddWordResponse, AddWordStatus, BulkAddResult, Inflections, NewWord, Word,
        WordListParams, WordSearchResult, WordType,
    };
    pub use crate::domain::wordbook::{StatusAdvance, UserWord, WordStatus};

    // Domain types — concepts, lessons, vocabulary, progress
    pub use crate::domain::concept::{Concept, ConceptPatch, NewConcept};
    pub use crate::domain::lesson::{Lesson, LessonPreview};
    pub use crate::domain::progress::{LessonProgress, UserProgress};
    pub use crate::domain::vocabulary::{Difficulty, VocabularyWord};

    // Domain types — stats and exercises
    pub use crate::domain::exercise::{ExerciseHistoryEntry, ExerciseResult, NextExercise};
    pub use crate::domain::health::HealthStatus;
    pub use crate::domain::stats::{ChartPoint, Settings, Stats};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{ClientConfig, Environment, DEFAULT_DEV_API_URL};

    // Query cache + mutations
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
    pub use crate::mutation::{Mutation, MutationPhase};
    pub use crate::query::{QueryClient, QueryKey, QueryObserver, QueryPolicy, QueryState};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        ConceptsClient, ExerciseClient, HealthClient, LearningClient, LearningClientBuilder,
        LessonsClient, ProgressSubClient, StatsSubClient, VocabularyClient, WordbookClient,
        WordsClient,
    };

    // Views
    #[cfg(feature = "http")]
    pub use crate::view::ViewStatus;
}
