//! High-level client — `LearningClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared query cache and the accessor methods.

use crate::domain::concept::client::Concepts;
use crate::domain::exercise::client::Exercises;
use crate::domain::health::client::Health;
use crate::domain::lesson::client::Lessons;
use crate::domain::progress::client::ProgressClient;
use crate::domain::stats::client::StatsClient;
use crate::domain::vocabulary::client::Vocabulary;
use crate::domain::word::client::Words;
use crate::domain::wordbook::client::Wordbook;
use crate::error::SdkError;
use crate::http::{ApiHttp, RetryPolicy};
use crate::mutation::Mutation;
use crate::network::ClientConfig;
use crate::query::{QueryClient, QueryKey, QueryPolicy};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::concept::client::Concepts as ConceptsClient;
pub use crate::domain::exercise::client::Exercises as ExerciseClient;
pub use crate::domain::health::client::Health as HealthClient;
pub use crate::domain::lesson::client::Lessons as LessonsClient;
pub use crate::domain::progress::client::ProgressClient as ProgressSubClient;
pub use crate::domain::stats::client::StatsClient as StatsSubClient;
pub use crate::domain::vocabulary::client::Vocabulary as VocabularyClient;
pub use crate::domain::word::client::Words as WordsClient;
pub use crate::domain::wordbook::client::Wordbook as WordbookClient;

/// The primary entry point for the Learning Finnish SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.words()`, `client.wordbook()`, etc. Cloning is cheap and every
/// clone shares the same query cache.
///
/// Cached reads (`watch_*`, views) spawn their fetches on the current Tokio
/// runtime; outside one the entry records an error and nothing is sent.
#[derive(Clone)]
pub struct LearningClient {
    pub(crate) http: ApiHttp,
    pub(crate) queries: QueryClient,
    pub(crate) config: ClientConfig,
}

impl LearningClient {
    pub fn builder() -> LearningClientBuilder {
        LearningClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn words(&self) -> Words<'_> {
        Words { client: self }
    }

    pub fn wordbook(&self) -> Wordbook<'_> {
        Wordbook { client: self }
    }

    pub fn concepts(&self) -> Concepts<'_> {
        Concepts { client: self }
    }

    pub fn lessons(&self) -> Lessons<'_> {
        Lessons { client: self }
    }

    pub fn vocabulary(&self) -> Vocabulary<'_> {
        Vocabulary { client: self }
    }

    pub fn progress(&self) -> ProgressClient<'_> {
        ProgressClient { client: self }
    }

    pub fn stats(&self) -> StatsClient<'_> {
        StatsClient { client: self }
    }

    pub fn exercise(&self) -> Exercises<'_> {
        Exercises { client: self }
    }

    pub fn health(&self) -> Health<'_> {
        Health { client: self }
    }

    // ── Cache ────────────────────────────────────────────────────────────

    /// The query cache shared by every clone of this client.
    pub fn queries(&self) -> &QueryClient {
        &self.queries
    }

    /// A mutation that invalidates `invalidates` after each successful run.
    pub fn mutation<T: Send + Sync + 'static>(&self, invalidates: Vec<QueryKey>) -> Mutation<T> {
        Mutation::new(self.queries.clone(), invalidates)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct LearningClientBuilder {
    config: ClientConfig,
    base_url: Option<String>,
    timeout: Option<Duration>,
    query_policy: QueryPolicy,
    read_retry: RetryPolicy,
    queries: Option<QueryClient>,
}

impl LearningClientBuilder {
    /// Start from a resolved configuration (e.g. `ClientConfig::from_env()`).
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Read the configuration from `LEARNING_FINNISH_*` environment variables.
    pub fn from_env(self) -> Result<Self, SdkError> {
        Ok(self.config(ClientConfig::from_env()?))
    }

    /// Explicit API base URL; overrides the configured environment.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn query_policy(mut self, policy: QueryPolicy) -> Self {
        self.query_policy = policy;
        self
    }

    /// Retry policy for GET requests at the HTTP layer. Defaults to none;
    /// the query cache already retries failed fetches.
    pub fn read_retry(mut self, policy: RetryPolicy) -> Self {
        self.read_retry = policy;
        self
    }

    /// Share an existing cache instead of creating one.
    pub fn queries(mut self, queries: QueryClient) -> Self {
        self.queries = Some(queries);
        self
    }

    pub fn build(self) -> Result<LearningClient, SdkError> {
        let mut config = self.config;
        if let Some(url) = self.base_url {
            config.api_url = Some(url);
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }

        let base_url = config.api_base_url()?;
        let http = ApiHttp::new(&base_url, config.timeout)?.with_read_policy(self.read_retry);
        tracing::debug!(base_url = %base_url, environment = config.environment.as_str(), "client built");

        Ok(LearningClient {
            http,
            queries: self
                .queries
                .unwrap_or_else(|| QueryClient::new(self.query_policy)),
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{ClientConfig, DEFAULT_DEV_API_URL};

    #[test]
    fn test_builder_defaults_to_development() {
        let client = LearningClient::builder().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_DEV_API_URL);
    }

    #[test]
    fn test_builder_production_base() {
        let client = LearningClient::builder()
            .config(ClientConfig::production("https://example.org", "/learning-finnish/"))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://example.org/learning-finnish/api");
    }

    #[test]
    fn test_builder_explicit_url_wins() {
        let client = LearningClient::builder()
            .config(ClientConfig::production("https://example.org", "/"))
            .base_url("http://127.0.0.1:9000/api/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000/api");
    }

    #[test]
    fn test_production_without_origin_fails() {
        let err = LearningClient::builder()
            .config(ClientConfig::production("", "/"))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn test_clones_share_cache() {
        let client = LearningClient::builder().build().unwrap();
        let other = client.clone();
        client.queries().set_data(&QueryKey::new("health"), 1u8);
        assert!(other.queries().contains(&QueryKey::new("health")));
    }
}
