//! Words sub-client — lookup, add, list, inflections, bulk import.

use crate::client::LearningClient;
use crate::domain::word::wire::{BulkAddRequest, WordResponse, WordSearchResponse};
use crate::domain::word::{
    AddWordResponse, AiDefinition, BulkAddResult, Inflections, NewWord, Word,
    WordListParams, WordSearchResult,
};
use crate::error::SdkError;
use crate::http::client::{segment, with_query};
use crate::mutation::Mutation;
use crate::query::{keys, QueryObserver};
use crate::shared::{require_non_blank, WordId};

/// Sub-client for vocabulary words.
pub struct Words<'a> {
    pub(crate) client: &'a LearningClient,
}

impl<'a> Words<'a> {
    /// Look a word up. The result is not cached.
    pub async fn search(&self, finnish_word: &str) -> Result<WordSearchResult, SdkError> {
        let finnish_word = require_non_blank("finnish_word", finnish_word)?;
        let url = with_query(
            self.client.http.url("/words/search"),
            &[("finnish_word", Some(finnish_word))],
        );
        let resp: WordSearchResponse = self.client.http.post(&url, None::<&()>).await?;
        Ok(resp.into())
    }

    /// Add a word to the global set. An existing word reports `Exists`.
    pub async fn add(&self, new_word: &NewWord) -> Result<AddWordResponse, SdkError> {
        let body = NewWord {
            finnish: require_non_blank("finnish", &new_word.finnish)?,
            danish: trimmed(&new_word.danish),
            english: trimmed(&new_word.english),
            word_type: new_word.word_type,
        };
        let url = self.client.http.url("/words/add");
        Ok(self.client.http.post(&url, Some(&body)).await?)
    }

    /// Grammar data of a word. Empty lists mean generation has not run yet.
    pub async fn inflections(&self, word_id: &WordId) -> Result<Inflections, SdkError> {
        let url = self
            .client
            .http
            .url(&format!("/words/{}/inflections", segment(word_id.as_str())));
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn list(&self, params: &WordListParams) -> Result<Vec<Word>, SdkError> {
        let params = params.normalized();
        let url = with_query(
            self.client.http.url("/words"),
            &[
                ("limit", Some(params.limit.to_string())),
                ("offset", params.offset.map(|o| o.to_string())),
                ("word_type", params.word_type.map(|t| t.as_str().to_string())),
                ("search", params.search),
            ],
        );
        let rows: Vec<WordResponse> = self.client.http.get(&url).await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| match Word::try_from(row) {
                Ok(word) => Some(word),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping invalid word row");
                    None
                }
            })
            .collect())
    }

    /// Import `[finnish, danish, english, word_type]` rows. Per-row failures are
    /// reported in the result.
    pub async fn bulk_add(&self, rows: Vec<Vec<String>>) -> Result<BulkAddResult, SdkError> {
        if rows.is_empty() {
            return Err(SdkError::Validation("no rows to import".to_string()));
        }
        let url = self.client.http.url("/words/bulk-add");
        let body = BulkAddRequest { rows };
        Ok(self.client.http.post(&url, Some(&body)).await?)
    }

    pub async fn ai_definition(&self, word_id: &WordId) -> Result<AiDefinition, SdkError> {
        let url = self
            .client
            .http
            .url(&format!("/words/{}/ai-definition", segment(word_id.as_str())));
        Ok(self.client.http.get(&url).await?)
    }

    // ── Cached reads ─────────────────────────────────────────────────────

    /// Observe one page of the word list. Each distinct filter is its own entry.
    pub fn watch_list(&self, params: WordListParams) -> QueryObserver<Vec<Word>> {
        let params = params.normalized();
        let client = self.client.clone();
        self.client
            .queries
            .observe(keys::words(&params), move || {
                let client = client.clone();
                let params = params.clone();
                async move { client.words().list(&params).await }
            })
    }

    pub fn watch_inflections(&self, word_id: &WordId) -> QueryObserver<Inflections> {
        let client = self.client.clone();
        let id = word_id.clone();
        self.client
            .queries
            .observe(keys::inflections(word_id), move || {
                let client = client.clone();
                let id = id.clone();
                async move { client.words().inflections(&id).await }
            })
    }

    // ── Mutations ────────────────────────────────────────────────────────

    /// Adding a word changes every word list and the totals.
    pub fn add_mutation(&self) -> Mutation<AddWordResponse> {
        self.client
            .mutation(vec![keys::words_all(), keys::stats()])
    }

    pub fn bulk_add_mutation(&self) -> Mutation<BulkAddResult> {
        self.client
            .mutation(vec![keys::words_all(), keys::stats()])
    }
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
