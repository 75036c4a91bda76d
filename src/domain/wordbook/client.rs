//! Wordbook sub-client — save, list, status updates, removal.

use crate::client::LearningClient;
use crate::domain::wordbook::wire::{RemoveResponse, SaveWordRequest, UserWordResponse};
use crate::domain::wordbook::{self, StatusUpdate, UserWord, WordStatus};
use crate::error::SdkError;
use crate::http::client::{segment, with_query};
use crate::mutation::Mutation;
use crate::query::{keys, QueryObserver};
use crate::shared::{require_non_blank, UserId, WordId};

/// Sub-client for a user's saved words.
pub struct Wordbook<'a> {
    pub(crate) client: &'a LearningClient,
}

impl<'a> Wordbook<'a> {
    /// Save a word. Saving a word that is already in the wordbook returns the existing row.
    pub async fn save(&self, user_id: &UserId, finnish_word: &str) -> Result<UserWord, SdkError> {
        let body = SaveWordRequest {
            user_id: user_id.clone(),
            finnish_word: require_non_blank("finnish_word", finnish_word)?,
        };
        let url = self.client.http.url("/words/save");
        let resp: UserWordResponse = self.client.http.post(&url, Some(&body)).await?;
        to_domain(resp)
    }

    pub async fn user_words(
        &self,
        user_id: &UserId,
        status: Option<WordStatus>,
    ) -> Result<Vec<UserWord>, SdkError> {
        let url = with_query(
            self.client
                .http
                .url(&format!("/words/user-words/{}", segment(user_id.as_str()))),
            &[("status", status.map(|s| s.as_str().to_string()))],
        );
        let rows: Vec<UserWordResponse> = self.client.http.get(&url).await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| match to_domain(row) {
                Ok(word) => Some(word),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping invalid wordbook row");
                    None
                }
            })
            .collect())
    }

    /// Set a word's status. `proficiency` is sent as given; `None` leaves it unchanged.
    pub async fn update_status(
        &self,
        user_id: &UserId,
        word_id: &WordId,
        status: WordStatus,
        proficiency: Option<i32>,
    ) -> Result<UserWord, SdkError> {
        let url = self.client.http.url(&format!(
            "/words/{}/status/{}",
            segment(word_id.as_str()),
            segment(user_id.as_str())
        ));
        let body = StatusUpdate {
            status,
            proficiency,
        };
        let resp: UserWordResponse = self.client.http.put(&url, &body).await?;
        to_domain(resp)
    }

    /// Remove a word from the wordbook. The word itself stays in the global set.
    pub async fn remove(&self, user_id: &UserId, word_id: &WordId) -> Result<(), SdkError> {
        let url = self.client.http.url(&format!(
            "/words/{}/{}",
            segment(word_id.as_str()),
            segment(user_id.as_str())
        ));
        let _: Option<RemoveResponse> = self.client.http.delete(&url).await?;
        Ok(())
    }

    // ── Cached reads ─────────────────────────────────────────────────────

    pub fn watch(&self, user_id: &UserId) -> QueryObserver<Vec<UserWord>> {
        let client = self.client.clone();
        let user = user_id.clone();
        self.client
            .queries
            .observe(keys::user_words(user_id), move || {
                let client = client.clone();
                let user = user.clone();
                async move { client.wordbook().user_words(&user, None).await }
            })
    }

    // ── Mutations ────────────────────────────────────────────────────────

    /// A first save also changes the word totals.
    pub fn save_mutation(&self, user_id: &UserId) -> Mutation<UserWord> {
        self.client
            .mutation(vec![keys::user_words(user_id), keys::stats()])
    }

    pub fn status_mutation(&self, user_id: &UserId) -> Mutation<UserWord> {
        self.client.mutation(vec![keys::user_words(user_id)])
    }

    pub fn remove_mutation(&self, user_id: &UserId) -> Mutation<()> {
        self.client.mutation(vec![keys::user_words(user_id)])
    }
}

fn to_domain(resp: UserWordResponse) -> Result<UserWord, SdkError> {
    UserWord::try_from(resp)
        .map_err(|e: wordbook::ValidationError| SdkError::InvalidResponse(e.to_string()))
}
