//! Word search screen — look a word up, then save it to the wordbook.
//!
//! Lookups are one-off calls; the result lives here and is never cached.

use crate::client::LearningClient;
use crate::domain::word::WordSearchResult;
use crate::domain::wordbook::UserWord;
use crate::error::SdkError;
use crate::mutation::Mutation;
use crate::shared::UserId;
use std::sync::Arc;

pub struct WordSearchView {
    client: LearningClient,
    user_id: UserId,
    query: String,
    searching: bool,
    result: Option<WordSearchResult>,
    error: Option<String>,
    save: Mutation<UserWord>,
}

impl WordSearchView {
    pub fn new(client: &LearningClient, user_id: UserId) -> Self {
        Self {
            save: client.wordbook().save_mutation(&user_id),
            client: client.clone(),
            user_id,
            query: String::new(),
            searching: false,
            result: None,
            error: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
    }

    /// The search button is disabled for blank input.
    pub fn can_search(&self) -> bool {
        !self.searching && !self.query.trim().is_empty()
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn result(&self) -> Option<&WordSearchResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Run the lookup. A new search replaces the previous result or error.
    pub async fn search(&mut self) -> Result<(), SdkError> {
        if self.query.trim().is_empty() {
            return Err(SdkError::Validation("Enter a Finnish word to search".to_string()));
        }
        self.searching = true;
        self.error = None;
        let outcome = self.client.words().search(&self.query).await;
        self.searching = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(query = %self.query.trim(), error = %e, "word lookup failed");
                self.result = None;
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Save the current result to the wordbook.
    pub async fn save(&self) -> Result<Arc<UserWord>, Arc<SdkError>> {
        let wordbook = self.client.wordbook();
        self.save
            .run(async {
                let result = self
                    .result
                    .as_ref()
                    .ok_or_else(|| SdkError::Validation("nothing to save yet".to_string()))?;
                wordbook.save(&self.user_id, &result.finnish_word).await
            })
            .await
    }

    pub fn is_saving(&self) -> bool {
        self.save.is_pending()
    }

    /// Whether the current result has been saved.
    pub fn is_saved(&self) -> bool {
        match (&self.result, self.save.data()) {
            (Some(result), Some(saved)) => saved.finnish_word == result.finnish_word,
            _ => false,
        }
    }

    pub fn save_error(&self) -> Option<String> {
        self.save.error().map(|e| e.user_message())
    }
}
