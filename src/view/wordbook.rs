//! Wordbook screen — a user's saved words, filtered by status.

use super::ViewStatus;
use crate::client::LearningClient;
use crate::domain::wordbook::{UserWord, WordStatus};
use crate::error::SdkError;
use crate::mutation::Mutation;
use crate::query::QueryObserver;
use crate::shared::{UserId, WordId};
use std::sync::Arc;

/// Status filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(WordStatus),
}

impl StatusFilter {
    pub const TABS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(WordStatus::Recent),
        StatusFilter::Only(WordStatus::Learning),
        StatusFilter::Only(WordStatus::Mastered),
    ];

    pub fn accepts(&self, word: &UserWord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => word.status == *status,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub all: usize,
    pub recent: usize,
    pub learning: usize,
    pub mastered: usize,
}

impl StatusCounts {
    pub fn of(words: &[UserWord]) -> Self {
        let count = |s: WordStatus| words.iter().filter(|w| w.status == s).count();
        Self {
            all: words.len(),
            recent: count(WordStatus::Recent),
            learning: count(WordStatus::Learning),
            mastered: count(WordStatus::Mastered),
        }
    }

    pub fn for_filter(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.all,
            StatusFilter::Only(WordStatus::Recent) => self.recent,
            StatusFilter::Only(WordStatus::Learning) => self.learning,
            StatusFilter::Only(WordStatus::Mastered) => self.mastered,
        }
    }
}

pub struct WordbookView {
    client: LearningClient,
    user_id: UserId,
    words: QueryObserver<Vec<UserWord>>,
    filter: StatusFilter,
    status_update: Mutation<UserWord>,
    removal: Mutation<()>,
}

impl WordbookView {
    pub fn new(client: &LearningClient, user_id: UserId) -> Self {
        let wordbook = client.wordbook();
        Self {
            words: wordbook.watch(&user_id),
            status_update: wordbook.status_mutation(&user_id),
            removal: wordbook.remove_mutation(&user_id),
            client: client.clone(),
            user_id,
            filter: StatusFilter::All,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn status(&self) -> ViewStatus {
        ViewStatus::of(&self.words.state())
    }

    /// Wait for the initial load.
    pub async fn ready(&self) -> Result<(), Arc<SdkError>> {
        self.words.wait().await.map(|_| ())
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Every saved word, unfiltered.
    pub fn all_words(&self) -> Arc<Vec<UserWord>> {
        self.words.data().unwrap_or_default()
    }

    pub fn words(&self) -> Vec<UserWord> {
        self.all_words()
            .iter()
            .filter(|w| self.filter.accepts(w))
            .cloned()
            .collect()
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts::of(&self.all_words())
    }

    /// Placeholder text when the filtered list is empty.
    pub fn empty_message(&self) -> Option<String> {
        if !self.words().is_empty() {
            return None;
        }
        if self.all_words().is_empty() {
            Some("No words in your wordbook yet. Search for a word and add it!".to_string())
        } else {
            Some(format!("No words with status \"{}\"", self.filter.label()))
        }
    }

    /// Move a word to its next status, setting the matching proficiency.
    ///
    /// A word without an id fails inside the mutation, so `write_error` shows it.
    pub async fn advance(&self, word: &UserWord) -> Result<Arc<UserWord>, Arc<SdkError>> {
        let next = word.advance();
        let wordbook = self.client.wordbook();
        self.status_update
            .run(async {
                let word_id = word_id_of(word)?;
                tracing::debug!(word = %word_id, from = %word.status, to = %next.status, "advancing status");
                wordbook
                    .update_status(
                        &self.user_id,
                        word_id,
                        next.status,
                        Some(i32::from(next.proficiency)),
                    )
                    .await
            })
            .await
    }

    pub async fn remove(&self, word: &UserWord) -> Result<(), Arc<SdkError>> {
        let wordbook = self.client.wordbook();
        self.removal
            .run(async { wordbook.remove(&self.user_id, word_id_of(word)?).await })
            .await
            .map(|_| ())
    }

    pub fn is_updating(&self) -> bool {
        self.status_update.is_pending() || self.removal.is_pending()
    }

    /// Last failed write, for an inline error.
    pub fn write_error(&self) -> Option<String> {
        self.status_update
            .error()
            .or_else(|| self.removal.error())
            .map(|e| e.user_message())
    }
}

fn word_id_of(word: &UserWord) -> Result<&WordId, SdkError> {
    word.word_id
        .as_ref()
        .ok_or_else(|| SdkError::Validation(format!("\"{}\" has no word id", word.finnish_word)))
}
