//! Wire types for wordbook responses (REST).

use crate::shared::{UserId, WordId};
use serde::{Deserialize, Serialize};

/// Body of `POST /words/save`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveWordRequest {
    pub user_id: UserId,
    pub finnish_word: String,
}

/// The word embedded in a saved-word row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NestedWord {
    #[serde(default)]
    pub id: Option<WordId>,
    #[serde(default, alias = "finnish")]
    pub finnish_word: Option<String>,
    #[serde(default, alias = "english")]
    pub english_translation: Option<String>,
}

/// Raw saved-word row. Older backends send the word flat, newer ones nest it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserWordResponse {
    #[serde(default)]
    pub id: Option<String>,
    pub user_id: UserId,
    #[serde(default)]
    pub word_id: Option<WordId>,
    #[serde(default)]
    pub word: Option<NestedWord>,
    #[serde(default)]
    pub finnish_word: Option<String>,
    #[serde(default)]
    pub english_translation: Option<String>,
    pub status: super::WordStatus,
    #[serde(default)]
    pub proficiency: i64,
    #[serde(default, alias = "date_added")]
    pub saved_at: Option<String>,
    #[serde(default)]
    pub last_reviewed: Option<String>,
    #[serde(default)]
    pub review_count: u32,
}

/// Response of `DELETE /words/:word/:user`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RemoveResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
