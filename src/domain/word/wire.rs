//! Wire types for word responses (REST).

use super::{ExampleSentence, GrammaticalForm};
use crate::shared::WordId;
use serde::{Deserialize, Serialize};

/// Raw row from `GET /words`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordResponse {
    pub id: WordId,
    #[serde(default)]
    pub finnish: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danish: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times_served: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_score: Option<f64>,
}

/// Raw response of `POST /words/search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordSearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<WordId>,
    pub finnish_word: String,
    #[serde(default)]
    pub english_translation: String,
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grammatical_forms: Option<Vec<GrammaticalForm>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_sentences: Option<Vec<ExampleSentence>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
}

/// Body of `POST /words/bulk-add`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkAddRequest {
    pub rows: Vec<Vec<String>>,
}
