//! Word domain — vocabulary entries, lookups, inflections and bulk import.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::WordId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── WordType ────────────────────────────────────────────────────────────────

/// Part of speech of a vocabulary entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WordType {
    #[default]
    Noun,
    Verb,
    Adjective,
    Adverb,
    Phrase,
    Other,
}

impl WordType {
    pub const ALL: [WordType; 6] = [
        WordType::Noun,
        WordType::Verb,
        WordType::Adjective,
        WordType::Adverb,
        WordType::Phrase,
        WordType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WordType::Noun => "noun",
            WordType::Verb => "verb",
            WordType::Adjective => "adjective",
            WordType::Adverb => "adverb",
            WordType::Phrase => "phrase",
            WordType::Other => "other",
        }
    }

    /// Lenient parse: unknown parts of speech collapse into `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "noun" => WordType::Noun,
            "verb" => WordType::Verb,
            "adjective" | "adj" => WordType::Adjective,
            "adverb" | "adv" => WordType::Adverb,
            "phrase" => WordType::Phrase,
            _ => WordType::Other,
        }
    }
}

impl std::fmt::Display for WordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Word ────────────────────────────────────────────────────────────────────

/// A vocabulary entry in the spaced-repetition set.
///
/// `priority` is computed by the backend (lower = better known) and is never
/// written by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub finnish: String,
    pub danish: Option<String>,
    pub english: Option<String>,
    pub word_type: WordType,
    pub priority: f64,
    pub times_served: u32,
    pub last_score: Option<f64>,
}

/// Coarse bucket of `Word::priority` used for colouring rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityBand {
    Known,
    Learning,
    NeedsWork,
}

impl Word {
    pub fn priority_band(&self) -> PriorityBand {
        if self.priority <= 0.2 {
            PriorityBand::Known
        } else if self.priority <= 0.5 {
            PriorityBand::Learning
        } else {
            PriorityBand::NeedsWork
        }
    }
}

// ─── Lookup ──────────────────────────────────────────────────────────────────

/// A grammatical case form shown in lookup results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammaticalForm {
    pub case: String,
    pub finnish: String,
    pub english: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleSentence {
    pub finnish: String,
    pub english: String,
}

/// Result of a word lookup. Lives only in view state until saved to a wordbook.
#[derive(Debug, Clone, PartialEq)]
pub struct WordSearchResult {
    pub id: Option<WordId>,
    pub finnish_word: String,
    pub english_translation: String,
    pub part_of_speech: String,
    pub grammatical_forms: Vec<GrammaticalForm>,
    pub example_sentences: Vec<ExampleSentence>,
    pub ai_definition: Option<String>,
    pub frequency: Option<f64>,
}

/// AI definition + examples for a stored word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiDefinition {
    pub word_id: WordId,
    pub finnish_word: String,
    #[serde(default)]
    pub ai_definition: Option<String>,
    #[serde(default)]
    pub ai_examples: Vec<ExampleSentence>,
}

// ─── Add / inflections ───────────────────────────────────────────────────────

/// Input for adding a single word.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct NewWord {
    pub finnish: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub danish: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    pub word_type: WordType,
}

impl NewWord {
    pub fn new(finnish: &str, word_type: WordType) -> Self {
        Self {
            finnish: finnish.to_string(),
            word_type,
            ..Self::default()
        }
    }

    pub fn danish(mut self, danish: &str) -> Self {
        self.danish = Some(danish.to_string());
        self
    }

    pub fn english(mut self, english: &str) -> Self {
        self.english = Some(english.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddWordStatus {
    Created,
    Exists,
}

/// Counts reported when the backend generated grammar data on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectionCounts {
    #[serde(default)]
    pub inflections: u32,
    #[serde(default)]
    pub verb_forms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddWordResponse {
    pub status: AddWordStatus,
    pub word_id: WordId,
    pub finnish: String,
    /// Only present when the backend has an AI integration configured.
    #[serde(default)]
    pub inflections_generated: Option<InflectionCounts>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflectionRow {
    pub case_name: String,
    pub singular: String,
    pub plural: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbFormRow {
    pub form_name: String,
    pub form_value: String,
    pub tense: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Grammar data of a word. Both lists may be empty while generation is pending.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Inflections {
    #[serde(default)]
    pub inflections: Vec<InflectionRow>,
    #[serde(default)]
    pub verb_forms: Vec<VerbFormRow>,
}

impl Inflections {
    pub fn is_empty(&self) -> bool {
        self.inflections.is_empty() && self.verb_forms.is_empty()
    }
}

// ─── Listing ─────────────────────────────────────────────────────────────────

pub const DEFAULT_LIST_LIMIT: u32 = 200;

/// Server-side filters for the word list. Every field is part of the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordListParams {
    pub limit: u32,
    pub offset: Option<u32>,
    pub word_type: Option<WordType>,
    pub search: Option<String>,
}

impl Default for WordListParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            offset: None,
            word_type: None,
            search: None,
        }
    }
}

impl WordListParams {
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn word_type(mut self, word_type: WordType) -> Self {
        self.word_type = Some(word_type);
        self
    }

    pub fn search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    /// Trimmed search text; blank searches are dropped.
    pub fn normalized(&self) -> Self {
        Self {
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            ..self.clone()
        }
    }
}

// ─── Bulk import ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkRowError {
    pub row: u32,
    #[serde(default)]
    pub word: String,
    pub error: String,
}

/// Outcome of a bulk import. Row failures are data, not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BulkAddResult {
    #[serde(default)]
    pub created: u32,
    #[serde(default)]
    pub exists: u32,
    #[serde(default)]
    pub errors: Vec<BulkRowError>,
}

impl BulkAddResult {
    /// Number of rows the backend accounted for.
    pub fn classified(&self) -> usize {
        self.created as usize + self.exists as usize + self.errors.len()
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Word {0}: missing Finnish text")]
    MissingFinnish(String),
    #[error("Word {id}: priority {priority} outside [0, 1]")]
    PriorityOutOfRange { id: String, priority: f64 },
    #[error("Word {id}: last score {score} outside [0, 10]")]
    ScoreOutOfRange { id: String, score: f64 },
}
