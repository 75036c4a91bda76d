//! Wordbook domain — a user's saved words and their learning status.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{UserId, WordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Learning status of a saved word.
///
/// Sent lowercase; both spellings are accepted from the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    #[default]
    #[serde(alias = "Recent", alias = "RECENT")]
    Recent,
    #[serde(alias = "Learning", alias = "LEARNING")]
    Learning,
    #[serde(alias = "Mastered", alias = "MASTERED")]
    Mastered,
}

impl WordStatus {
    pub const ALL: [WordStatus; 3] = [WordStatus::Recent, WordStatus::Learning, WordStatus::Mastered];

    /// Recent → Learning → Mastered → Recent.
    pub fn next(self) -> Self {
        match self {
            WordStatus::Recent => WordStatus::Learning,
            WordStatus::Learning => WordStatus::Mastered,
            WordStatus::Mastered => WordStatus::Recent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WordStatus::Recent => "recent",
            WordStatus::Learning => "learning",
            WordStatus::Mastered => "mastered",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WordStatus::Recent => "Recent",
            WordStatus::Learning => "Learning",
            WordStatus::Mastered => "Mastered",
        }
    }
}

impl std::fmt::Display for WordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Proficiency assigned when a word enters `Learning`.
pub const LEARNING_PROFICIENCY: u8 = 40;
/// Proficiency assigned when a word enters `Mastered`.
pub const MASTERED_PROFICIENCY: u8 = 80;

/// Result of clicking a word's status badge.
///
/// Moving back to `Recent` keeps the current proficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAdvance {
    pub status: WordStatus,
    pub proficiency: u8,
}

impl StatusAdvance {
    pub fn from(current: WordStatus, proficiency: u8) -> Self {
        let status = current.next();
        let proficiency = match status {
            WordStatus::Learning => LEARNING_PROFICIENCY,
            WordStatus::Mastered => MASTERED_PROFICIENCY,
            WordStatus::Recent => proficiency,
        };
        Self {
            status,
            proficiency,
        }
    }
}

/// A word saved in a user's wordbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWord {
    pub id: String,
    pub user_id: UserId,
    pub word_id: Option<WordId>,
    pub finnish_word: String,
    pub english_translation: String,
    pub status: WordStatus,
    /// 0..=100.
    pub proficiency: u8,
    pub saved_at: Option<DateTime<Utc>>,
    pub last_reviewed: Option<DateTime<Utc>>,
    pub review_count: u32,
}

impl UserWord {
    pub fn advance(&self) -> StatusAdvance {
        StatusAdvance::from(self.status, self.proficiency)
    }
}

/// Body of `PUT /words/:word/status/:user`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub status: WordStatus,
    /// Sent as given; the backend clamps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<i32>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Saved word {0}: missing Finnish text")]
    MissingFinnish(String),
    #[error("Saved word {id}: proficiency {proficiency} outside [0, 100]")]
    ProficiencyOutOfRange { id: String, proficiency: i64 },
    #[error("Saved word {id}: bad timestamp '{value}'")]
    BadTimestamp { id: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_cycle() {
        assert_eq!(WordStatus::Recent.next(), WordStatus::Learning);
        assert_eq!(WordStatus::Learning.next(), WordStatus::Mastered);
        assert_eq!(WordStatus::Mastered.next(), WordStatus::Recent);
    }

    #[test]
    fn test_status_advance_table() {
        assert_eq!(
            StatusAdvance::from(WordStatus::Recent, 0),
            StatusAdvance { status: WordStatus::Learning, proficiency: 40 }
        );
        assert_eq!(
            StatusAdvance::from(WordStatus::Learning, 55),
            StatusAdvance { status: WordStatus::Mastered, proficiency: 80 }
        );
        assert_eq!(
            StatusAdvance::from(WordStatus::Mastered, 90),
            StatusAdvance { status: WordStatus::Recent, proficiency: 90 }
        );
    }

    #[test]
    fn test_status_accepts_both_spellings() {
        let a: WordStatus = serde_json::from_str(r#""Learning""#).unwrap();
        let b: WordStatus = serde_json::from_str(r#""learning""#).unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), r#""learning""#);
    }

    #[test]
    fn test_status_update_omits_missing_proficiency() {
        let body = serde_json::to_value(StatusUpdate {
            status: WordStatus::Mastered,
            proficiency: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"status": "mastered"}));

        let body = serde_json::to_value(StatusUpdate {
            status: WordStatus::Learning,
            proficiency: Some(150),
        })
        .unwrap();
        assert_eq!(body["proficiency"], 150);
    }
}
