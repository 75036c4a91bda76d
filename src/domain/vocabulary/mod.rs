//! Vocabulary domain — curated word lists attached to lessons.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

/// Difficulty tier of lessons and vocabulary lists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Elementary,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Elementary => "elementary",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyWord {
    #[serde(default)]
    pub id: Option<String>,
    pub finnish: String,
    pub english: String,
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub example_sentence: Option<String>,
    #[serde(default)]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyList {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub words: Vec<VocabularyWord>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub lesson_id: Option<String>,
}
