//! Lesson domain — structured lessons with grammar points and exercises.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::vocabulary::{Difficulty, VocabularyWord};
use crate::shared::LessonId;
use serde::{Deserialize, Serialize};

/// Lesson as listed, without content. Lists are ordered by `order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPreview {
    #[serde(default)]
    pub id: Option<LessonId>,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub order: i32,
    pub estimated_duration_minutes: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    MultipleChoice,
    FillInBlank,
    Translation,
    Listening,
    Speaking,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonExercise {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: ExerciseKind,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub grammar_points: Vec<String>,
    #[serde(default)]
    pub vocabulary: Vec<VocabularyWord>,
    #[serde(default)]
    pub exercises: Vec<LessonExercise>,
}

/// A full lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LessonId>,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub order: i32,
    pub content: LessonContent,
    pub estimated_duration_minutes: u32,
}

/// Response of `POST /lessons`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonCreated {
    pub id: LessonId,
    pub status: String,
}
