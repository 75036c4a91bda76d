//! Progress domain — per-user lesson progress and totals.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::vocabulary::Difficulty;
use crate::shared::{LessonId, UserId};
use serde::{Deserialize, Serialize};

/// Overall progress of a user. New users get all-zero totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgress {
    pub user_id: UserId,
    #[serde(default)]
    pub total_lessons_completed: u32,
    #[serde(default)]
    pub total_exercises_completed: u32,
    /// 0..=100.
    #[serde(default)]
    pub total_accuracy: f64,
    #[serde(default)]
    pub current_difficulty: Option<Difficulty>,
    #[serde(default)]
    pub total_study_time_minutes: u32,
    #[serde(default)]
    pub last_studied: Option<String>,
    #[serde(default)]
    pub streak_days: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LessonProgressStatus {
    #[default]
    InProgress,
    Completed,
    Abandoned,
}

/// Progress record returned when a lesson is started or completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonProgress {
    #[serde(default)]
    pub id: Option<String>,
    pub user_id: UserId,
    pub lesson_id: LessonId,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub exercises_completed: u32,
    #[serde(default)]
    pub exercises_correct: u32,
    #[serde(default)]
    pub time_spent_seconds: u32,
    #[serde(default)]
    pub status: LessonProgressStatus,
}

/// Body of the lesson start/complete calls.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct LessonProgressRequest<'a> {
    pub user_id: &'a UserId,
}
