//! Exercise domain — the next exercise batch, submitted scores and history.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::domain::concept::Concept;
use crate::domain::word::Word;
use crate::shared::{ConceptId, WordId};
use serde::{Deserialize, Serialize};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;
pub const DEFAULT_HISTORY_LIMIT: u32 = 20;

/// Score band used to colour history rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= 7.0 {
            ScoreBand::Good
        } else if score >= 4.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}

/// Words and concepts selected for the next exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct NextExercise {
    pub words: Vec<Word>,
    pub concepts: Vec<Concept>,
    pub level: i64,
    pub exercise_word_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordScore {
    pub word_id: WordId,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptScore {
    pub concept_id: ConceptId,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// Scored exercise, as submitted after grading.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ExerciseResult {
    pub exercise_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_sent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_feedback: Option<String>,
    pub word_scores: Vec<WordScore>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub concept_scores: Vec<ConceptScore>,
}

impl ExerciseResult {
    /// Every score must lie in `[0, 10]`.
    pub fn validate(&self) -> Result<(), String> {
        let in_range = |s: f64| (MIN_SCORE..=MAX_SCORE).contains(&s);
        if let Some(ws) = self.word_scores.iter().find(|ws| !in_range(ws.score)) {
            return Err(format!("word {} score {} outside [0, 10]", ws.word_id, ws.score));
        }
        if let Some(cs) = self.concept_scores.iter().find(|cs| !in_range(cs.score)) {
            return Err(format!("concept {} score {} outside [0, 10]", cs.concept_id, cs.score));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultAccepted {
    pub status: String,
    #[serde(default)]
    pub words_scored: u32,
    #[serde(default)]
    pub concepts_scored: u32,
}

/// One past exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistoryEntry {
    pub id: String,
    #[serde(default)]
    pub exercise_type: String,
    #[serde(default)]
    pub level_used: Option<i64>,
    #[serde(default)]
    pub prompt_sent: Option<String>,
    #[serde(default)]
    pub user_response: Option<String>,
    #[serde(default)]
    pub ai_feedback: Option<String>,
    #[serde(default)]
    pub word_scores: Vec<WordScore>,
    #[serde(default)]
    pub concept_scores: Vec<ConceptScore>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ExerciseHistoryEntry {
    /// Mean word score, if any word was scored.
    pub fn average_score(&self) -> Option<f64> {
        if self.word_scores.is_empty() {
            return None;
        }
        let sum: f64 = self.word_scores.iter().map(|s| s.score).sum();
        Some(sum / self.word_scores.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::of(7.0), ScoreBand::Good);
        assert_eq!(ScoreBand::of(6.9), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(4.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(3.9), ScoreBand::Poor);
    }

    #[test]
    fn test_result_validation() {
        let mut result = ExerciseResult {
            exercise_type: "translation".to_string(),
            word_scores: vec![WordScore {
                word_id: WordId::from("w1"),
                score: 7.5,
                feedback: None,
            }],
            ..ExerciseResult::default()
        };
        assert!(result.validate().is_ok());
        result.word_scores[0].score = 11.0;
        assert!(result.validate().is_err());
    }

    #[test]
    fn test_history_average() {
        let entry: ExerciseHistoryEntry = serde_json::from_value(serde_json::json!({
            "id": "e1",
            "exercise_type": "translation",
            "word_scores": [
                {"word_id": "w1", "score": 8},
                {"word_id": "w2", "score": 6}
            ],
            "concept_scores": []
        }))
        .unwrap();
        assert_eq!(entry.average_score(), Some(7.0));
    }
}
