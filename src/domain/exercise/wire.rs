//! Wire types for exercise responses (REST).

use crate::domain::concept::wire::ConceptResponse;
use crate::domain::word::wire::WordResponse;
use serde::{Deserialize, Serialize};

/// Raw response of `GET /exercise/next`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NextExerciseResponse {
    #[serde(default)]
    pub words: Vec<WordResponse>,
    #[serde(default)]
    pub concepts: Vec<ConceptResponse>,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub exercise_word_count: Option<u32>,
}
