//! Wire types for concept responses (REST).

use crate::shared::ConceptId;
use serde::{Deserialize, Serialize};

/// Row from `GET /concepts` / `GET /concepts/:id`, and the partial row `POST /concepts` returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConceptResponse {
    pub id: ConceptId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub priority: Option<f64>,
    #[serde(default)]
    pub times_served: Option<u32>,
    #[serde(default)]
    pub last_score: Option<f64>,
    #[serde(default)]
    pub examples: Option<serde_json::Value>,
}

/// Response of `PUT /concepts/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConceptUpdated {
    pub id: ConceptId,
    pub name: String,
    #[serde(default)]
    pub status: String,
}

/// Response of `DELETE /concepts/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConceptDeleted {
    #[serde(default)]
    pub status: String,
    pub id: ConceptId,
}
