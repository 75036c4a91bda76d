//! Concept domain — grammatical concepts exercised alongside words.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::ConceptId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A grammatical concept, e.g. "Partitive case".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub id: ConceptId,
    pub name: String,
    pub description: Option<String>,
    pub tags: BTreeSet<String>,
    pub priority: Option<f64>,
    pub times_served: Option<u32>,
    pub last_score: Option<f64>,
    /// Free-form example payload, passed through untouched.
    pub examples: Option<serde_json::Value>,
}

impl From<wire::ConceptResponse> for Concept {
    fn from(source: wire::ConceptResponse) -> Self {
        Self {
            id: source.id,
            name: source.name,
            description: source.description.filter(|d| !d.is_empty()),
            tags: source
                .tags
                .unwrap_or_default()
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            priority: source.priority,
            times_served: source.times_served,
            last_score: source.last_score,
            examples: source.examples.filter(|e| !e.is_null()),
        }
    }
}

/// Input for creating a concept.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NewConcept {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

impl NewConcept {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.insert(tag.to_string());
        self
    }
}

/// Partial update. Only set fields are sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ConceptPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
}

impl ConceptPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.tags.is_none()
            && self.priority.is_none()
    }
}

/// Split a comma-separated tag field into a tag set.
pub fn parse_tags(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_concept_from_list_row() {
        let resp: wire::ConceptResponse = serde_json::from_value(json!({
            "id": "c1",
            "name": "Partitive case",
            "description": "",
            "tags": ["case", " grammar ", ""],
            "priority": 0.7,
            "times_served": 3,
            "examples": null
        }))
        .unwrap();
        let concept = Concept::from(resp);
        assert_eq!(concept.description, None);
        assert_eq!(concept.tags.len(), 2);
        assert!(concept.tags.contains("grammar"));
        assert!(concept.examples.is_none());
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = ConceptPatch {
            description: Some("Used for partial objects".to_string()),
            ..ConceptPatch::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"description": "Used for partial objects"})
        );
        assert!(ConceptPatch::default().is_empty());
    }

    #[test]
    fn test_parse_tags() {
        let tags = parse_tags("case, grammar,,case ");
        assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["case", "grammar"]);
    }
}
