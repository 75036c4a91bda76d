//! Conversion: wire word types → domain types.

use super::wire;
use super::{ValidationError, Word, WordSearchResult, WordType};

/// Priority assumed for rows the scheduler has not ranked yet.
const UNRANKED_PRIORITY: f64 = 1.0;

impl TryFrom<wire::WordResponse> for Word {
    type Error = ValidationError;

    fn try_from(source: wire::WordResponse) -> Result<Self, Self::Error> {
        let id = source.id.to_string();

        let finnish = source.finnish.trim().to_string();
        if finnish.is_empty() {
            return Err(ValidationError::MissingFinnish(id));
        }

        let priority = source.priority.unwrap_or(UNRANKED_PRIORITY);
        if !(0.0..=1.0).contains(&priority) {
            return Err(ValidationError::PriorityOutOfRange { id, priority });
        }

        if let Some(score) = source.last_score {
            if !(0.0..=10.0).contains(&score) {
                return Err(ValidationError::ScoreOutOfRange { id, score });
            }
        }

        Ok(Word {
            id: source.id,
            finnish,
            danish: source.danish.filter(|s| !s.is_empty()),
            english: source.english.filter(|s| !s.is_empty()),
            word_type: source
                .word_type
                .as_deref()
                .map(WordType::parse)
                .unwrap_or(WordType::Other),
            priority,
            times_served: source.times_served.unwrap_or(0),
            last_score: source.last_score,
        })
    }
}

impl From<wire::WordSearchResponse> for WordSearchResult {
    fn from(source: wire::WordSearchResponse) -> Self {
        Self {
            id: source.id,
            finnish_word: source.finnish_word,
            english_translation: source.english_translation,
            part_of_speech: source.part_of_speech,
            grammatical_forms: source.grammatical_forms.unwrap_or_default(),
            example_sentences: source.example_sentences.unwrap_or_default(),
            ai_definition: source.ai_definition,
            frequency: source.frequency,
        }
    }
}
