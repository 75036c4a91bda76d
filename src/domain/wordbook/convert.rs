//! Conversion: wire wordbook types → domain types.

use super::wire::UserWordResponse;
use super::{UserWord, ValidationError};
use chrono::{DateTime, NaiveDateTime, Utc};

impl TryFrom<UserWordResponse> for UserWord {
    type Error = ValidationError;

    fn try_from(source: UserWordResponse) -> Result<Self, Self::Error> {
        let nested = source.word.unwrap_or_default();
        let word_id = source.word_id.or(nested.id);
        let id = source
            .id
            .or_else(|| word_id.as_ref().map(|w| w.to_string()))
            .unwrap_or_default();

        let finnish_word = source
            .finnish_word
            .or(nested.finnish_word)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        if finnish_word.is_empty() {
            return Err(ValidationError::MissingFinnish(id));
        }

        if !(0..=100).contains(&source.proficiency) {
            return Err(ValidationError::ProficiencyOutOfRange {
                id,
                proficiency: source.proficiency,
            });
        }

        let saved_at = parse_timestamp(&id, source.saved_at)?;
        let last_reviewed = parse_timestamp(&id, source.last_reviewed)?;

        Ok(UserWord {
            id,
            user_id: source.user_id,
            word_id,
            finnish_word,
            english_translation: source
                .english_translation
                .or(nested.english_translation)
                .unwrap_or_default(),
            status: source.status,
            proficiency: source.proficiency as u8,
            saved_at,
            last_reviewed,
            review_count: source.review_count,
        })
    }
}

/// RFC 3339, or the naive ISO form the backend writes for UTC timestamps.
fn parse_timestamp(id: &str, value: Option<String>) -> Result<Option<DateTime<Utc>>, ValidationError> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&value) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&value, fmt).ok())
        .map(|naive| Some(naive.and_utc()))
        .ok_or_else(|| ValidationError::BadTimestamp {
            id: id.to_string(),
            value,
        })
}
