//! Canonical query keys, one constructor per cached read.
//!
//! Mutations invalidate with the bare resource keys (`words_all()`,
//! `concepts()`, `stats()`) which prefix-match every parameterised variant.

use super::QueryKey;
use crate::domain::word::WordListParams;
use crate::shared::{ConceptId, UserId, WordId};

pub fn words(params: &WordListParams) -> QueryKey {
    let params = params.normalized();
    QueryKey::new("words")
        .with("limit", params.limit)
        .with_opt("offset", params.offset)
        .with_opt("word_type", params.word_type.map(|t| t.as_str()))
        .with_opt("search", params.search)
}

pub fn words_all() -> QueryKey {
    QueryKey::new("words")
}

pub fn inflections(word_id: &WordId) -> QueryKey {
    QueryKey::new("inflections").with("word", word_id)
}

pub fn user_words(user_id: &UserId) -> QueryKey {
    QueryKey::new("user_words").with("user", user_id)
}

pub fn concepts() -> QueryKey {
    QueryKey::new("concepts")
}

pub fn concept_page(limit: u32, offset: u32) -> QueryKey {
    concepts().with("limit", limit).with("offset", offset)
}

pub fn concept(id: &ConceptId) -> QueryKey {
    QueryKey::new("concept").with("id", id)
}

/// Every single-concept entry.
pub fn concept_details() -> QueryKey {
    QueryKey::new("concept")
}

pub fn stats() -> QueryKey {
    QueryKey::new("stats")
}

pub fn stats_chart(days: u32) -> QueryKey {
    QueryKey::new("stats_chart").with("days", days)
}

/// Every chart window.
pub fn stats_charts() -> QueryKey {
    QueryKey::new("stats_chart")
}

pub fn settings() -> QueryKey {
    QueryKey::new("settings")
}

pub fn exercise_history(limit: u32, offset: u32) -> QueryKey {
    QueryKey::new("exercise_history")
        .with("limit", limit)
        .with("offset", offset)
}

/// Every history page.
pub fn exercise_history_all() -> QueryKey {
    QueryKey::new("exercise_history")
}

pub fn lessons(difficulty: Option<&str>) -> QueryKey {
    QueryKey::new("lessons").with_opt("difficulty", difficulty)
}

pub fn progress(user_id: &UserId) -> QueryKey {
    QueryKey::new("progress").with("user", user_id)
}

pub fn health() -> QueryKey {
    QueryKey::new("health")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::word::WordType;

    #[test]
    fn test_search_and_type_are_distinct_entries() {
        let by_search = words(&WordListParams::default().search("kala"));
        let by_both = words(
            &WordListParams::default()
                .search("kala")
                .word_type(WordType::Noun),
        );
        assert_ne!(by_search, by_both);
        assert_eq!(by_both.param("word_type"), Some("noun"));
        assert!(by_search.matches(&words_all()));
        assert!(by_both.matches(&words_all()));
    }

    #[test]
    fn test_blank_search_shares_unfiltered_entry() {
        let blank = words(&WordListParams::default().search("  "));
        let none = words(&WordListParams::default());
        assert_eq!(blank, none);
    }

    #[test]
    fn test_concept_pages_invalidate_with_concepts() {
        assert!(concept_page(100, 0).matches(&concepts()));
        assert!(!concept(&ConceptId::from("c1")).matches(&concepts()));
    }
}
