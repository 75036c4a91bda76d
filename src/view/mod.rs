//! View models — one per screen.
//!
//! Each view owns its ephemeral state (form inputs, filters, the expanded row)
//! plus the query observers and mutations it needs. Rendering is left to the
//! application; views only expose what to draw.

pub mod add_word;
pub mod bulk_import;
pub mod concepts;
pub mod dashboard;
pub mod flashcard;
pub mod word_list;
pub mod word_search;
pub mod wordbook;

use crate::query::QueryState;

/// What a view should render for its primary query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    /// The query failed and there is nothing cached to show.
    Error(String),
    Ready,
}

impl ViewStatus {
    /// Cached data wins over a failed refetch.
    pub fn of<T>(state: &QueryState<T>) -> Self {
        if state.data.is_some() {
            return ViewStatus::Ready;
        }
        match &state.error {
            Some(e) if state.is_error() => ViewStatus::Error(e.user_message()),
            _ => ViewStatus::Loading,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewStatus::Ready)
    }
}
