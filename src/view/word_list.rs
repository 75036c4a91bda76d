//! Word list screen — every word in the spaced-repetition set.
//!
//! Search text and word type are server-side filters and part of the cache
//! key; sorting is local. Inflections are only observed for the expanded row.

use super::ViewStatus;
use crate::client::LearningClient;
use crate::domain::word::{Inflections, Word, WordListParams, WordType, DEFAULT_LIST_LIMIT};
use crate::query::QueryObserver;
use crate::shared::WordId;
use std::cmp::Ordering;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Highest priority (least known) first.
    #[default]
    Priority,
    Finnish,
}

/// At most one expanded row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedRow(Option<WordId>);

impl ExpandedRow {
    /// Expand `id`, or collapse it if it is already expanded. Returns whether it is now expanded.
    pub fn toggle(&mut self, id: &WordId) -> bool {
        if self.0.as_ref() == Some(id) {
            self.0 = None;
            false
        } else {
            self.0 = Some(id.clone());
            true
        }
    }

    pub fn get(&self) -> Option<&WordId> {
        self.0.as_ref()
    }

    pub fn is_expanded(&self, id: &WordId) -> bool {
        self.0.as_ref() == Some(id)
    }

    pub fn collapse(&mut self) {
        self.0 = None;
    }
}

/// What the expanded row shows.
#[derive(Debug, Clone, PartialEq)]
pub enum InflectionsView {
    Loading,
    Empty,
    Loaded(Arc<Inflections>),
    Error(String),
}

impl InflectionsView {
    pub const EMPTY_MESSAGE: &'static str = "No inflections yet";
}

pub struct WordListView {
    client: LearningClient,
    search: String,
    word_type: Option<WordType>,
    sort: SortBy,
    expanded: ExpandedRow,
    words: QueryObserver<Vec<Word>>,
    inflections: Option<QueryObserver<Inflections>>,
}

impl WordListView {
    pub fn new(client: &LearningClient) -> Self {
        Self {
            words: client.words().watch_list(WordListParams::default()),
            client: client.clone(),
            search: String::new(),
            word_type: None,
            sort: SortBy::default(),
            expanded: ExpandedRow::default(),
            inflections: None,
        }
    }

    pub fn params(&self) -> WordListParams {
        WordListParams {
            limit: DEFAULT_LIST_LIMIT,
            offset: None,
            word_type: self.word_type,
            search: Some(self.search.clone()),
        }
        .normalized()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
        self.reobserve();
    }

    pub fn word_type(&self) -> Option<WordType> {
        self.word_type
    }

    pub fn set_word_type(&mut self, word_type: Option<WordType>) {
        self.word_type = word_type;
        self.reobserve();
    }

    pub fn sort(&self) -> SortBy {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortBy) {
        self.sort = sort;
    }

    // Switch entries only when the key actually changed (e.g. not on a trailing space).
    fn reobserve(&mut self) {
        let params = self.params();
        if *self.words.key() != crate::query::keys::words(&params) {
            self.words = self.client.words().watch_list(params);
        }
    }

    pub fn status(&self) -> ViewStatus {
        ViewStatus::of(&self.words.state())
    }

    pub fn is_refreshing(&self) -> bool {
        self.words.state().is_fetching()
    }

    /// Current page, sorted.
    pub fn words(&self) -> Vec<Word> {
        let mut words = self
            .words
            .data()
            .map(|w| w.as_ref().clone())
            .unwrap_or_default();
        sort_words(&mut words, self.sort);
        words
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.status().is_ready() || !self.words().is_empty() {
            return None;
        }
        if self.params().search.is_some() || self.word_type.is_some() {
            Some("No words match these filters")
        } else {
            Some("No words yet")
        }
    }

    // ── Expanded row ─────────────────────────────────────────────────────

    pub fn expanded(&self) -> &ExpandedRow {
        &self.expanded
    }

    /// Expand a row (loading its inflections) or collapse it.
    pub fn toggle(&mut self, id: &WordId) {
        if self.expanded.toggle(id) {
            self.inflections = Some(self.client.words().watch_inflections(id));
        } else {
            self.inflections = None;
        }
    }

    pub fn inflections(&self) -> Option<InflectionsView> {
        let observer = self.inflections.as_ref()?;
        let state = observer.state();
        Some(match (&state.data, ViewStatus::of(&state)) {
            (Some(data), _) if data.is_empty() => InflectionsView::Empty,
            (Some(data), _) => InflectionsView::Loaded(data.clone()),
            (None, ViewStatus::Error(msg)) => InflectionsView::Error(msg),
            (None, _) => InflectionsView::Loading,
        })
    }

    /// Wait for the current word list request.
    pub async fn ready(&self) -> Result<(), Arc<crate::error::SdkError>> {
        self.words.wait().await.map(|_| ())
    }

    /// Wait for the expanded row's inflections.
    pub async fn inflections_ready(&self) -> Result<(), Arc<crate::error::SdkError>> {
        match &self.inflections {
            Some(observer) => observer.wait().await.map(|_| ()),
            None => Ok(()),
        }
    }
}

pub fn sort_words(words: &mut [Word], sort: SortBy) {
    match sort {
        SortBy::Priority => words.sort_by(|a, b| b.priority.total_cmp(&a.priority)),
        SortBy::Finnish => words.sort_by(|a, b| finnish_order(&a.finnish, &b.finnish)),
    }
}

/// Case-insensitive, with å, ä and ö after z as in the Finnish alphabet.
fn finnish_order(a: &str, b: &str) -> Ordering {
    fn rank(c: char) -> (u32, char) {
        match c {
            'å' => ('z' as u32 + 1, c),
            'ä' => ('z' as u32 + 2, c),
            'ö' => ('z' as u32 + 3, c),
            _ => (c as u32, c),
        }
    }
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.chars().map(rank).cmp(b.chars().map(rank))
}
