//! Flashcard review — flip a card, mark it known or not, move on.

use crate::domain::vocabulary::VocabularyWord;
use crate::domain::word::Word;
use crate::domain::wordbook::UserWord;

#[derive(Debug, Clone, PartialEq)]
pub struct Flashcard {
    pub finnish: String,
    pub english: String,
    pub part_of_speech: Option<String>,
}

impl From<&VocabularyWord> for Flashcard {
    fn from(word: &VocabularyWord) -> Self {
        Self {
            finnish: word.finnish.clone(),
            english: word.english.clone(),
            part_of_speech: Some(word.part_of_speech.clone()).filter(|p| !p.is_empty()),
        }
    }
}

impl From<&UserWord> for Flashcard {
    fn from(word: &UserWord) -> Self {
        Self {
            finnish: word.finnish_word.clone(),
            english: word.english_translation.clone(),
            part_of_speech: None,
        }
    }
}

impl From<&Word> for Flashcard {
    fn from(word: &Word) -> Self {
        Self {
            finnish: word.finnish.clone(),
            english: word.english.clone().or_else(|| word.danish.clone()).unwrap_or_default(),
            part_of_speech: Some(word.word_type.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckSummary {
    pub known: usize,
    pub total: usize,
    /// Rounded percentage.
    pub accuracy: u32,
}

/// A run through a fixed list of cards.
#[derive(Debug, Clone)]
pub struct FlashcardDeck {
    cards: Vec<Flashcard>,
    index: usize,
    face: CardFace,
    known: usize,
    finished: bool,
}

impl FlashcardDeck {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        let finished = cards.is_empty();
        Self {
            cards,
            index: 0,
            face: CardFace::Front,
            known: 0,
            finished,
        }
    }

    pub fn current(&self) -> Option<&Flashcard> {
        if self.finished {
            return None;
        }
        self.cards.get(self.index)
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    /// 1-based position of the current card.
    pub fn position(&self) -> usize {
        (self.index + 1).min(self.cards.len())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn known(&self) -> usize {
        self.known
    }

    /// Share of the deck reached, counting the current card.
    pub fn progress_percent(&self) -> f64 {
        if self.cards.is_empty() {
            return 100.0;
        }
        self.position() as f64 / self.cards.len() as f64 * 100.0
    }

    pub fn flip(&mut self) {
        if self.finished {
            return;
        }
        self.face = match self.face {
            CardFace::Front => CardFace::Back,
            CardFace::Back => CardFace::Front,
        };
    }

    /// Record the answer and move to the next card, front side up.
    /// Returns the summary once the last card has been marked.
    pub fn mark(&mut self, known: bool) -> Option<DeckSummary> {
        if self.finished {
            return None;
        }
        if known {
            self.known += 1;
        }
        if self.index + 1 < self.cards.len() {
            self.index += 1;
            self.face = CardFace::Front;
            None
        } else {
            self.finished = true;
            Some(self.summary())
        }
    }

    pub fn summary(&self) -> DeckSummary {
        let total = self.cards.len();
        let accuracy = if total == 0 {
            0
        } else {
            (self.known as f64 / total as f64 * 100.0).round() as u32
        };
        DeckSummary {
            known: self.known,
            total,
            accuracy,
        }
    }

    /// Start over with the same cards.
    pub fn restart(&mut self) {
        *self = Self::new(std::mem::take(&mut self.cards));
    }
}
