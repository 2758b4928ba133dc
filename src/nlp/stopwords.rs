//! Stopword filtering.
//!
//! Uses the `stop-words` crate for the Italian base list, extended with
//! a fixed supplementary list of archaic forms, elisions, and
//! high-frequency function words that dominate fourteenth-century
//! Italian verse but carry no lexical content.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Archaic and corpus-specific function words not covered by the
/// modern Italian base list.
const DANTE_SUPPLEMENT: &[&str] = &[
    "altro", "tanto", "altri", "e", "ei", "lor", "giù", "com", "laltro", "elli", "te", "tal",
    "sù", "or", "ciò", "chè", "sé", "pur", "fa", "cha", "son", "disse", "vidi", "ché", "né",
    "però", "chio", "ancor", "qui", "pero", "qual", "già", "così", "là", "de", "poi", "quando",
    "quel", "sì", "gia", "me", "ne", "non", "che", "di", "la", "il", "le", "lo", "gli", "dei",
    "delle", "un", "una", "uno",
];

/// A filter for removing stopwords from a token stream.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::italian()
    }
}

impl StopwordFilter {
    /// Italian base list plus the supplementary archaic forms.
    pub fn italian() -> Self {
        let mut stopwords: FxHashSet<String> =
            get(LANGUAGE::Italian).iter().map(|s| s.to_string()).collect();
        stopwords.extend(DANTE_SUPPLEMENT.iter().map(|s| s.to_string()));
        Self { stopwords }
    }

    /// An empty filter (no tokens removed).
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Build a filter from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords to the filter.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check whether a token should be filtered out.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Returns `true` if the filter removes nothing.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
