//! Stopword set shared by every pipeline invocation.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

/// Common English words excluded from frequency scoring.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "a", "an", "in", "on", "and", "or", "of", "to", "is", "are", "was", "were", "be",
    "as", "for", "with", "that", "by", "from", "at", "this", "it", "its", "their", "there",
    "which", "we", "you", "they", "he", "she", "but", "about", "into", "than", "then", "so",
    "such", "can", "could", "may", "might", "must", "should", "have", "has", "had", "not",
    "no", "yes", "if", "when", "where", "who", "whom", "what", "why", "how",
];

static DEFAULT_SET: Lazy<StopwordSet> =
    Lazy::new(|| StopwordSet::from_words(DEFAULT_STOPWORDS.iter().copied()));

/// Read-only set of lowercase stopwords.
///
/// Cloning shares the underlying set; there is no way to mutate it after
/// construction.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: Arc<HashSet<String>>,
}

impl StopwordSet {
    /// Build a set from arbitrary words. Entries are trimmed and lower-cased;
    /// blank entries are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words: Arc::new(words),
        }
    }

    /// An empty set (no filtering).
    pub fn empty() -> Self {
        Self {
            words: Arc::new(HashSet::new()),
        }
    }

    /// Expects an already lower-cased token.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        DEFAULT_SET.clone()
    }
}

impl Serialize for StopwordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut sorted: Vec<&String> = self.words.iter().collect();
        sorted.sort();
        serializer.collect_seq(sorted)
    }
}
