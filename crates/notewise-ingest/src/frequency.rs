//! Term frequency table over the whole normalized text.

use std::collections::HashMap;

use notewise_core::StopwordSet;
use once_cell::sync::Lazy;
use regex::Regex;

/// Alphanumeric start, then alphanumerics, hyphens or apostrophes.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9][a-z0-9'\-]+").expect("token pattern is valid"));

/// Lower-case `text` and return every token of two or more characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Occurrence statistics for one term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermStats {
    pub count: usize,
    /// Ordinal of the first counted token for this term.
    pub first_position: usize,
}

/// Term → statistics for every non-stopword token.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    terms: HashMap<String, TermStats>,
}

impl FrequencyTable {
    pub fn build(text: &str, stopwords: &StopwordSet, min_token_len: usize) -> Self {
        let mut terms: HashMap<String, TermStats> = HashMap::new();
        let mut position = 0;

        for token in tokenize(text) {
            if token.chars().count() < min_token_len || stopwords.contains(&token) {
                continue;
            }
            terms
                .entry(token)
                .and_modify(|stats| stats.count += 1)
                .or_insert(TermStats {
                    count: 1,
                    first_position: position,
                });
            position += 1;
        }

        Self { terms }
    }

    /// Occurrences of `term`, 0 when absent.
    pub fn count(&self, term: &str) -> usize {
        self.terms.get(term).map(|s| s.count).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TermStats)> {
        self.terms.iter().map(|(term, stats)| (term.as_str(), *stats))
    }
}
