//! Sentence segmentation over normalized text.

use serde::Serialize;

/// A sentence in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Position among the kept sentences.
    pub index: usize,
    pub text: String,
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split at a sentence-ending mark immediately followed by whitespace.
///
/// The mark stays with the sentence it ends. Fragments are trimmed and those
/// shorter than `min_len` chars are dropped.
pub fn split_sentences(text: &str, min_len: usize) -> Vec<Sentence> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }
        if let Some(&(_, next)) = chars.peek() {
            if next.is_whitespace() {
                let end = i + c.len_utf8();
                fragments.push(&text[start..end]);
                start = end;
            }
        }
    }
    fragments.push(&text[start..]);

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|s| s.chars().count() >= min_len)
        .enumerate()
        .map(|(index, s)| Sentence {
            index,
            text: s.to_string(),
        })
        .collect()
}
