//! Extractive summarization by average term frequency.
//!
//! Each sentence scores the summed document frequency of its tokens divided
//! by its token count (plus a small epsilon). The best sentences are returned
//! in their original order.

use crate::frequency::{tokenize, FrequencyTable};
use crate::sentences::Sentence;

/// Fraction of the document's sentences kept before the cap applies.
const SUMMARY_RATIO: f64 = 0.2;

/// Score of every sentence, in sentence order.
pub fn score_sentences(sentences: &[Sentence], table: &FrequencyTable, epsilon: f64) -> Vec<f64> {
    sentences
        .iter()
        .map(|sentence| {
            let tokens = tokenize(&sentence.text);
            let total: usize = tokens.iter().map(|t| table.count(t)).sum();
            total as f64 / (tokens.len() as f64 + epsilon)
        })
        .collect()
}

/// Number of sentences to keep out of `sentence_count`.
pub fn selection_size(sentence_count: usize, max_sentences: usize) -> usize {
    if sentence_count == 0 {
        return 0;
    }
    let by_ratio = (sentence_count as f64 * SUMMARY_RATIO).floor() as usize;
    max_sentences.min(by_ratio.max(1))
}

/// Indices of the `k` highest scores, returned in ascending index order.
/// Equal scores prefer the earlier sentence.
pub fn select_top(scores: &[f64], k: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    // Stable sort keeps lower indices first among equal scores.
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order.truncate(k);
    order.sort_unstable();
    order
}

/// Build the summary text from already segmented sentences.
pub fn summarize(
    sentences: &[Sentence],
    table: &FrequencyTable,
    max_sentences: usize,
    epsilon: f64,
) -> String {
    if sentences.is_empty() {
        return String::new();
    }

    let scores = score_sentences(sentences, table, epsilon);
    let k = selection_size(sentences.len(), max_sentences);

    select_top(&scores, k)
        .into_iter()
        .map(|i| sentences[i].text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
