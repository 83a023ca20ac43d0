//! Key phrase ranking by term frequency.

use crate::frequency::FrequencyTable;

/// All terms, most frequent first. Equal counts keep the order in which the
/// terms first appeared in the text.
pub fn rank(table: &FrequencyTable) -> Vec<String> {
    let mut entries: Vec<(&str, usize, usize)> = table
        .iter()
        .map(|(term, stats)| (term, stats.count, stats.first_position))
        .collect();

    entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    entries.into_iter().map(|(term, _, _)| term.to_string()).collect()
}

/// The first `limit` ranked terms.
pub fn extract(table: &FrequencyTable, limit: usize) -> Vec<String> {
    let mut ranked = rank(table);
    ranked.truncate(limit);
    ranked
}
