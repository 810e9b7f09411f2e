//! Word frequency counting

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::tokenizer::{normalize, tokenize};

/// Occurrences of each lower-cased word in a text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordFrequencyTable {
    counts: HashMap<String, usize>,
}

impl WordFrequencyTable {
    /// Count for `word`, matched case-insensitively. Unseen words count 0.
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(&normalize(word)).copied().unwrap_or(0)
    }

    /// Sum of all counts (the number of tokens counted)
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct words
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent words, highest count first, ties alphabetical
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    fn increment(&mut self, word: &str) {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
    }
}

/// Build a frequency table from `text`, ignoring case
pub fn count_words(text: &str) -> WordFrequencyTable {
    let lowered = text.to_lowercase();
    let mut table = WordFrequencyTable::default();
    for word in tokenize(&lowered) {
        table.increment(word);
    }
    table
}
