//! Word frequency table implementation.
//!
//! Counts normalized words (lowercase ASCII letters only) and remembers
//! the rank at which each word was first seen. Sorted listings order by
//! count descending with ties broken by first occurrence, an explicit
//! comparator so the ordering does not depend on any library's sort
//! stability.

use ahash::AHashMap;

/// Per-word bookkeeping: occurrence count and first-seen rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WordStats {
    count: u64,
    first_seen: usize,
}

/// A table mapping normalized words to occurrence counts.
///
/// Callers record words that are already normalized (the word analyzer's
/// output); empty strings are ignored rather than counted under an empty
/// key.
///
/// # Examples
///
/// ```
/// use stylo::frequency::WordFrequencyTable;
///
/// let mut table = WordFrequencyTable::new();
/// for word in ["to", "be", "or", "not", "to", "be"] {
///     table.record(word);
/// }
///
/// assert_eq!(table.count("to"), 2);
/// assert_eq!(table.sorted_entries()[0], ("to".to_string(), 2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    words: AHashMap<String, WordStats>,
}

impl WordFrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        WordFrequencyTable::default()
    }

    /// Record one occurrence of a normalized word.
    ///
    /// Empty words are ignored.
    pub fn record(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let next_rank = self.words.len();
        self.words
            .entry(word.to_string())
            .and_modify(|stats| stats.count += 1)
            .or_insert(WordStats {
                count: 1,
                first_seen: next_rank,
            });
    }

    /// Get the count for a word, zero if absent.
    pub fn count(&self, word: &str) -> u64 {
        self.words.get(word).map_or(0, |stats| stats.count)
    }

    /// Number of distinct words in the table.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of all word counts.
    pub fn total(&self) -> u64 {
        self.words.values().map(|stats| stats.count).sum()
    }

    /// All entries sorted by count descending, ties by first occurrence.
    pub fn sorted_entries(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(&String, &WordStats)> = self.words.iter().collect();
        entries.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        entries
            .into_iter()
            .map(|(word, stats)| (word.clone(), stats.count))
            .collect()
    }

    /// The `n` most frequent entries, same ordering as
    /// [`sorted_entries`](Self::sorted_entries). Does not mutate the table.
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries = self.sorted_entries();
        entries.truncate(n);
        entries
    }
}
