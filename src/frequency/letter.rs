//! Letter frequency table implementation.
//!
//! A fixed 26-bucket table over the ASCII letters `a`–`z`,
//! case-insensitive. Alphabetic characters outside that range are skipped,
//! never bucketed, so the bucket index is always valid and the table sum
//! always equals the number of ASCII alphabetic characters scanned.

use serde::{Deserialize, Serialize};

/// Number of buckets in the table, one per ASCII letter.
pub const ALPHABET_LEN: usize = 26;

/// Frequency counts for the 26 case-insensitive ASCII letters.
///
/// Iteration order is fixed `a`–`z` for reproducible output.
///
/// # Examples
///
/// ```
/// use stylo::frequency::LetterFrequencyTable;
///
/// let table = LetterFrequencyTable::scan("Abba");
/// assert_eq!(table.count('a'), 2);
/// assert_eq!(table.count('b'), 2);
/// assert_eq!(table.count('z'), 0);
/// assert_eq!(table.total(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterFrequencyTable {
    counts: [u64; ALPHABET_LEN],
}

impl LetterFrequencyTable {
    /// Create an empty table with all counts at zero.
    pub fn new() -> Self {
        LetterFrequencyTable::default()
    }

    /// Build a table by scanning every character of `text`.
    pub fn scan(text: &str) -> Self {
        let mut table = LetterFrequencyTable::new();
        for c in text.chars() {
            table.record(c);
        }
        table
    }

    /// Record one character.
    ///
    /// Only ASCII alphabetic characters are counted; everything else is
    /// ignored.
    pub fn record(&mut self, c: char) {
        if c.is_ascii_alphabetic() {
            let index = (c.to_ascii_lowercase() as u8 - b'a') as usize;
            self.counts[index] += 1;
        }
    }

    /// Get the count for a letter (case-insensitive).
    ///
    /// Returns zero for characters outside `a`–`z`.
    pub fn count(&self, letter: char) -> u64 {
        if letter.is_ascii_alphabetic() {
            self.counts[(letter.to_ascii_lowercase() as u8 - b'a') as usize]
        } else {
            0
        }
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterate over all 26 entries in `a`–`z` order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| ((b'a' + i as u8) as char, count))
    }

    /// Entries with a non-zero count, in `a`–`z` order.
    pub fn non_zero(&self) -> Vec<(char, u64)> {
        self.iter().filter(|&(_, count)| count > 0).collect()
    }
}
