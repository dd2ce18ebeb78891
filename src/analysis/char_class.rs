//! Character classification for text analysis.
//!
//! Every character in the input falls into exactly one of three buckets:
//! vowel, special symbol, or other. Vowels are the ASCII `aeiou` letters,
//! case-insensitive. Special symbols are characters that are neither
//! alphanumeric nor whitespace. Everything else (consonants, digits,
//! whitespace, non-ASCII letters) counts as other, so the three counters
//! always partition the input.

use serde::{Deserialize, Serialize};

/// Classification of a single character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII vowel (`a`, `e`, `i`, `o`, `u`, case-insensitive)
    Vowel,
    /// Neither alphanumeric nor whitespace
    Special,
    /// Any other character (consonants, digits, whitespace, ...)
    Other,
}

/// Classify a single character.
///
/// Alphanumeric is Unicode-aware, so letters from non-Latin scripts are
/// never treated as special symbols.
pub fn classify(c: char) -> CharClass {
    if matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u') {
        CharClass::Vowel
    } else if !c.is_alphanumeric() && !c.is_whitespace() {
        CharClass::Special
    } else {
        CharClass::Other
    }
}

/// Counters for the three character classes over one scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharClassCounts {
    /// Number of vowels
    pub vowels: u64,
    /// Number of special symbols
    pub specials: u64,
    /// Number of remaining characters
    pub others: u64,
}

impl CharClassCounts {
    /// Create zeroed counters.
    pub fn new() -> Self {
        CharClassCounts::default()
    }

    /// Record a single character in the matching bucket.
    pub fn record(&mut self, c: char) {
        match classify(c) {
            CharClass::Vowel => self.vowels += 1,
            CharClass::Special => self.specials += 1,
            CharClass::Other => self.others += 1,
        }
    }

    /// Count the classes of every character in `text`.
    pub fn scan(text: &str) -> Self {
        let mut counts = CharClassCounts::new();
        for c in text.chars() {
            counts.record(c);
        }
        counts
    }

    /// Total number of characters recorded.
    pub fn total(&self) -> u64 {
        self.vowels + self.specials + self.others
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_vowels() {
        for c in ['a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U'] {
            assert_eq!(classify(c), CharClass::Vowel, "vowel: {c}");
        }
    }

    #[test]
    fn test_classify_specials() {
        for c in [',', '!', '#', '@', '-', '(', ')'] {
            assert_eq!(classify(c), CharClass::Special, "special: {c}");
        }
    }

    #[test]
    fn test_classify_others() {
        // Consonants, digits, and whitespace all land in the other bucket.
        for c in ['b', 'Z', '7', ' ', '\t', '\n'] {
            assert_eq!(classify(c), CharClass::Other, "other: {c:?}");
        }
        // Non-ASCII letters are alphanumeric, so they are not special.
        assert_eq!(classify('é'), CharClass::Other);
        assert_eq!(classify('日'), CharClass::Other);
    }

    #[test]
    fn test_scan_partitions_input() {
        let text = "Hello, World!";
        let counts = CharClassCounts::scan(text);
        assert_eq!(counts.vowels, 3);
        assert_eq!(counts.specials, 2);
        assert_eq!(counts.total(), text.chars().count() as u64);
    }

    #[test]
    fn test_scan_empty() {
        let counts = CharClassCounts::scan("");
        assert_eq!(counts, CharClassCounts::default());
        assert_eq!(counts.total(), 0);
    }
}
