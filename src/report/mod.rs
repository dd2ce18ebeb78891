//! Analysis report assembly and rendering.
//!
//! An [`AnalysisReport`] is the composed result of one analytics
//! invocation: character-class counts, the original text, the full letter
//! table, and the word table. It is immutable after creation and renders
//! into a fixed text layout via [`Display`](std::fmt::Display) /
//! [`AnalysisReport::render`]:
//!
//! ```text
//! Text Analysis Report:
//! Number of vowels: <n>
//! Number of special characters: <n>
//! Original Text: <text>
//!
//! Letter Frequency:
//! a: <n>
//! ...
//! z: <n>
//!
//! Word Frequency:
//! <word>: <n>
//! ```
//!
//! Rendering is pure; writing the result anywhere is a collaborator's
//! responsibility.

use std::fmt;

use crate::analysis::CharClassCounts;
use crate::frequency::{LetterFrequencyTable, WordFrequencyTable};

/// Number of words exposed to charting collaborators by
/// [`AnalysisReport::top_words`] by default.
pub const TOP_WORDS: usize = 10;

/// The composed, immutable result of one text analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisReport {
    classes: CharClassCounts,
    text: String,
    letters: LetterFrequencyTable,
    words: WordFrequencyTable,
}

impl AnalysisReport {
    /// Assemble a report from its parts.
    pub fn new(
        classes: CharClassCounts,
        text: String,
        letters: LetterFrequencyTable,
        words: WordFrequencyTable,
    ) -> Self {
        AnalysisReport {
            classes,
            text,
            letters,
            words,
        }
    }

    /// Character-class counters (vowels, specials, others).
    pub fn classes(&self) -> &CharClassCounts {
        &self.classes
    }

    /// The analyzed text, verbatim.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The full 26-entry letter frequency table.
    pub fn letters(&self) -> &LetterFrequencyTable {
        &self.letters
    }

    /// The word frequency table.
    pub fn words(&self) -> &WordFrequencyTable {
        &self.words
    }

    /// The `n` most frequent words, ordered like the report listing.
    ///
    /// The subset is computed fresh; the underlying table is not touched.
    pub fn top_words(&self, n: usize) -> Vec<(String, u64)> {
        self.words.top(n)
    }

    /// Letter entries with non-zero counts, for charting collaborators.
    pub fn letter_chart_entries(&self) -> Vec<(char, u64)> {
        self.letters.non_zero()
    }

    /// Render the report in its fixed text layout.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Text Analysis Report:")?;
        writeln!(f, "Number of vowels: {}", self.classes.vowels)?;
        writeln!(f, "Number of special characters: {}", self.classes.specials)?;
        writeln!(f, "Original Text: {}", self.text)?;

        writeln!(f, "\nLetter Frequency:")?;
        for (letter, count) in self.letters.iter() {
            writeln!(f, "{letter}: {count}")?;
        }

        writeln!(f, "\nWord Frequency:")?;
        for (word, count) in self.words.sorted_entries() {
            writeln!(f, "{word}: {count}")?;
        }

        Ok(())
    }
}
