//! The analytics engine facade.
//!
//! [`AnalyticsEngine`] wires the analysis pipeline into the frequency
//! tables and exposes the two core operations: [`AnalyticsEngine::analyze`]
//! and [`AnalyticsEngine::search`]. Both are pure, synchronous
//! computations over an immutable input; the engine holds no mutable
//! state, so one instance can serve any number of invocations (or
//! threads) without locking.
//!
//! One-shot callers can use the free functions [`analyze`] and [`search`].
//!
//! # Examples
//!
//! ```
//! use stylo::engine::AnalyticsEngine;
//!
//! let engine = AnalyticsEngine::new();
//!
//! let report = engine.analyze("Hello, World!").unwrap();
//! assert_eq!(report.classes().vowels, 3);
//! assert_eq!(report.words().count("hello"), 1);
//!
//! let result = engine.search("Hello, World!", r"o\w+").unwrap();
//! assert_eq!(result.len(), 1);
//! assert_eq!(result.matches()[0].text, "orld");
//! ```

use crate::analysis::{Analyzer, CharClassCounts, WordAnalyzer};
use crate::error::Result;
use crate::frequency::{LetterFrequencyTable, WordFrequencyTable};
use crate::report::AnalysisReport;
use crate::search::{MatchResult, RegexSearcher};

/// The text analytics engine.
///
/// Holds the word-analysis pipeline; character classification and letter
/// counting share a single scan over the input.
#[derive(Clone, Default)]
pub struct AnalyticsEngine {
    analyzer: WordAnalyzer,
}

impl AnalyticsEngine {
    /// Create an engine with the standard word pipeline.
    pub fn new() -> Self {
        AnalyticsEngine {
            analyzer: WordAnalyzer::new(),
        }
    }

    /// Analyze a text buffer into an [`AnalysisReport`].
    ///
    /// Succeeds for every input, including empty text; all counters and
    /// tables degrade to zero/empty. The `Result` is only signature
    /// plumbing for the pipeline traits.
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        let mut classes = CharClassCounts::new();
        let mut letters = LetterFrequencyTable::new();
        for c in text.chars() {
            classes.record(c);
            letters.record(c);
        }

        let mut words = WordFrequencyTable::new();
        for token in self.analyzer.analyze(text)? {
            words.record(&token.text);
        }

        Ok(AnalysisReport::new(
            classes,
            text.to_string(),
            letters,
            words,
        ))
    }

    /// Search a text buffer for all matches of `pattern`.
    ///
    /// Fails only with [`StyloError::Pattern`](crate::error::StyloError)
    /// when the pattern does not compile; finding nothing is an ordinary
    /// empty result.
    pub fn search(&self, text: &str, pattern: &str) -> Result<MatchResult> {
        let searcher = RegexSearcher::new(pattern)?;
        Ok(searcher.search(text))
    }
}

/// Analyze `text` with a default engine.
pub fn analyze(text: &str) -> Result<AnalysisReport> {
    AnalyticsEngine::new().analyze(text)
}

/// Search `text` for `pattern` with a default engine.
pub fn search(text: &str, pattern: &str) -> Result<MatchResult> {
    AnalyticsEngine::new().search(text, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_hello_world() {
        let report = analyze("Hello, World!").unwrap();

        assert_eq!(report.classes().vowels, 3);
        assert_eq!(report.classes().specials, 2);

        let letters = report.letters();
        assert_eq!(letters.count('h'), 1);
        assert_eq!(letters.count('e'), 1);
        assert_eq!(letters.count('l'), 3);
        assert_eq!(letters.count('o'), 2);
        assert_eq!(letters.count('w'), 1);
        assert_eq!(letters.count('r'), 1);
        assert_eq!(letters.count('d'), 1);
        assert_eq!(letters.count('z'), 0);
        assert_eq!(letters.total(), 10);

        assert_eq!(report.words().count("hello"), 1);
        assert_eq!(report.words().count("world"), 1);
        assert_eq!(report.words().len(), 2);
    }

    #[test]
    fn test_analyze_empty_text() {
        let report = analyze("").unwrap();
        assert_eq!(report.classes().total(), 0);
        assert_eq!(report.letters().total(), 0);
        assert!(report.words().is_empty());
        assert_eq!(report.text(), "");
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let text = "the cat and the hat";
        let first = analyze(text).unwrap();
        let second = analyze(text).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_letter_sum_property() {
        let text = "Mixed 123 content, with CAPS and 日本語 text!";
        let report = analyze(text).unwrap();
        let ascii_letters = text.chars().filter(|c| c.is_ascii_alphabetic()).count() as u64;
        assert_eq!(report.letters().total(), ascii_letters);
    }

    #[test]
    fn test_class_partition_property() {
        let text = "a!? bc\n42 é日";
        let report = analyze(text).unwrap();
        assert_eq!(report.classes().total(), text.chars().count() as u64);
    }

    #[test]
    fn test_search_delegates_to_searcher() {
        let engine = AnalyticsEngine::new();
        let result = engine.search("aaa", "a").unwrap();
        assert_eq!(result.len(), 3);

        let err = engine.search("aaa", "(").unwrap_err();
        assert!(err.is_pattern_error());
    }
}
