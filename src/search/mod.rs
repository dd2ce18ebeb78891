//! Regex search over a text buffer.
//!
//! A [`RegexSearcher`] compiles a user-supplied pattern once and can then
//! enumerate all non-overlapping matches in any text, left to right, with
//! their byte offsets. Compilation failure is a [`StyloError::Pattern`]
//! and produces no partial results; a search that finds nothing is an
//! ordinary empty [`MatchResult`], distinct from an error.
//!
//! # Examples
//!
//! ```
//! use stylo::search::RegexSearcher;
//!
//! let searcher = RegexSearcher::new(r"\d+").unwrap();
//! let result = searcher.search("room 12, floor 3");
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result.matches()[0].text, "12");
//! assert_eq!(result.matches()[0].start, 5);
//! ```

use regex::Regex;

use crate::error::{Result, StyloError};

/// A single match: the matched substring and its zero-based byte offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegexMatch {
    /// The matched substring
    pub text: String,
    /// Byte offset of the match start in the searched text
    pub start: usize,
}

/// The ordered matches from one search invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    pattern: String,
    matches: Vec<RegexMatch>,
}

impl MatchResult {
    /// The pattern this result was produced from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The matches in scan order.
    pub fn matches(&self) -> &[RegexMatch] {
        &self.matches
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Check whether no matches were found.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Iterate over the matches in scan order.
    pub fn iter(&self) -> std::slice::Iter<'_, RegexMatch> {
        self.matches.iter()
    }
}

/// A compiled search pattern.
#[derive(Clone, Debug)]
pub struct RegexSearcher {
    pattern: Regex,
}

impl RegexSearcher {
    /// Compile a pattern.
    ///
    /// Returns [`StyloError::Pattern`] if the pattern is malformed.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| StyloError::pattern(format!("invalid regular expression: {e}")))?;

        Ok(RegexSearcher { pattern: regex })
    }

    /// Get the pattern string this searcher was compiled from.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Find all non-overlapping matches in `text`, left to right.
    ///
    /// Zero-length matches advance the scan position, so the search always
    /// terminates.
    pub fn search(&self, text: &str) -> MatchResult {
        let matches = self
            .pattern
            .find_iter(text)
            .map(|mat| RegexMatch {
                text: mat.as_str().to_string(),
                start: mat.start(),
            })
            .collect();

        MatchResult {
            pattern: self.pattern.as_str().to_string(),
            matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_occurrence_is_found() {
        let searcher = RegexSearcher::new("a").unwrap();
        let result = searcher.search("aaa");

        assert_eq!(result.len(), 3);
        let starts: Vec<usize> = result.iter().map(|m| m.start).collect();
        assert_eq!(starts, vec![0, 1, 2]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RegexSearcher::new("(").unwrap_err();
        assert!(err.is_pattern_error());
    }

    #[test]
    fn test_no_matches_is_not_an_error() {
        let searcher = RegexSearcher::new("xyz").unwrap();
        let result = searcher.search("abc");
        assert!(result.is_empty());
    }

    #[test]
    fn test_zero_length_matches_terminate() {
        let searcher = RegexSearcher::new("b*").unwrap();
        let result = searcher.search("ab");

        // One empty match before 'a', one "b" match, one empty match at the end.
        assert_eq!(result.len(), 3);
        assert_eq!(result.matches()[1].text, "b");
    }

    #[test]
    fn test_matches_are_non_overlapping() {
        let searcher = RegexSearcher::new("aa").unwrap();
        let result = searcher.search("aaaa");

        assert_eq!(result.len(), 2);
        let starts: Vec<usize> = result.iter().map(|m| m.start).collect();
        assert_eq!(starts, vec![0, 2]);
    }

    #[test]
    fn test_pattern_accessors() {
        let searcher = RegexSearcher::new(r"\w+").unwrap();
        assert_eq!(searcher.pattern(), r"\w+");
        assert_eq!(searcher.search("hi").pattern(), r"\w+");
    }
}
