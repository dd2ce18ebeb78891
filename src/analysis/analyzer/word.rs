//! Word analyzer: the standard candidate-word pipeline.
//!
//! Splits on whitespace, strips every non-ASCII-letter character,
//! lowercases, and drops tokens that became empty. The output is exactly
//! the set of normalized words the word-frequency table counts.
//!
//! # Examples
//!
//! ```
//! use stylo::analysis::analyzer::{Analyzer, WordAnalyzer};
//!
//! let analyzer = WordAnalyzer::new();
//! let words: Vec<String> = analyzer
//!     .analyze("Hello, World! ... 42")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(words, ["hello", "world"]);
//! ```

use std::sync::Arc;

use super::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{AlphaFilter, Filter, LowercaseFilter, RemoveEmptyFilter};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// An analyzer that combines a tokenizer with a chain of filters.
///
/// The default construction is the word pipeline: whitespace tokenizer,
/// alpha filter, lowercase filter, remove-empty filter. Custom pipelines
/// can be built with [`WordAnalyzer::with_tokenizer`] and
/// [`WordAnalyzer::add_filter`].
#[derive(Clone)]
pub struct WordAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl WordAnalyzer {
    /// Create the standard word pipeline.
    pub fn new() -> Self {
        WordAnalyzer::with_tokenizer(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(AlphaFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
    }

    /// Create an analyzer with the given tokenizer and no filters.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        WordAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Default for WordAnalyzer {
    fn default() -> Self {
        WordAnalyzer::new()
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
