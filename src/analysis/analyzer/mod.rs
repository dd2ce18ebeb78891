//! Analyzer implementations that combine tokenizers and filters.

mod word;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that run a complete text-analysis pipeline.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// This runs the complete pipeline: tokenization followed by all
    /// configured filters.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub use word::WordAnalyzer;
