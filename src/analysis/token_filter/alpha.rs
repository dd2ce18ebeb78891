//! Alpha filter implementation.
//!
//! This module provides a filter that removes every character that is not
//! an ASCII letter from each token, normalizing candidate words before
//! frequency counting. Tokens that consist entirely of punctuation or
//! digits become empty and can then be dropped by
//! [`RemoveEmptyFilter`](super::remove_empty::RemoveEmptyFilter).

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that keeps only ASCII letters in each token.
///
/// Offsets still point at the original, unstripped word.
#[derive(Clone, Debug, Default)]
pub struct AlphaFilter;

impl AlphaFilter {
    /// Create a new alpha filter.
    pub fn new() -> Self {
        AlphaFilter
    }
}

impl Filter for AlphaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let kept: String = token
                    .text
                    .chars()
                    .filter(|c| c.is_ascii_alphabetic())
                    .collect();
                token.with_text(kept)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alpha"
    }
}
