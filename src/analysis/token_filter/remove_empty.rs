//! Remove empty filter implementation.
//!
//! This module provides a filter that removes empty tokens from the
//! stream. Candidate words that normalization reduced to nothing (pure
//! punctuation, digits-only tokens) are discarded here instead of being
//! counted under an empty key.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that removes empty tokens from the stream.
///
/// Surviving tokens keep their original positions and offsets.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove-empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}
