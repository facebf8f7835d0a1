//! Unique filter implementation.

use std::collections::HashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that keeps only the first occurrence of each token text.
///
/// Comparison is exact, so place it after a lowercasing filter for
/// case-insensitive deduplication. Positions are renumbered.
#[derive(Clone, Debug, Default)]
pub struct UniqueFilter;

impl UniqueFilter {
    /// Create a new unique filter.
    pub fn new() -> Self {
        UniqueFilter
    }
}

impl Filter for UniqueFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut seen = HashSet::new();
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| seen.insert(token.text.clone()))
            .enumerate()
            .map(|(position, token)| token.with_position(position))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unique"
    }
}
