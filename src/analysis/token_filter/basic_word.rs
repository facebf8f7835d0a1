//! Basic word filter implementation.
//!
//! Words in the basic word set are presumed known by the learner. The
//! filter either marks them as stopped, so callers can skip translating
//! them, or removes them from the stream.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::lexicon::WordFilter;

/// A filter that marks or removes basic words.
#[derive(Clone, Debug, Default)]
pub struct BasicWordFilter {
    word_filter: WordFilter,
    remove_basic: bool,
}

impl BasicWordFilter {
    /// Create a new basic word filter that marks basic words as stopped.
    pub fn new() -> Self {
        BasicWordFilter {
            word_filter: WordFilter::new(),
            remove_basic: false,
        }
    }

    /// Create a new basic word filter around a configured word filter.
    pub fn with_word_filter(word_filter: WordFilter) -> Self {
        BasicWordFilter {
            word_filter,
            remove_basic: false,
        }
    }

    /// Set whether to remove basic words entirely or just mark them.
    pub fn remove_basic(mut self, remove: bool) -> Self {
        self.remove_basic = remove;
        self
    }
}

impl Filter for BasicWordFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() || !self.word_filter.is_basic_word(&token.text) {
                    Some(token)
                } else if self.remove_basic {
                    None
                } else {
                    Some(token.stop())
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "basic_word"
    }
}
