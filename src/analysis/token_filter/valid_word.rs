//! Valid word filter implementation.
//!
//! Applies [`WordFilter::accept_token`] to every token: valid words are kept
//! lower-cased, rejected tokens are replaced by their valid compound halves
//! or dropped. Offsets of split halves point at the half inside the source
//! text.
//!
//! # Examples
//!
//! ```
//! use wordsieve::analysis::token_filter::Filter;
//! use wordsieve::analysis::token_filter::valid_word::ValidWordFilter;
//! use wordsieve::analysis::token::Token;
//!
//! let filter = ValidWordFilter::new();
//! let tokens = vec![
//!     Token::with_offsets("Reading", 0, 0, 7),
//!     Token::with_offsets("xq", 1, 8, 10),
//!     Token::with_offsets("greatStrengths", 2, 11, 25),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "reading");
//! assert_eq!(result[1].text, "great");
//! assert_eq!(result[1].start_offset, 11);
//! assert_eq!(result[1].end_offset, 16);
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::lexicon::WordFilter;

/// A filter that keeps only tokens the word filter accepts.
///
/// Stopped tokens pass through unchanged. Positions are renumbered.
#[derive(Clone, Debug, Default)]
pub struct ValidWordFilter {
    word_filter: WordFilter,
}

impl ValidWordFilter {
    /// Create a new valid word filter with the default word filter.
    pub fn new() -> Self {
        ValidWordFilter {
            word_filter: WordFilter::new(),
        }
    }

    /// Create a new valid word filter around a configured word filter.
    pub fn with_word_filter(word_filter: WordFilter) -> Self {
        ValidWordFilter { word_filter }
    }

    /// Get the word filter used by this token filter.
    pub fn word_filter(&self) -> &WordFilter {
        &self.word_filter
    }
}

impl Filter for ValidWordFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut filtered_tokens: Vec<Token> = Vec::new();

        for token in tokens {
            if token.is_stopped() {
                filtered_tokens.push(token.with_position(filtered_tokens.len()));
                continue;
            }

            for accepted in self.word_filter.accept_token(&token.text) {
                let original = token
                    .text
                    .get(accepted.offset..accepted.offset + accepted.len)
                    .unwrap_or(&accepted.word)
                    .to_string();
                let start = token.start_offset + accepted.offset;
                let end = start + accepted.len;

                filtered_tokens.push(
                    Token::with_offsets(accepted.word, filtered_tokens.len(), start, end)
                        .with_original_text(original),
                );
            }
        }

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "valid_word"
    }
}
