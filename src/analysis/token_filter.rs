//! Token filter implementations for token transformation.
//!
//! Filters receive a stream of tokens and produce a new stream. They are
//! chained in an analyzer:
//!
//! ```text
//! Tokenizer → ValidWord → Unique → BasicWord
//! ```
//!
//! # Available Filters
//!
//! - [`valid_word::ValidWordFilter`] - Keeps valid words, splitting compounds
//! - [`unique::UniqueFilter`] - Drops repeated words
//! - [`basic_word::BasicWordFilter`] - Marks or removes words the learner knows

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod basic_word;
pub mod unique;
pub mod valid_word;

pub use basic_word::BasicWordFilter;
pub use unique::UniqueFilter;
pub use valid_word::ValidWordFilter;
