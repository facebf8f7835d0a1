//! Token-stream analysis for essay text.
//!
//! The functions in [`crate::lexicon`] work on plain strings. This module
//! wraps the same rules in a tokenizer and filter pipeline so callers keep
//! the position and byte offsets of every word in the source text.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
