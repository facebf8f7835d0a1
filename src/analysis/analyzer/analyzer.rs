//! Core analyzer trait definition.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 ... Filter N
//! ```
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use wordsieve::analysis::analyzer::analyzer::Analyzer;
//! use wordsieve::analysis::token::TokenStream;
//! use wordsieve::error::Result;
//!
//! struct NothingAnalyzer;
//!
//! impl Analyzer for NothingAnalyzer {
//!     fn analyze(&self, _text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "nothing"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can serve many essays
/// concurrently.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
