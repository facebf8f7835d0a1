//! # Wordsieve
//!
//! Heuristic English word validation and vocabulary extraction for essay
//! study tools.
//!
//! ## Features
//!
//! - Ordered, individually testable validity rules with rejection reasons
//! - Splitting of run-together compound words
//! - Deduplicated vocabulary extraction from free text
//! - Token-stream analysis keeping offsets into the source text
//! - Essay ingestion with pluggable dictionary and translation providers

pub mod analysis;
pub mod cli;
pub mod error;
pub mod essay;
pub mod lexicon;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, VocabularyAnalyzer};
    pub use crate::error::{Result, WordsieveError};
    pub use crate::essay::{Dictionary, Essay, EssayIngestor, Translator};
    pub use crate::lexicon::{Verdict, WordFilter, WordFilterConfig};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
