//! Analyzers that combine a tokenizer with a chain of filters.
//!
//! - [`pipeline::PipelineAnalyzer`] - Custom tokenizer + filter chains
//! - [`vocabulary::VocabularyAnalyzer`] - Valid, deduplicated essay vocabulary

#[allow(clippy::module_inception)]
pub mod analyzer;
pub mod pipeline;
pub mod vocabulary;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use vocabulary::VocabularyAnalyzer;
