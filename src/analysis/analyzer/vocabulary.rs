//! Vocabulary analyzer for essay text.
//!
//! Produces the same words as
//! [`WordFilter::extract_valid_words`](crate::lexicon::WordFilter::extract_valid_words),
//! as tokens carrying byte offsets into the analyzed text:
//!
//! ```text
//! RegexTokenizer (letters and apostrophes) → ValidWordFilter → UniqueFilter
//! ```
//!
//! # Examples
//!
//! ```
//! use wordsieve::analysis::analyzer::analyzer::Analyzer;
//! use wordsieve::analysis::analyzer::vocabulary::VocabularyAnalyzer;
//!
//! let analyzer = VocabularyAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("I love apples. Apples!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "love");
//! assert_eq!(tokens[1].text, "apples");
//! assert_eq!(tokens[1].start_offset, 7);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{BasicWordFilter, UniqueFilter, ValidWordFilter};
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::Result;
use crate::lexicon::WordFilter;

/// Analyzer extracting the valid, deduplicated vocabulary of a text.
#[derive(Clone)]
pub struct VocabularyAnalyzer {
    inner: PipelineAnalyzer,
    word_filter: WordFilter,
}

impl VocabularyAnalyzer {
    /// Create a vocabulary analyzer with the default word filter.
    pub fn new() -> Self {
        Self::with_word_filter(WordFilter::new())
    }

    /// Create a vocabulary analyzer around a configured word filter.
    pub fn with_word_filter(word_filter: WordFilter) -> Self {
        let inner = PipelineAnalyzer::new(Arc::new(RegexTokenizer::default()))
            .add_filter(Arc::new(ValidWordFilter::with_word_filter(
                word_filter.clone(),
            )))
            .add_filter(Arc::new(UniqueFilter::new()));

        VocabularyAnalyzer { inner, word_filter }
    }

    /// Also mark words the learner already knows as stopped.
    pub fn mark_basic_words(mut self) -> Self {
        self.inner = self.inner.add_filter(Arc::new(BasicWordFilter::with_word_filter(
            self.word_filter.clone(),
        )));
        self
    }

    /// Get the word filter used by this analyzer.
    pub fn word_filter(&self) -> &WordFilter {
        &self.word_filter
    }

    /// Get the underlying pipeline.
    pub fn pipeline(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for VocabularyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for VocabularyAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "vocabulary"
    }
}
