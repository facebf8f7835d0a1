//! Pipeline analyzer that combines tokenizers and filters.
//!
//! Text is tokenized first, then every filter is applied in the order it
//! was added.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use wordsieve::analysis::analyzer::analyzer::Analyzer;
//! use wordsieve::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use wordsieve::analysis::token_filter::{BasicWordFilter, UniqueFilter, ValidWordFilter};
//! use wordsieve::analysis::tokenizer::RegexTokenizer;
//!
//! let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
//! let analyzer = PipelineAnalyzer::new(tokenizer)
//!     .add_filter(Arc::new(ValidWordFilter::new()))
//!     .add_filter(Arc::new(UniqueFilter::new()))
//!     .add_filter(Arc::new(BasicWordFilter::new().remove_basic(true)));
//!
//! let tokens: Vec<_> = analyzer.analyze("The river and THE sea").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "river");
//! assert_eq!(tokens[1].text, "sea");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Names of the tokenizer and filters, in application order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        std::iter::once(self.tokenizer.name())
            .chain(self.filters.iter().map(|f| f.name()))
            .collect()
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}
