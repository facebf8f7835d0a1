//! Word filter configuration.
//!
//! The default configuration reproduces the built-in heuristics exactly.
//! A JSON file can extend the static word tables or switch off compound
//! splitting:
//!
//! ```json
//! {
//!   "split_compounds": true,
//!   "log_rejections": false,
//!   "extra_short_words": ["ox"],
//!   "extra_basic_words": ["school", "teacher"]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordsieveError};
use crate::lexicon::rules::MIN_WORD_LENGTH;

/// Configuration for a [`WordFilter`](crate::lexicon::WordFilter).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordFilterConfig {
    /// Try to split rejected tokens into two valid words.
    pub split_compounds: bool,

    /// Emit a debug log record for every rejected token.
    pub log_rejections: bool,

    /// Additional one- or two-letter words treated as valid.
    pub extra_short_words: Vec<String>,

    /// Additional words presumed known by the learner.
    pub extra_basic_words: Vec<String>,
}

impl Default for WordFilterConfig {
    fn default() -> Self {
        WordFilterConfig {
            split_compounds: true,
            log_rejections: true,
            extra_short_words: Vec::new(),
            extra_basic_words: Vec::new(),
        }
    }
}

impl WordFilterConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: WordFilterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Set whether rejected tokens are split into compound parts.
    pub fn with_split_compounds(mut self, split: bool) -> Self {
        self.split_compounds = split;
        self
    }

    /// Set whether rejections are logged.
    pub fn with_log_rejections(mut self, log: bool) -> Self {
        self.log_rejections = log;
        self
    }

    /// Add words to the short-word allowlist.
    pub fn with_extra_short_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_short_words
            .extend(words.into_iter().map(|s| s.into()));
        self
    }

    /// Add words to the basic word set.
    pub fn with_extra_basic_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_basic_words
            .extend(words.into_iter().map(|s| s.into()));
        self
    }

    /// Check that every extra short word can actually be exempted.
    ///
    /// The allowlist only applies below [`MIN_WORD_LENGTH`], so longer
    /// entries would be silently ignored.
    pub fn validate(&self) -> Result<()> {
        for word in &self.extra_short_words {
            let word = word.trim();
            if word.is_empty()
                || word.chars().count() >= MIN_WORD_LENGTH
                || !word.chars().all(|c| c.is_ascii_alphabetic())
            {
                return Err(WordsieveError::config(format!(
                    "extra short word {word:?} must be one or two ASCII letters"
                )));
            }
        }
        Ok(())
    }
}
