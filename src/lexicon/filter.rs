//! The word filter.
//!
//! [`WordFilter`] decides whether a token extracted from an essay is a word
//! worth studying. Validation runs these steps in order and stops at the
//! first rejection:
//!
//! 1. Empty after trimming.
//! 2. Word shape: letters, or letters joined by one apostrophe.
//! 3. [`INVALID_SHAPE_RULES`](crate::lexicon::rules::INVALID_SHAPE_RULES).
//!    Tokens shorter than three characters that appear in the short-word
//!    allowlist skip this whole step, not just the length rule.
//! 4. [`SPELLING_ERROR_RULES`](crate::lexicon::rules::SPELLING_ERROR_RULES).
//!
//! # Examples
//!
//! ```
//! use wordsieve::lexicon::WordFilter;
//!
//! let filter = WordFilter::new();
//! assert!(filter.is_valid_word("apples"));
//! assert!(filter.is_valid_word("a"));
//! assert!(!filter.is_valid_word("hello123"));
//!
//! let words = filter.extract_valid_words("I love apples. Apples!");
//! assert_eq!(words, vec!["love", "apples"]);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use log::debug;
use regex::Regex;

use crate::error::Result;
use crate::lexicon::compound;
use crate::lexicon::config::WordFilterConfig;
use crate::lexicon::rules::{self, MIN_WORD_LENGTH, Rejection, Verdict, WORD_PATTERN};
use crate::lexicon::wordlist::{BASIC_WORD_SET, SHORT_WORD_SET};

static WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_PATTERN).expect("word pattern should be valid"));

/// A word accepted from a token, with its byte offset inside that token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcceptedWord {
    pub word: String,
    pub offset: usize,
    /// Byte length of the accepted text in the source token.
    pub len: usize,
}

/// Classifies, splits and deduplicates candidate words.
///
/// The filter holds only immutable tables and is cheap to clone.
#[derive(Clone, Debug)]
pub struct WordFilter {
    config: WordFilterConfig,
    short_words: Arc<HashSet<String>>,
    basic_words: Arc<HashSet<String>>,
}

impl WordFilter {
    /// Create a filter with the built-in tables and default configuration.
    pub fn new() -> Self {
        WordFilter {
            config: WordFilterConfig::default(),
            short_words: Arc::new(SHORT_WORD_SET.clone()),
            basic_words: Arc::new(BASIC_WORD_SET.clone()),
        }
    }

    /// Create a filter from a configuration.
    ///
    /// Extra words from the configuration are added to the built-in tables.
    pub fn with_config(config: WordFilterConfig) -> Result<Self> {
        config.validate()?;

        let mut short_words = SHORT_WORD_SET.clone();
        short_words.extend(
            config
                .extra_short_words
                .iter()
                .map(|w| w.trim().to_lowercase()),
        );

        let mut basic_words = BASIC_WORD_SET.clone();
        basic_words.extend(
            config
                .extra_basic_words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );

        Ok(WordFilter {
            config,
            short_words: Arc::new(short_words),
            basic_words: Arc::new(basic_words),
        })
    }

    /// Get the configuration of this filter.
    pub fn config(&self) -> &WordFilterConfig {
        &self.config
    }

    /// Check if a normalized word is in the short-word allowlist.
    pub fn is_short_word(&self, word: &str) -> bool {
        self.short_words.contains(word)
    }

    /// Validate a token and report why it was rejected.
    pub fn validate(&self, token: &str) -> Verdict {
        let word = token.trim().to_lowercase();

        if word.is_empty() {
            return Verdict::rejected(word, Rejection::Empty);
        }

        if !rules::has_word_shape(&word) {
            // Name the rule that explains the bad shape when there is one.
            let rejection = rules::first_invalid_shape(&word)
                .map_or(Rejection::Malformed, Rejection::InvalidShape);
            return Verdict::rejected(word, rejection);
        }

        if let Some(rule) = rules::first_invalid_shape(&word) {
            let allowlisted =
                word.chars().count() < MIN_WORD_LENGTH && self.short_words.contains(&word);
            if !allowlisted {
                return Verdict::rejected(word, Rejection::InvalidShape(rule));
            }
        }

        if let Some(rule) = rules::first_spelling_error(&word) {
            return Verdict::rejected(word, Rejection::SpellingError(rule));
        }

        Verdict::valid(word)
    }

    /// Check if a token is a valid English word.
    pub fn is_valid_word(&self, token: &str) -> bool {
        self.validate(token).is_valid()
    }

    /// Check if a token looks like a typo.
    ///
    /// Only the spelling-error rules are applied. An empty token is treated
    /// as an error.
    pub fn is_possible_spelling_error(&self, token: &str) -> bool {
        let word = token.trim().to_lowercase();
        word.is_empty() || rules::first_spelling_error(&word).is_some()
    }

    /// Split a token that looks like two words written together.
    ///
    /// Returns the two halves, or the trimmed token alone when no split
    /// applies.
    pub fn split_compound_word(&self, token: &str) -> Vec<String> {
        let token = token.trim();
        match self.split_parts(token) {
            Some((left, right)) => vec![left.to_string(), right.to_string()],
            None => vec![token.to_string()],
        }
    }

    fn split_parts<'a>(&self, token: &'a str) -> Option<(&'a str, &'a str)> {
        compound::split_camel_case(token)
            .or_else(|| compound::split_lowercase(token, |part| self.is_valid_word(part)))
    }

    /// Words kept from a single token, lower-cased, in order.
    ///
    /// A valid token yields itself. A rejected token yields whichever halves
    /// of its compound split are valid, or nothing.
    pub fn accept_token(&self, token: &str) -> Vec<AcceptedWord> {
        let verdict = self.validate(token);
        let trimmed = token.trim();
        let lead = token.len() - token.trim_start().len();

        if verdict.is_valid() {
            return vec![AcceptedWord {
                word: verdict.word,
                offset: lead,
                len: trimmed.len(),
            }];
        }

        if self.config.split_compounds
            && let Some((left, right)) = self.split_parts(trimmed)
        {
            let kept: Vec<AcceptedWord> = [(left, lead), (right, lead + left.len())]
                .into_iter()
                .map(|(part, offset)| (self.validate(part), offset, part.len()))
                .filter(|(verdict, _, _)| verdict.is_valid())
                .map(|(verdict, offset, len)| AcceptedWord {
                    word: verdict.word,
                    offset,
                    len,
                })
                .collect();
            if !kept.is_empty() {
                return kept;
            }
        }

        if self.config.log_rejections
            && let Some(rejection) = &verdict.rejection
        {
            debug!(
                "Rejected token {token:?} ({}): {rejection}",
                rejection.category()
            );
        }

        Vec::new()
    }

    /// Keep the valid words from a sequence of tokens.
    ///
    /// Output words are lower-cased and deduplicated, in order of first
    /// occurrence.
    pub fn filter_valid_words<I, S>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for token in tokens {
            for accepted in self.accept_token(token.as_ref()) {
                if seen.insert(accepted.word.clone()) {
                    words.push(accepted.word);
                }
            }
        }
        words
    }

    /// Extract the valid words from free text.
    pub fn extract_valid_words(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        self.filter_valid_words(WORD_RUN.find_iter(text).map(|m| m.as_str()))
    }

    /// Check if a token is a word the learner is presumed to know.
    pub fn is_basic_word(&self, token: &str) -> bool {
        self.basic_words.contains(&token.trim().to_lowercase())
    }
}

impl Default for WordFilter {
    fn default() -> Self {
        Self::new()
    }
}
