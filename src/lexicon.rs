//! English word validation and vocabulary extraction.
//!
//! The free functions in this module use a process-wide [`WordFilter`] with
//! the default configuration. Build a [`WordFilter`] directly to extend the
//! word tables or disable compound splitting.
//!
//! # Examples
//!
//! ```
//! use wordsieve::lexicon;
//!
//! assert!(lexicon::is_valid_word("apples"));
//! assert!(!lexicon::is_valid_word("xq"));
//! assert_eq!(
//!     lexicon::split_compound_word("needsConstant"),
//!     vec!["needs", "Constant"]
//! );
//! assert_eq!(lexicon::filter_valid_words(["the", "The", "THE"]), vec!["the"]);
//! ```

pub mod compound;
pub mod config;
pub mod filter;
pub mod rules;
pub mod wordlist;

use std::sync::LazyLock;

pub use config::WordFilterConfig;
pub use filter::{AcceptedWord, WordFilter};
pub use rules::{
    INVALID_SHAPE_RULES, InvalidShapeRule, Rejection, RejectionCategory, SPELLING_ERROR_RULES,
    SpellingRule, Verdict,
};

static DEFAULT_WORD_FILTER: LazyLock<WordFilter> = LazyLock::new(WordFilter::new);

/// Get the process-wide default filter.
pub fn default_filter() -> &'static WordFilter {
    &DEFAULT_WORD_FILTER
}

/// Check if a token is a valid English word.
pub fn is_valid_word(token: &str) -> bool {
    DEFAULT_WORD_FILTER.is_valid_word(token)
}

/// Validate a token and report why it was rejected.
pub fn validate_word(token: &str) -> Verdict {
    DEFAULT_WORD_FILTER.validate(token)
}

/// Check if a token looks like a typo.
pub fn is_possible_spelling_error(token: &str) -> bool {
    DEFAULT_WORD_FILTER.is_possible_spelling_error(token)
}

/// Split a token that looks like two words written together.
pub fn split_compound_word(token: &str) -> Vec<String> {
    DEFAULT_WORD_FILTER.split_compound_word(token)
}

/// Keep the valid words from a sequence of tokens.
pub fn filter_valid_words<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT_WORD_FILTER.filter_valid_words(tokens)
}

/// Extract the valid words from free text.
pub fn extract_valid_words(text: &str) -> Vec<String> {
    DEFAULT_WORD_FILTER.extract_valid_words(text)
}

/// Check if a token is a word the learner is presumed to know.
pub fn is_basic_word(token: &str) -> bool {
    DEFAULT_WORD_FILTER.is_basic_word(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions_match_default_filter() {
        for token in ["a", "xq", "hello123", "successd", "rhythm", "don't", ""] {
            assert_eq!(
                is_valid_word(token),
                WordFilter::new().is_valid_word(token),
                "{token:?}"
            );
            assert_eq!(validate_word(token).is_valid(), is_valid_word(token));
        }
    }

    #[test]
    fn test_idempotence() {
        let text = "The quick brown fox jumps over the lazy dog. greatStrengths catchphrase I";
        let once = extract_valid_words(text);
        let twice = filter_valid_words(&once);
        assert_eq!(once, twice);
        assert!(once.iter().all(|w| is_valid_word(w)));
    }

    #[test]
    fn test_concurrent_use() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| extract_valid_words("Reading essays every evening")))
            .collect();
        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                vec!["reading", "essays", "every", "evening"]
            );
        }
    }
}
