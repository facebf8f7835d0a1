//! Static word tables used by the word filter.
//!
//! Both tables are fixed at compile time and materialised once into
//! process-wide sets on first use.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Known-valid English words of one or two letters.
///
/// These are exempt from the invalid-shape rules, which would otherwise
/// reject every token of length two or less. The pronoun "i" is deliberately
/// absent: essays start many sentences with it and it is never worth
/// studying.
pub const SHORT_WORD_ALLOWLIST: &[&str] = &[
    "a", "am", "an", "as", "at", "be", "by", "do", "go", "he", "hi", "if", "in", "is", "it", "me",
    "my", "no", "of", "oh", "ok", "on", "or", "so", "to", "up", "us", "we",
];

/// Common English words a learner is presumed to already know.
const BASIC_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we", "say",
    "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their", "what", "so",
    "up", "out", "if", "about", "who", "get", "which", "go", "me", "when", "make", "can", "like",
    "time", "no", "just", "him", "know", "take", "people", "into", "year", "your", "good", "some",
    "could", "them", "see", "other", "than", "then", "now", "look", "only", "come", "its", "over",
    "think", "also", "back", "after", "use", "two", "how", "our", "work", "first", "well", "way",
    "is", "are", "was", "were",
];

/// The short-word allowlist as a set.
pub static SHORT_WORD_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    SHORT_WORD_ALLOWLIST
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// The basic word list as a set.
pub static BASIC_WORD_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| BASIC_WORDS.iter().map(|&s| s.to_string()).collect());
