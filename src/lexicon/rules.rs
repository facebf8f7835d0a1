//! Heuristic rules used to classify candidate words.
//!
//! Rules come in two ordered groups. [`INVALID_SHAPE_RULES`] reject tokens
//! that cannot be an English word at all (digits, absurd lengths, long
//! letter runs). [`SPELLING_ERROR_RULES`] are stricter and flag tokens that
//! look like typos. Within a group the first matching rule is reported.
//!
//! All rules are case-insensitive and operate on the whole token.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Pattern matching a maximal run of letters and apostrophes in free text.
pub const WORD_PATTERN: &str = r"[A-Za-z']+";

/// Minimum length of a word that does not need the short-word allowlist.
pub const MIN_WORD_LENGTH: usize = 3;

/// Maximum accepted word length.
pub const MAX_WORD_LENGTH: usize = 19;

static WORD_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z]+|[a-zA-Z]+'[a-zA-Z]+)$").expect("word shape pattern should be valid")
});

static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("digit pattern should be valid"));

static FOREIGN_CHARACTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z']").expect("foreign character pattern should be valid"));

/// Check the basic word shape: letters only, or letters joined by a single
/// apostrophe (contractions and possessives such as `don't`, `mary's`).
pub fn has_word_shape(word: &str) -> bool {
    WORD_SHAPE.is_match(word)
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Length of the longest run of consecutive characters satisfying `pred`.
fn longest_run(word: &str, pred: impl Fn(char) -> bool) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in word.chars() {
        if pred(c) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Length of the longest run of one repeated character.
fn longest_repeat(word: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;
    for c in word.chars().map(|c| c.to_ascii_lowercase()) {
        if previous == Some(c) {
            current += 1;
        } else {
            current = 1;
            previous = Some(c);
        }
        longest = longest.max(current);
    }
    longest
}

/// Rules that reject a token outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidShapeRule {
    /// Contains a decimal digit.
    ContainsDigit,
    /// Contains a character other than a letter or apostrophe.
    ForeignCharacter,
    /// Two characters or fewer.
    TooShort,
    /// Twenty characters or more.
    TooLong,
    /// One character repeated four or more times in a row.
    RepeatedCharacter,
    /// Five or more consecutive consonants.
    ConsonantRun,
    /// Four or more consecutive vowels.
    VowelRun,
}

/// Invalid-shape rules in evaluation order.
pub const INVALID_SHAPE_RULES: [InvalidShapeRule; 7] = [
    InvalidShapeRule::ContainsDigit,
    InvalidShapeRule::ForeignCharacter,
    InvalidShapeRule::TooShort,
    InvalidShapeRule::TooLong,
    InvalidShapeRule::RepeatedCharacter,
    InvalidShapeRule::ConsonantRun,
    InvalidShapeRule::VowelRun,
];

impl InvalidShapeRule {
    /// Check whether this rule fires for `word`.
    pub fn matches(self, word: &str) -> bool {
        match self {
            InvalidShapeRule::ContainsDigit => DIGIT.is_match(word),
            InvalidShapeRule::ForeignCharacter => FOREIGN_CHARACTER.is_match(word),
            InvalidShapeRule::TooShort => word.chars().count() < MIN_WORD_LENGTH,
            InvalidShapeRule::TooLong => word.chars().count() > MAX_WORD_LENGTH,
            InvalidShapeRule::RepeatedCharacter => longest_repeat(word) >= 4,
            InvalidShapeRule::ConsonantRun => longest_run(word, is_consonant) >= 5,
            InvalidShapeRule::VowelRun => longest_run(word, is_vowel) >= 4,
        }
    }

    /// Get the name of this rule.
    pub fn name(self) -> &'static str {
        match self {
            InvalidShapeRule::ContainsDigit => "contains_digit",
            InvalidShapeRule::ForeignCharacter => "foreign_character",
            InvalidShapeRule::TooShort => "too_short",
            InvalidShapeRule::TooLong => "too_long",
            InvalidShapeRule::RepeatedCharacter => "repeated_character",
            InvalidShapeRule::ConsonantRun => "consonant_run",
            InvalidShapeRule::VowelRun => "vowel_run",
        }
    }
}

/// Rules that flag a likely typo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellingRule {
    /// One letter repeated three or more times in a row.
    RepeatedLetters,
    /// Three or more consecutive vowels.
    VowelRun,
    /// Four or more consecutive consonants.
    ConsonantRun,
    /// Four or more consecutive characters that are not vowels.
    NonVowelRun,
}

/// Spelling-error rules in evaluation order.
pub const SPELLING_ERROR_RULES: [SpellingRule; 4] = [
    SpellingRule::RepeatedLetters,
    SpellingRule::VowelRun,
    SpellingRule::ConsonantRun,
    SpellingRule::NonVowelRun,
];

impl SpellingRule {
    /// Check whether this rule fires for `word`.
    pub fn matches(self, word: &str) -> bool {
        match self {
            SpellingRule::RepeatedLetters => longest_repeat(word) >= 3,
            SpellingRule::VowelRun => longest_run(word, is_vowel) >= 3,
            SpellingRule::ConsonantRun => longest_run(word, is_consonant) >= 4,
            SpellingRule::NonVowelRun => longest_run(word, |c| !is_vowel(c)) >= 4,
        }
    }

    /// Get the name of this rule.
    pub fn name(self) -> &'static str {
        match self {
            SpellingRule::RepeatedLetters => "repeated_letters",
            SpellingRule::VowelRun => "vowel_run",
            SpellingRule::ConsonantRun => "consonant_run",
            SpellingRule::NonVowelRun => "non_vowel_run",
        }
    }
}

/// First invalid-shape rule matching `word`, if any.
pub fn first_invalid_shape(word: &str) -> Option<InvalidShapeRule> {
    INVALID_SHAPE_RULES
        .iter()
        .copied()
        .find(|rule| rule.matches(word))
}

/// First spelling-error rule matching `word`, if any.
pub fn first_spelling_error(word: &str) -> Option<SpellingRule> {
    SPELLING_ERROR_RULES
        .iter()
        .copied()
        .find(|rule| rule.matches(word))
}

/// Why a token was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rule", rename_all = "snake_case")]
pub enum Rejection {
    /// Nothing left after trimming.
    Empty,
    /// Not letters, or letters joined by a single apostrophe, and no
    /// invalid-shape rule names the problem more precisely.
    Malformed,
    /// An invalid-shape rule fired and the allowlist did not apply.
    InvalidShape(InvalidShapeRule),
    /// A spelling-error rule fired.
    SpellingError(SpellingRule),
}

/// Coarse grouping of rejections used for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionCategory {
    SpellingError,
    TooLong,
    ContainsDigit,
    Other,
}

impl Rejection {
    /// Get the diagnostic category of this rejection.
    pub fn category(&self) -> RejectionCategory {
        match self {
            Rejection::SpellingError(_) => RejectionCategory::SpellingError,
            Rejection::InvalidShape(InvalidShapeRule::TooLong) => RejectionCategory::TooLong,
            Rejection::InvalidShape(InvalidShapeRule::ContainsDigit) => {
                RejectionCategory::ContainsDigit
            }
            _ => RejectionCategory::Other,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "empty"),
            Rejection::Malformed => write!(f, "malformed"),
            Rejection::InvalidShape(rule) => write!(f, "invalid shape: {}", rule.name()),
            Rejection::SpellingError(rule) => write!(f, "possible spelling error: {}", rule.name()),
        }
    }
}

impl fmt::Display for RejectionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RejectionCategory::SpellingError => "spelling error",
            RejectionCategory::TooLong => "too long",
            RejectionCategory::ContainsDigit => "contains digit",
            RejectionCategory::Other => "other",
        };
        f.write_str(label)
    }
}

/// The outcome of validating one token.
///
/// `word` is the normalized (trimmed, lower-cased) form of the token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub word: String,
    pub rejection: Option<Rejection>,
}

impl Verdict {
    /// Create an accepting verdict.
    pub fn valid<S: Into<String>>(word: S) -> Self {
        Verdict {
            word: word.into(),
            rejection: None,
        }
    }

    /// Create a rejecting verdict.
    pub fn rejected<S: Into<String>>(word: S, rejection: Rejection) -> Self {
        Verdict {
            word: word.into(),
            rejection: Some(rejection),
        }
    }

    /// Check if the token was accepted.
    pub fn is_valid(&self) -> bool {
        self.rejection.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_shape() {
        assert!(has_word_shape("hello"));
        assert!(has_word_shape("don't"));
        assert!(has_word_shape("Mary's"));
        assert!(!has_word_shape("'tis"));
        assert!(!has_word_shape("apples'"));
        assert!(!has_word_shape("rock'n'roll"));
        assert!(!has_word_shape("well-known"));
        assert!(!has_word_shape("abc1"));
        assert!(!has_word_shape(""));
    }

    #[test]
    fn test_invalid_shape_rules_individually() {
        assert!(InvalidShapeRule::ContainsDigit.matches("h3llo"));
        assert!(InvalidShapeRule::ForeignCharacter.matches("caf\u{e9}"));
        assert!(!InvalidShapeRule::ForeignCharacter.matches("don't"));
        assert!(InvalidShapeRule::TooShort.matches("ab"));
        assert!(!InvalidShapeRule::TooShort.matches("abc"));
        assert!(InvalidShapeRule::TooLong.matches("abcdefghijabcdefghij"));
        assert!(!InvalidShapeRule::TooLong.matches("abcdefghijabcdefghi"));
        assert!(InvalidShapeRule::RepeatedCharacter.matches("zzzzap"));
        assert!(!InvalidShapeRule::RepeatedCharacter.matches("zzzap"));
        assert!(InvalidShapeRule::ConsonantRun.matches("bcdfgo"));
        assert!(!InvalidShapeRule::ConsonantRun.matches("bcdfo"));
        assert!(InvalidShapeRule::VowelRun.matches("queue"));
        assert!(!InvalidShapeRule::VowelRun.matches("beauty"));
    }

    #[test]
    fn test_spelling_rules_individually() {
        assert!(SpellingRule::RepeatedLetters.matches("helllo"));
        assert!(!SpellingRule::RepeatedLetters.matches("hello"));
        assert!(SpellingRule::VowelRun.matches("beautiful"));
        assert!(!SpellingRule::VowelRun.matches("boat"));
        assert!(SpellingRule::ConsonantRun.matches("strength"));
        assert!(!SpellingRule::ConsonantRun.matches("string"));
        assert!(SpellingRule::NonVowelRun.matches("ab'cde"));
        assert!(!SpellingRule::NonVowelRun.matches("don't"));
    }

    #[test]
    fn test_rules_are_case_insensitive() {
        assert!(InvalidShapeRule::RepeatedCharacter.matches("zZzZap"));
        assert!(SpellingRule::VowelRun.matches("BEAUTY"));
        assert!(SpellingRule::ConsonantRun.matches("STRENGTH"));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Matches both the digit and the foreign character rules.
        assert_eq!(
            first_invalid_shape("ab1-"),
            Some(InvalidShapeRule::ContainsDigit)
        );
        assert_eq!(first_invalid_shape("hello"), None);
        assert_eq!(
            first_spelling_error("aaah"),
            Some(SpellingRule::RepeatedLetters)
        );
        assert_eq!(first_spelling_error("successd"), None);
    }

    #[test]
    fn test_rejection_categories() {
        assert_eq!(
            Rejection::SpellingError(SpellingRule::VowelRun).category(),
            RejectionCategory::SpellingError
        );
        assert_eq!(
            Rejection::InvalidShape(InvalidShapeRule::TooLong).category(),
            RejectionCategory::TooLong
        );
        assert_eq!(
            Rejection::InvalidShape(InvalidShapeRule::ContainsDigit).category(),
            RejectionCategory::ContainsDigit
        );
        assert_eq!(
            Rejection::InvalidShape(InvalidShapeRule::TooShort).category(),
            RejectionCategory::Other
        );
        assert_eq!(Rejection::Malformed.category(), RejectionCategory::Other);
        assert_eq!(RejectionCategory::TooLong.to_string(), "too long");
    }

    #[test]
    fn test_verdict_serialization() {
        let verdict = Verdict::rejected("xq", Rejection::InvalidShape(InvalidShapeRule::TooShort));
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["word"], "xq");
        assert_eq!(json["rejection"]["kind"], "invalid_shape");
        assert_eq!(json["rejection"]["rule"], "too_short");
        assert!(!verdict.is_valid());
        assert!(Verdict::valid("hello").is_valid());
    }
}
