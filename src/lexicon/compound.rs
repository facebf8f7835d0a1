//! Splitting of words that were written together by mistake.
//!
//! Two strategies are tried in order:
//!
//! 1. A lower-to-upper case boundary (`needsConstant` → `needs` + `Constant`).
//! 2. For all-lowercase tokens, the longest prefix for which both halves are
//!    accepted by the caller's predicate (`catchphrase` → `catch` +
//!    `phrase` with the word validity check). Without a meaning-aware segmentation this is a
//!    deterministic heuristic and can pick an odd split point.
//!
//! Both halves must be at least [`MIN_PART_LENGTH`] bytes long. Lowercase
//! halves are at most [`MAX_PART_LENGTH`] bytes, so a token longer than twice
//! that is never split.

use crate::lexicon::rules::MAX_WORD_LENGTH;

/// Minimum length of each half of a split.
pub const MIN_PART_LENGTH: usize = 2;

/// Maximum length of each half of a lowercase split.
pub const MAX_PART_LENGTH: usize = MAX_WORD_LENGTH;

/// Split at the first lower-to-upper case boundary.
pub fn split_camel_case(token: &str) -> Option<(&str, &str)> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    let bytes = token.as_bytes();
    let boundary = (1..bytes.len())
        .find(|&i| bytes[i - 1].is_ascii_lowercase() && bytes[i].is_ascii_uppercase())?;
    let (left, right) = token.split_at(boundary);

    (left.len() >= MIN_PART_LENGTH && right.len() >= MIN_PART_LENGTH).then_some((left, right))
}

/// Split an all-lowercase token at the longest prefix for which `accept`
/// holds for both halves.
///
/// Only boundaries that leave both halves within
/// [`MIN_PART_LENGTH`]..=[`MAX_PART_LENGTH`] are tried.
pub fn split_lowercase<F>(token: &str, accept: F) -> Option<(&str, &str)>
where
    F: Fn(&str) -> bool,
{
    let len = token.len();
    if !(2 * MIN_PART_LENGTH..=2 * MAX_PART_LENGTH).contains(&len)
        || !token.bytes().all(|b| b.is_ascii_lowercase())
    {
        return None;
    }

    let first = MIN_PART_LENGTH.max(len.saturating_sub(MAX_PART_LENGTH));
    let last = MAX_PART_LENGTH.min(len - MIN_PART_LENGTH);

    (first..=last)
        .rev()
        .map(|boundary| token.split_at(boundary))
        .find(|&(left, right)| accept(left) && accept(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_camel_case() {
        assert_eq!(
            split_camel_case("needsConstant"),
            Some(("needs", "Constant"))
        );
        assert_eq!(
            split_camel_case("NeedsConstant"),
            Some(("Needs", "Constant"))
        );
        // Only the first boundary is used.
        assert_eq!(
            split_camel_case("oneTwoThree"),
            Some(("one", "TwoThree"))
        );
    }

    #[test]
    fn test_split_camel_case_rejects_short_parts() {
        assert_eq!(split_camel_case("aBook"), None);
        assert_eq!(split_camel_case("bookX"), None);
    }

    #[test]
    fn test_split_camel_case_requires_letters() {
        assert_eq!(split_camel_case("needs-Constant"), None);
        assert_eq!(split_camel_case("lowercase"), None);
        assert_eq!(split_camel_case("UPPER"), None);
        assert_eq!(split_camel_case(""), None);
    }

    #[test]
    fn test_split_lowercase_prefers_longest_prefix() {
        let any = |_: &str| true;
        assert_eq!(split_lowercase("abcdef", any), Some(("abcd", "ef")));

        let known = |part: &str| ["blue", "bird", "bluebi", "rd"].contains(&part);
        assert_eq!(split_lowercase("bluebird", known), Some(("bluebi", "rd")));

        let strict = |part: &str| ["blue", "bird"].contains(&part);
        assert_eq!(split_lowercase("bluebird", strict), Some(("blue", "bird")));
    }

    #[test]
    fn test_split_lowercase_rejects() {
        let any = |_: &str| true;
        assert_eq!(split_lowercase("abc", any), None);
        assert_eq!(split_lowercase("blueBird", any), None);
        assert_eq!(split_lowercase("bluebird", |_: &str| false), None);
    }

    #[test]
    fn test_split_lowercase_part_length_bounds() {
        let any = |_: &str| true;

        let longest = "a".repeat(2 * MAX_PART_LENGTH);
        let (left, right) = split_lowercase(&longest, any).unwrap();
        assert_eq!((left.len(), right.len()), (MAX_PART_LENGTH, MAX_PART_LENGTH));

        let too_long = "a".repeat(2 * MAX_PART_LENGTH + 1);
        assert_eq!(split_lowercase(&too_long, any), None);

        // Halves over the limit are never offered to the predicate.
        let calls = std::cell::Cell::new(0);
        let counting = |part: &str| {
            calls.set(calls.get() + 1);
            assert!(part.len() <= MAX_PART_LENGTH);
            false
        };
        assert_eq!(split_lowercase(&"ab".repeat(15), counting), None);
        assert!(calls.get() > 0);
        assert_eq!(split_lowercase(&"ab".repeat(50_000), counting), None);
    }
}
