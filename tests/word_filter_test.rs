//! Integration tests for word validation and extraction.

use std::time::{Duration, Instant};

use wordsieve::lexicon::{
    self, INVALID_SHAPE_RULES, InvalidShapeRule, Rejection, SPELLING_ERROR_RULES, SpellingRule,
    WordFilter, WordFilterConfig,
};

#[test]
fn test_documented_examples() {
    assert!(lexicon::is_valid_word("a"));
    assert!(!lexicon::is_valid_word("xq"));
    assert!(!lexicon::is_valid_word("hello123"));
    assert!(!lexicon::is_valid_word("aaaaaaaaaaaaaaaaaaaaa"));

    let words = lexicon::extract_valid_words("I love apples.");
    assert!(words.contains(&"love".to_string()));
    assert!(words.contains(&"apples".to_string()));
    assert!(!words.contains(&"i".to_string()));

    assert_eq!(lexicon::filter_valid_words(["the", "The", "THE"]), vec!["the"]);
    assert_eq!(
        lexicon::split_compound_word("needsConstant"),
        vec!["needs", "Constant"]
    );
}

#[test]
fn test_doubled_letters_alone_are_not_an_error() {
    // Two identical letters in a row are common in English; only runs of
    // three trip the spelling rules.
    assert!(lexicon::is_valid_word("success"));
    assert!(lexicon::is_valid_word("successd"));
    assert!(!lexicon::is_valid_word("successsd"));
    assert_eq!(
        lexicon::validate_word("successsd").rejection,
        Some(Rejection::SpellingError(SpellingRule::RepeatedLetters))
    );
}

#[test]
fn test_allowlist_exception_is_coarse() {
    // "to" would fail the length rule; the allowlist bypasses every
    // invalid-shape rule for short words.
    assert!(lexicon::is_valid_word("to"));
    assert!(lexicon::is_valid_word("TO"));
    // But it never bypasses the shape check.
    assert_eq!(
        lexicon::validate_word("t1").rejection,
        Some(Rejection::InvalidShape(InvalidShapeRule::ContainsDigit))
    );
    assert!(!lexicon::is_valid_word("to'"));
}

#[test]
fn test_length_bounds() {
    let nineteen = "abcdefghijabcdefghi";
    let twenty = "abcdefghijabcdefghij";
    assert!(lexicon::is_valid_word("cat"));
    assert!(lexicon::is_valid_word(nineteen));
    assert_eq!(
        lexicon::validate_word(twenty).rejection,
        Some(Rejection::InvalidShape(InvalidShapeRule::TooLong))
    );
}

#[test]
fn test_rule_tables_are_ordered() {
    assert_eq!(INVALID_SHAPE_RULES[0], InvalidShapeRule::ContainsDigit);
    assert_eq!(INVALID_SHAPE_RULES.len(), 7);
    assert_eq!(SPELLING_ERROR_RULES[0], SpellingRule::RepeatedLetters);
    assert_eq!(SPELLING_ERROR_RULES.len(), 4);
}

#[test]
fn test_filter_output_properties() {
    let text = "Reading BOOKS every evening broadens the mind; readingBooks \
                is helllo a habit worth 100 hours. Don't stop!";
    let words = lexicon::extract_valid_words(text);

    assert!(words.iter().all(|w| lexicon::is_valid_word(w)));
    assert!(words.iter().all(|w| *w == w.to_lowercase()));
    assert_eq!(lexicon::filter_valid_words(&words), words);
    assert_eq!(
        words.iter().filter(|w| w.as_str() == "reading").count(),
        1
    );
    assert!(!words.contains(&"helllo".to_string()));
}

#[test]
fn test_compound_parts_are_kept_individually() {
    // "greatStrengths" is rejected; only the valid half survives.
    assert_eq!(lexicon::filter_valid_words(["greatStrengths"]), vec!["great"]);
    // Both halves of a lowercase compound survive when both are valid.
    assert_eq!(
        lexicon::filter_valid_words(["catchphrase"]),
        vec!["catch", "phrase"]
    );
}

#[test]
fn test_long_letter_runs_are_dropped_quickly() {
    let run = "ab".repeat(100_000);
    let text = format!("Green {run} meadow");
    let started = Instant::now();

    assert_eq!(lexicon::extract_valid_words(&text), vec!["green", "meadow"]);
    assert!(lexicon::filter_valid_words([run.as_str()]).is_empty());
    assert_eq!(lexicon::split_compound_word(&run), vec![run.clone()]);

    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn test_compound_split_at_part_length_limit() {
    // At 38 letters the only boundary left is 19 + 19.
    let joined = "counterrevolutionsinternationalizingab";
    assert_eq!(joined.len(), 38);
    assert_eq!(
        lexicon::split_compound_word(joined),
        vec!["counterrevolutionsi", "nternationalizingab"]
    );
    assert_eq!(lexicon::filter_valid_words([joined]).len(), 2);

    let too_long = format!("{joined}s");
    assert_eq!(lexicon::split_compound_word(&too_long), vec![too_long.clone()]);
    assert!(lexicon::filter_valid_words([too_long.as_str()]).is_empty());
}

#[test]
fn test_spelling_error_diagnostic() {
    assert!(lexicon::is_possible_spelling_error(""));
    assert!(lexicon::is_possible_spelling_error("   "));
    assert!(lexicon::is_possible_spelling_error("queueing"));
    assert!(!lexicon::is_possible_spelling_error("apples"));
}

#[test]
fn test_basic_words() {
    assert!(lexicon::is_basic_word("THE"));
    assert!(lexicon::is_basic_word(" people "));
    assert!(!lexicon::is_basic_word("photosynthesis"));
}

#[test]
fn test_configured_filter() {
    let config = WordFilterConfig::from_json_str(
        r#"{"split_compounds": false, "extra_basic_words": ["museum"]}"#,
    )
    .unwrap();
    let filter = WordFilter::with_config(config).unwrap();

    assert!(filter.is_basic_word("Museum"));
    assert!(filter.filter_valid_words(["greatStrengths"]).is_empty());
    assert_eq!(filter.extract_valid_words("I love apples."), vec!["love", "apples"]);
}
