//! Command implementations for the Wordsieve CLI.

use std::fs;
use std::io::{self, Read};
use std::sync::Arc;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, WordsieveError};
use crate::essay::{EssayIngestor, StaticDictionary};
use crate::lexicon::{WordFilter, WordFilterConfig};

/// Execute a CLI command.
pub fn execute_command(args: WordsieveArgs) -> Result<()> {
    let filter = load_word_filter(&args)?;

    match &args.command {
        Command::Check(check_args) => check_words(check_args, &filter, &args),
        Command::Split(split_args) => split_tokens(split_args, &filter, &args),
        Command::Extract(extract_args) => extract_words(extract_args, &filter, &args),
        Command::Ingest(ingest_args) => ingest_essay(ingest_args, filter, &args),
    }
}

/// Build the word filter from the configuration file, if any.
fn load_word_filter(args: &WordsieveArgs) -> Result<WordFilter> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading word filter configuration from {}", path.display());
            WordFilterConfig::from_json_file(path)?
        }
        None => WordFilterConfig::default(),
    };
    WordFilter::with_config(config)
}

/// Check individual words.
fn check_words(args: &CheckArgs, filter: &WordFilter, cli_args: &WordsieveArgs) -> Result<()> {
    let results: Vec<CheckResult> = args
        .words
        .iter()
        .map(|word| {
            let verdict = filter.validate(word);
            CheckResult {
                valid: verdict.is_valid(),
                category: verdict.rejection.as_ref().map(|r| r.category()),
                rejection: verdict.rejection,
                possible_spelling_error: filter.is_possible_spelling_error(word),
                basic: filter.is_basic_word(word),
                word: verdict.word,
            }
        })
        .collect();

    output_result("Word check", &results, cli_args)
}

/// Split compound tokens.
fn split_tokens(args: &SplitArgs, filter: &WordFilter, cli_args: &WordsieveArgs) -> Result<()> {
    let results: Vec<SplitResult> = args
        .tokens
        .iter()
        .map(|token| SplitResult {
            token: token.trim().to_string(),
            parts: filter.split_compound_word(token),
        })
        .collect();

    output_result("Compound split", &results, cli_args)
}

/// Extract the valid words of a text.
fn extract_words(args: &ExtractArgs, filter: &WordFilter, cli_args: &WordsieveArgs) -> Result<()> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let words: Vec<ExtractedWord> = filter
        .extract_valid_words(&text)
        .into_iter()
        .map(|word| ExtractedWord {
            basic: filter.is_basic_word(&word),
            word,
        })
        .filter(|w| !(args.skip_basic && w.basic))
        .collect();

    let result = ExtractResult {
        total: words.len(),
        words,
    };
    output_result("Extracted words", &result, cli_args)
}

/// Ingest an essay file.
fn ingest_essay(args: &IngestArgs, filter: WordFilter, cli_args: &WordsieveArgs) -> Result<()> {
    if !args.essay_file.exists() {
        return Err(WordsieveError::not_found(
            args.essay_file.display().to_string(),
        ));
    }
    let text = fs::read_to_string(&args.essay_file)?;

    let mut ingestor = EssayIngestor::with_word_filter(filter);
    if let Some(path) = &args.dictionary {
        info!("Loading dictionary from {}", path.display());
        ingestor = ingestor.with_dictionary(Arc::new(StaticDictionary::from_json_file(path)?));
    }

    let title = match &args.title {
        Some(title) => title.clone(),
        None => args
            .essay_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    let essay = ingestor.ingest(&title, &text)?;
    output_result("Essay ingested", &essay, cli_args)
}
