//! Command line argument parsing for the Wordsieve CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Wordsieve - English word validation and vocabulary extraction
#[derive(Parser, Debug, Clone)]
#[command(name = "wordsieve")]
#[command(about = "Validate English words and extract study vocabulary from essays")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordsieveArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Word filter configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDSIEVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordsieveArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check whether words are valid
    Check(CheckArgs),

    /// Split run-together compound words
    Split(SplitArgs),

    /// Extract the valid words of a text
    Extract(ExtractArgs),

    /// Ingest an essay file into annotated paragraphs
    Ingest(IngestArgs),
}

/// Arguments for checking words
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Words to check
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for splitting compound words
#[derive(Parser, Debug, Clone)]
pub struct SplitArgs {
    /// Tokens to split
    #[arg(value_name = "TOKEN", required = true)]
    pub tokens: Vec<String>,
}

/// Arguments for extracting words
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// Text to analyze (read from stdin when neither TEXT nor --file is given)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Leave out words the learner is presumed to know
    #[arg(long)]
    pub skip_basic: bool,
}

/// Arguments for ingesting an essay
#[derive(Parser, Debug, Clone)]
pub struct IngestArgs {
    /// Essay file path (plain text, one paragraph per line)
    #[arg(value_name = "ESSAY_FILE")]
    pub essay_file: PathBuf,

    /// Essay title (defaults to the file stem)
    #[arg(long)]
    pub title: Option<String>,

    /// Dictionary file (JSON object keyed by word)
    #[arg(long, value_name = "DICTIONARY_FILE")]
    pub dictionary: Option<PathBuf>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity() {
        let args = WordsieveArgs::parse_from(["wordsieve", "check", "hello"]);
        assert_eq!(args.verbosity(), 1);

        let args = WordsieveArgs::parse_from(["wordsieve", "-vvv", "check", "hello"]);
        assert_eq!(args.verbosity(), 3);

        let args = WordsieveArgs::parse_from(["wordsieve", "-q", "-vv", "check", "hello"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_parse_extract() {
        let args = WordsieveArgs::parse_from([
            "wordsieve",
            "--format",
            "json",
            "extract",
            "I love apples",
            "--skip-basic",
        ]);
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Extract(extract) => {
                assert_eq!(extract.text.as_deref(), Some("I love apples"));
                assert!(extract.skip_basic);
                assert!(extract.file.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_check_requires_words() {
        assert!(WordsieveArgs::try_parse_from(["wordsieve", "check"]).is_err());
    }
}
