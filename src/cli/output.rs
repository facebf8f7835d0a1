//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordsieveArgs};
use crate::error::Result;
use crate::essay::Essay;
use crate::lexicon::{Rejection, RejectionCategory};

/// Result structure for a word check.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub word: String,
    pub valid: bool,
    pub rejection: Option<Rejection>,
    pub category: Option<RejectionCategory>,
    pub possible_spelling_error: bool,
    pub basic: bool,
}

/// Result structure for a compound split.
#[derive(Debug, Serialize, Deserialize)]
pub struct SplitResult {
    pub token: String,
    pub parts: Vec<String>,
}

/// One extracted word.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractedWord {
    pub word: String,
    pub basic: bool,
}

/// Result structure for word extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResult {
    pub words: Vec<ExtractedWord>,
    pub total: usize,
}

/// Types that can be printed for a human reader.
pub trait HumanOutput {
    /// Render as plain text lines.
    fn human_lines(&self) -> Vec<String>;
}

impl HumanOutput for Vec<CheckResult> {
    fn human_lines(&self) -> Vec<String> {
        self.iter()
            .map(|r| {
                let status = match &r.rejection {
                    None => "valid".to_string(),
                    Some(rejection) => format!("invalid ({rejection})"),
                };
                let mut line = format!("{}: {status}", r.word);
                if r.possible_spelling_error {
                    line.push_str(", possible spelling error");
                }
                if r.basic {
                    line.push_str(", basic");
                }
                line
            })
            .collect()
    }
}

impl HumanOutput for Vec<SplitResult> {
    fn human_lines(&self) -> Vec<String> {
        self.iter()
            .map(|r| format!("{} → {}", r.token, r.parts.join(" + ")))
            .collect()
    }
}

impl HumanOutput for ExtractResult {
    fn human_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .words
            .iter()
            .map(|w| {
                if w.basic {
                    format!("{} (basic)", w.word)
                } else {
                    w.word.clone()
                }
            })
            .collect();
        lines.push(format!("Total words: {}", self.total));
        lines
    }
}

impl HumanOutput for Essay {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone(), "═".repeat(self.title.chars().count())];
        for paragraph in &self.paragraphs {
            lines.push(String::new());
            lines.push(format!("[{}] {}", paragraph.index + 1, paragraph.text));
            if let Some(translation) = &paragraph.translation {
                lines.push(format!("    {translation}"));
            }
            for word in paragraph.words.iter().filter(|w| !w.is_basic) {
                let mut line = format!("  - {}", word.word);
                if let Some(entry) = &word.entry {
                    if !entry.phonetic.is_empty() {
                        line.push_str(&format!(" {}", entry.phonetic));
                    }
                    if let Some(definition) = entry.definitions.first() {
                        line.push_str(&format!(": {definition}"));
                    }
                }
                lines.push(line);
            }
        }
        lines.push(String::new());
        lines.push(format!("Vocabulary: {} words", self.vocabulary().len()));
        lines
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &WordsieveArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &WordsieveArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    for line in result.human_lines() {
        println!("{line}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordsieveArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
