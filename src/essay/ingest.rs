//! Essay ingestion pipeline.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use wordsieve::essay::{DictionaryEntry, EssayIngestor, StaticDictionary};
//!
//! let mut dictionary = StaticDictionary::new();
//! dictionary.insert(
//!     "ambition",
//!     DictionaryEntry::new("/æmˈbɪʃən/", vec!["a strong desire to achieve something".into()]),
//! );
//!
//! let ingestor = EssayIngestor::new().with_dictionary(Arc::new(dictionary));
//! let essay = ingestor
//!     .ingest("My dream", "My ambition is simple.\n\nI want to fly.")
//!     .unwrap();
//!
//! assert_eq!(essay.paragraphs.len(), 2);
//! assert_eq!(essay.vocabulary(), vec!["ambition", "simple", "want", "fly"]);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::vocabulary::VocabularyAnalyzer;
use crate::error::Result;
use crate::essay::dictionary::{Dictionary, DictionaryEntry};
use crate::essay::translator::{Language, Translator};
use crate::lexicon::WordFilter;

/// One word of a paragraph's vocabulary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// The lower-cased word
    pub word: String,

    /// Byte offset of the first occurrence inside the paragraph text
    pub offset: usize,

    /// Whether the learner is presumed to know the word already
    pub is_basic: bool,

    /// Dictionary data; absent for basic words or without a dictionary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<DictionaryEntry>,
}

/// A paragraph of an ingested essay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub index: usize,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    pub words: Vec<VocabularyEntry>,
}

/// An ingested essay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Essay {
    pub title: String,
    pub paragraphs: Vec<Paragraph>,
}

impl Essay {
    /// Words worth studying across the whole essay, in order of first
    /// occurrence.
    pub fn vocabulary(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.paragraphs
            .iter()
            .flat_map(|p| p.words.iter())
            .filter(|w| !w.is_basic)
            .map(|w| w.word.as_str())
            .filter(|w| seen.insert(*w))
            .collect()
    }

    /// Total number of vocabulary entries over all paragraphs.
    pub fn word_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.words.len()).sum()
    }
}

/// Turns essay text into paragraphs annotated with vocabulary.
#[derive(Clone)]
pub struct EssayIngestor {
    analyzer: VocabularyAnalyzer,
    dictionary: Option<Arc<dyn Dictionary>>,
    translator: Option<Arc<dyn Translator>>,
    source: Language,
    target: Language,
}

impl EssayIngestor {
    /// Create an ingestor with the default word filter and no collaborators.
    pub fn new() -> Self {
        Self::with_word_filter(WordFilter::new())
    }

    /// Create an ingestor around a configured word filter.
    pub fn with_word_filter(word_filter: WordFilter) -> Self {
        EssayIngestor {
            analyzer: VocabularyAnalyzer::with_word_filter(word_filter).mark_basic_words(),
            dictionary: None,
            translator: None,
            source: Language::English,
            target: Language::Chinese,
        }
    }

    /// Look up non-basic words in `dictionary`.
    pub fn with_dictionary(mut self, dictionary: Arc<dyn Dictionary>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Translate paragraphs with `translator`.
    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Set the translation direction (English to Chinese by default).
    pub fn with_languages(mut self, source: Language, target: Language) -> Self {
        self.source = source;
        self.target = target;
        self
    }

    /// Ingest an essay.
    ///
    /// Paragraphs are the non-blank lines of `text`.
    pub fn ingest(&self, title: &str, text: &str) -> Result<Essay> {
        let paragraphs = split_paragraphs(text)
            .enumerate()
            .map(|(index, paragraph)| self.ingest_paragraph(index, paragraph))
            .collect::<Result<Vec<_>>>()?;

        let essay = Essay {
            title: title.trim().to_string(),
            paragraphs,
        };
        info!(
            "Ingested essay {:?}: {} paragraphs, {} words",
            essay.title,
            essay.paragraphs.len(),
            essay.word_count()
        );
        Ok(essay)
    }

    fn ingest_paragraph(&self, index: usize, text: &str) -> Result<Paragraph> {
        let words = self
            .analyzer
            .analyze(text)?
            .map(|token| {
                let is_basic = token.is_stopped();
                let entry = match &self.dictionary {
                    Some(dictionary) if !is_basic => {
                        Some(dictionary.lookup_or_placeholder(&token.text))
                    }
                    _ => None,
                };
                VocabularyEntry {
                    word: token.text,
                    offset: token.start_offset,
                    is_basic,
                    entry,
                }
            })
            .collect::<Vec<_>>();
        debug!("Paragraph {index}: {} words", words.len());

        let translation = self
            .translator
            .as_ref()
            .map(|t| t.translate_or_unavailable(text, self.source, self.target));

        Ok(Paragraph {
            index,
            text: text.to_string(),
            translation,
            words,
        })
    }
}

impl Default for EssayIngestor {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-blank, trimmed lines of an essay.
pub fn split_paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}
