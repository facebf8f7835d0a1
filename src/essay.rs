//! Essay ingestion.
//!
//! Splits an essay into paragraphs, extracts each paragraph's vocabulary
//! with the word filter, and enriches it through two collaborators: a
//! [`Dictionary`](dictionary::Dictionary) for word lookups and a
//! [`Translator`](translator::Translator) for paragraph translations.
//! Both collaborators are optional and their failures never abort
//! ingestion.

pub mod dictionary;
pub mod ingest;
pub mod translator;

pub use dictionary::{Dictionary, DictionaryEntry, PLACEHOLDER_DEFINITION, StaticDictionary};
pub use ingest::{Essay, EssayIngestor, Paragraph, VocabularyEntry};
pub use translator::{Language, TRANSLATION_UNAVAILABLE, Translator};
