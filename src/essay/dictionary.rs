//! Dictionary lookups for extracted words.
//!
//! Real providers (online dictionaries, translation APIs) live outside this
//! crate and plug in through the [`Dictionary`] trait. [`StaticDictionary`]
//! serves entries from memory or a JSON file:
//!
//! ```json
//! {
//!   "ambition": {
//!     "phonetic": "/æmˈbɪʃən/",
//!     "definitions": ["a strong desire to achieve something"],
//!     "examples": ["Her ambition was to become a pilot."]
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordsieveError};

/// Definition shown when a lookup fails.
pub const PLACEHOLDER_DEFINITION: &str = "No definition available";

/// Dictionary data for one word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub phonetic: String,
    pub definitions: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl DictionaryEntry {
    /// Create an entry without examples.
    pub fn new<S: Into<String>>(phonetic: S, definitions: Vec<String>) -> Self {
        DictionaryEntry {
            phonetic: phonetic.into(),
            definitions,
            examples: Vec::new(),
        }
    }

    /// Add usage examples.
    pub fn with_examples(mut self, examples: Vec<String>) -> Self {
        self.examples = examples;
        self
    }

    /// The entry used when a provider cannot answer.
    pub fn placeholder() -> Self {
        DictionaryEntry::new("", vec![PLACEHOLDER_DEFINITION.to_string()])
    }

    /// Check if this is the placeholder entry.
    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}

/// A source of dictionary entries.
pub trait Dictionary: Send + Sync + Debug {
    /// Look up a lower-cased word.
    fn lookup(&self, word: &str) -> Result<DictionaryEntry>;

    /// Look up a word, falling back to the placeholder on failure.
    fn lookup_or_placeholder(&self, word: &str) -> DictionaryEntry {
        match self.lookup(word) {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Dictionary {} failed for {word:?}: {e}", self.name());
                DictionaryEntry::placeholder()
            }
        }
    }

    /// Get the name of this dictionary (for logging).
    fn name(&self) -> &str;
}

/// An in-memory dictionary.
#[derive(Clone, Debug, Default)]
pub struct StaticDictionary {
    entries: HashMap<String, DictionaryEntry>,
}

impl StaticDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary from a JSON object keyed by word.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, DictionaryEntry> = serde_json::from_str(json)?;
        Ok(StaticDictionary {
            entries: raw
                .into_iter()
                .map(|(word, entry)| (word.trim().to_lowercase(), entry))
                .collect(),
        })
    }

    /// Load a dictionary from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Add or replace an entry.
    pub fn insert<S: AsRef<str>>(&mut self, word: S, entry: DictionaryEntry) {
        self.entries
            .insert(word.as_ref().trim().to_lowercase(), entry);
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dictionary for StaticDictionary {
    fn lookup(&self, word: &str) -> Result<DictionaryEntry> {
        self.entries
            .get(&word.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| WordsieveError::dictionary(format!("no entry for {word:?}")))
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DICTIONARY_JSON: &str = r#"{
        "Ambition": {
            "phonetic": "/æmˈbɪʃən/",
            "definitions": ["a strong desire to achieve something"]
        },
        "museum": {
            "phonetic": "/mjuˈziːəm/",
            "definitions": ["a building where objects are displayed"],
            "examples": ["We visited the museum."]
        }
    }"#;

    #[test]
    fn test_from_json_str() {
        let dictionary = StaticDictionary::from_json_str(DICTIONARY_JSON).unwrap();
        assert_eq!(dictionary.len(), 2);

        let entry = dictionary.lookup("ambition").unwrap();
        assert_eq!(entry.phonetic, "/æmˈbɪʃən/");
        assert!(entry.examples.is_empty());

        let entry = dictionary.lookup("Museum").unwrap();
        assert_eq!(entry.examples, vec!["We visited the museum.".to_string()]);
    }

    #[test]
    fn test_missing_word() {
        let dictionary = StaticDictionary::new();
        assert!(dictionary.is_empty());
        assert!(matches!(
            dictionary.lookup("zebra"),
            Err(WordsieveError::Dictionary(_))
        ));
        assert!(dictionary.lookup_or_placeholder("zebra").is_placeholder());
    }

    #[test]
    fn test_insert() {
        let mut dictionary = StaticDictionary::new();
        dictionary.insert(
            "Zebra",
            DictionaryEntry::new("/ˈziːbrə/", vec!["a striped animal".to_string()]),
        );
        assert_eq!(dictionary.lookup("zebra").unwrap().phonetic, "/ˈziːbrə/");
    }

    #[test]
    fn test_placeholder() {
        let placeholder = DictionaryEntry::placeholder();
        assert_eq!(placeholder.definitions, vec![PLACEHOLDER_DEFINITION.to_string()]);
        assert!(placeholder.phonetic.is_empty());
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");
        fs::write(&path, DICTIONARY_JSON).unwrap();

        let dictionary = StaticDictionary::from_json_file(&path).unwrap();
        assert_eq!(dictionary.len(), 2);
    }
}
