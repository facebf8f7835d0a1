//! Paragraph translation.

use std::fmt::{self, Debug};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Message shown in place of a translation that failed.
pub const TRANSLATION_UNAVAILABLE: &str = "Translation unavailable";

/// Languages supported by the translation collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Chinese,
}

impl Language {
    /// The ISO 639-1 code of this language.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A translation provider.
pub trait Translator: Send + Sync + Debug {
    /// Translate `text` from `source` to `target`.
    fn translate(&self, text: &str, source: Language, target: Language) -> Result<String>;

    /// Translate, falling back to [`TRANSLATION_UNAVAILABLE`] on failure.
    fn translate_or_unavailable(&self, text: &str, source: Language, target: Language) -> String {
        match self.translate(text, source, target) {
            Ok(translation) => translation,
            Err(e) => {
                log::warn!(
                    "Translator {} failed ({source} -> {target}): {e}",
                    self.name()
                );
                TRANSLATION_UNAVAILABLE.to_string()
            }
        }
    }

    /// Get the name of this translator (for logging).
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordsieveError;

    #[derive(Debug)]
    struct Failing;

    impl Translator for Failing {
        fn translate(&self, _text: &str, _source: Language, _target: Language) -> Result<String> {
            Err(WordsieveError::translation("quota exceeded"))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Chinese.to_string(), "zh");
        assert_eq!(serde_json::to_string(&Language::Chinese).unwrap(), "\"chinese\"");
    }

    #[test]
    fn test_fallback_message() {
        let translation =
            Failing.translate_or_unavailable("Hello", Language::English, Language::Chinese);
        assert_eq!(translation, TRANSLATION_UNAVAILABLE);
    }
}
