//! Function-word lexicon.
//!
//! A set of closed-class words (determiners, prepositions, …) used to bias
//! edge construction: function words receive extra incoming links from their
//! immediate neighbors. Membership is case-insensitive.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::error::ResourceError;

/// A set of lowercase function words.
#[derive(Debug, Clone, Default)]
pub struct FunctionWords {
    words: FxHashSet<String>,
}

impl FunctionWords {
    /// An empty lexicon (no token counts as a function word).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a newline-separated word list. Lines are trimmed and
    /// lowercased; blank lines are ignored.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let words = contents
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();
        Ok(Self { words })
    }

    /// Build a lexicon from a slice of words.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Use the closed-class word list shipped by the `stop-words` crate for
    /// the given language code. Falls back to English for unknown codes.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "da" | "danish" => LANGUAGE::Danish,
            _ => LANGUAGE::English,
        };
        Self {
            words: get(lang).into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of words in the lexicon.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
