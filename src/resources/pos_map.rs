//! Mapping from language-specific POS tags to universal tags.
//!
//! Loaded from a whitespace-separated file with one `(source, universal)`
//! pair per line. The parser itself never loads this file; callers use it to
//! populate the POS field the universal rules read.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::error::ResourceError;
use crate::types::Sentence;

/// A POS tag conversion table.
#[derive(Debug, Clone, Default)]
pub struct PosTagMap {
    conversions: FxHashMap<String, String>,
}

impl PosTagMap {
    /// Load a mapping file: two whitespace-separated fields per line, blank
    /// lines ignored. A line with fewer than two fields fails fast.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut conversions = FxHashMap::default();
        for (lineno, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some(source), Some(universal)) => {
                    conversions.insert(source.to_string(), universal.to_string());
                }
                _ => {
                    return Err(ResourceError::Malformed {
                        path: path.to_path_buf(),
                        line: lineno + 1,
                        message: "expected two whitespace-separated tags".into(),
                    })
                }
            }
        }
        Ok(Self { conversions })
    }

    /// Build a map from pairs. Mainly for tests.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            conversions: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Convert a tag; unmapped tags pass through unchanged.
    pub fn convert<'a>(&'a self, tag: &'a str) -> &'a str {
        self.conversions.get(tag).map(String::as_str).unwrap_or(tag)
    }

    /// A copy of the sentence with every POS tag converted.
    pub fn convert_sentence(&self, sentence: &Sentence) -> Sentence {
        Sentence::new(
            sentence
                .tokens()
                .iter()
                .map(|token| {
                    let mut token = token.clone();
                    if let Some(pos) = &token.pos {
                        token.pos = Some(self.convert(pos).to_string());
                    }
                    token
                })
                .collect(),
        )
    }

    /// Number of mapped tags.
    pub fn len(&self) -> usize {
        self.conversions.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.conversions.is_empty()
    }
}
