//! Multi-word-expression lexicon.
//!
//! Maps a space-joined token sequence to a significance score obtained from
//! some corpus (DRUID data format). Two tokens of a sentence are
//! "MWE-linked" when they fall inside a common span whose score clears the
//! configured threshold.

use std::fs;
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::ResourceError;

/// A loaded MWE score table.
#[derive(Debug, Clone, Default)]
pub struct MweLexicon {
    entries: FxHashMap<String, f64>,
}

impl MweLexicon {
    /// A lexicon with no entries; every token gets an empty membership set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read a file in DRUID format — one entry per line:
    ///
    /// ```text
    /// <token count> \t <space separated tokens> \t <score> \t <ignored...>
    /// ```
    ///
    /// Unigrams are discarded, as are entries scoring below `min_score`.
    pub fn from_file(path: impl AsRef<Path>, min_score: f64) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = FxHashMap::default();
        for (lineno, line) in contents.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let mut parts = line.split('\t');
            let (count, words, score) = match (parts.next(), parts.next(), parts.next()) {
                (Some(count), Some(words), Some(score)) => (count, words, score),
                _ => {
                    return Err(ResourceError::Malformed {
                        path: path.to_path_buf(),
                        line: lineno + 1,
                        message: "expected at least 3 tab-separated fields".into(),
                    })
                }
            };
            let count: usize = count.parse().map_err(|_| ResourceError::Malformed {
                path: path.to_path_buf(),
                line: lineno + 1,
                message: format!("invalid token count {count:?}"),
            })?;
            let score: f64 = score.parse().map_err(|_| ResourceError::Malformed {
                path: path.to_path_buf(),
                line: lineno + 1,
                message: format!("invalid score {score:?}"),
            })?;
            if count > 1 && score >= min_score {
                entries.insert(words.to_string(), score);
            }
        }

        #[cfg(feature = "tracing")]
        if entries.is_empty() {
            tracing::warn!(path = %path.display(), "found no multi-word expressions in file");
        }

        Ok(Self { entries })
    }

    /// Build a lexicon from (expression, score) pairs. Mainly for tests and
    /// embedded lexicons.
    pub fn from_entries<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// The score of the expression formed by joining `words` with spaces,
    /// or 0.0 if it is not in the table.
    pub fn score(&self, words: &[&str]) -> f64 {
        self.entries.get(&words.join(" ")).copied().unwrap_or(0.0)
    }

    /// Number of loaded expressions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Map each token position to the set of MWE group ids it belongs to.
    ///
    /// Scans the sentence with an increasing window size (2 up to
    /// `max_window`) and assigns a fresh id to every span whose score is at
    /// least `min_score`, merging the id into each covered token's set.
    ///
    /// Example: for `["Barack", "Obama", "visited", "France"]` with
    /// "Barack Obama" in the table, the result is `[{0}, {0}, {}, {}]`.
    pub fn create_mwe_sets(
        &self,
        texts: &[&str],
        max_window: usize,
        min_score: f64,
    ) -> Vec<FxHashSet<u32>> {
        let mut memberships = vec![FxHashSet::default(); texts.len()];

        if self.entries.is_empty() {
            return memberships;
        }

        let mut mwe_id: u32 = 0;
        for window in 2..=max_window {
            for start in 0..texts.len().saturating_sub(window - 1) {
                let span = &texts[start..start + window];
                if self.score(span) >= min_score {
                    for membership in &mut memberships[start..start + window] {
                        membership.insert(mwe_id);
                    }
                    mwe_id += 1;
                }
            }
        }

        memberships
    }
}

/// Whether two membership sets share at least one MWE group id.
pub fn shares_mwe(a: &FxHashSet<u32>, b: &FxHashSet<u32>) -> bool {
    !a.is_disjoint(b)
}
