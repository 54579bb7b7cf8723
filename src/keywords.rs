//! TextRank keyword extraction over a co-occurrence graph.
//!
//! A lightweight second consumer of the rank engine (Mihalcea and Tarau
//! 2004), mainly used to bootstrap function-word lists for languages without
//! a curated one: the highest-ranked words of a large corpus are almost
//! always closed-class words.
//!
//! Input is one sentence per line, words separated by whitespace. Words
//! within a line are pairwise linked (symmetric, weight 1 per co-occurrence);
//! words without a single alphanumeric character are skipped.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::error::ResourceError;
use crate::graph::matrix::AdjacencyMatrix;
use crate::pagerank::PageRank;

/// Keyword extractor configuration. The defaults are deliberately coarse
/// (few iterations, loose convergence): corpus-level graphs are large and
/// the top of the ranking stabilizes early.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    pub damping: f64,
    pub convergence_delta: f64,
    pub max_iterations: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self {
            damping: 0.85,
            convergence_delta: 1e-4,
            max_iterations: 20,
        }
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the `top_n` highest-ranked words from the given lines.
    ///
    /// Ties keep first-occurrence order (the score sort is stable).
    pub fn extract<'a, I>(&self, lines: I, top_n: usize) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut indices: FxHashMap<String, u32> = FxHashMap::default();
        let mut vocabulary: Vec<String> = Vec::new();
        let mut indexed_lines: Vec<Vec<u32>> = Vec::new();

        for line in lines {
            let word_ids = line
                .split_whitespace()
                .filter(|word| word.chars().any(char::is_alphanumeric))
                .map(|word| match indices.get(word) {
                    Some(&id) => id,
                    None => {
                        let id = vocabulary.len() as u32;
                        indices.insert(word.to_string(), id);
                        vocabulary.push(word.to_string());
                        id
                    }
                })
                .collect::<Vec<u32>>();
            indexed_lines.push(word_ids);
        }

        let mut matrix = AdjacencyMatrix::new(vocabulary.len());
        for word_ids in &indexed_lines {
            for (i, &a) in word_ids.iter().enumerate() {
                for &b in &word_ids[..i] {
                    matrix.add(a as usize, b as usize, 1.0);
                    matrix.add(b as usize, a as usize, 1.0);
                }
            }
        }

        let scores = PageRank::new()
            .with_damping(self.damping)
            .with_convergence_delta(self.convergence_delta)
            .with_max_iterations(self.max_iterations)
            .rank(&matrix);

        let mut ranked: Vec<(f64, String)> = scores.into_iter().zip(vocabulary).collect();
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
        ranked.truncate(top_n);
        ranked.into_iter().map(|(_, word)| word).collect()
    }

    /// Extract keywords from a UTF-8 text file, one sentence per line.
    pub fn extract_from_file(
        &self,
        path: impl AsRef<Path>,
        top_n: usize,
    ) -> Result<Vec<String>, ResourceError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.extract(contents.lines(), top_n))
    }
}
