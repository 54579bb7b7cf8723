//! Square adjacency matrix with sparse row storage.
//!
//! `matrix[i][j]` is the accumulated link strength from token `i` to token
//! `j`. Rows are `FxHashMap`s for O(1) weight accumulation during graph
//! construction; ranking takes a sorted snapshot of each row so iteration
//! order is deterministic.

use rustc_hash::FxHashMap;

use crate::error::ParseError;

/// An n×n matrix of non-negative edge weights.
///
/// Built fresh per sentence (and per pass), mutated only during graph
/// construction, then treated as read-only input to ranking. The type is
/// square by construction; importing or merging mismatched data fails fast.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyMatrix {
    rows: Vec<FxHashMap<u32, f64>>,
}

impl AdjacencyMatrix {
    /// Create an n×n zero matrix.
    pub fn new(n: usize) -> Self {
        Self {
            rows: vec![FxHashMap::default(); n],
        }
    }

    /// Import a dense row-major matrix, failing fast on non-square or
    /// negative input.
    pub fn from_rows(data: &[Vec<f64>]) -> Result<Self, ParseError> {
        let n = data.len();
        let mut matrix = Self::new(n);
        for (i, row) in data.iter().enumerate() {
            if row.len() != n {
                return Err(ParseError::NotSquare {
                    rows: n,
                    row: i,
                    cols: row.len(),
                });
            }
            for (j, &weight) in row.iter().enumerate() {
                if weight < 0.0 {
                    return Err(ParseError::NegativeWeight {
                        row: i,
                        col: j,
                        weight,
                    });
                }
                if weight > 0.0 {
                    matrix.rows[i].insert(j as u32, weight);
                }
            }
        }
        Ok(matrix)
    }

    /// Number of nodes (rows/columns).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix has zero nodes.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Add `weight` to the edge from `i` to `j`.
    pub fn add(&mut self, i: usize, j: usize, weight: f64) {
        debug_assert!(weight >= 0.0, "edge weights are non-negative");
        *self.rows[i].entry(j as u32).or_insert(0.0) += weight;
    }

    /// The weight of the edge from `i` to `j` (0.0 if absent).
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i].get(&(j as u32)).copied().unwrap_or(0.0)
    }

    /// Sum of all outgoing weights of node `i`.
    pub fn row_sum(&self, i: usize) -> f64 {
        self.rows[i].values().sum()
    }

    /// The outgoing edges of node `i`, sorted by target for deterministic
    /// iteration.
    pub fn sorted_row(&self, i: usize) -> Vec<(u32, f64)> {
        let mut entries: Vec<_> = self.rows[i].iter().map(|(&j, &w)| (j, w)).collect();
        entries.sort_by_key(|(j, _)| *j);
        entries
    }

    /// Total number of non-zero entries.
    pub fn edge_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).sum()
    }

    /// Add every entry of `other` into this matrix. Fails fast on a size
    /// mismatch instead of truncating.
    pub fn merge(&mut self, other: &AdjacencyMatrix) -> Result<(), ParseError> {
        if other.len() != self.len() {
            return Err(ParseError::DimensionMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        for (i, row) in other.rows.iter().enumerate() {
            for (&j, &weight) in row {
                *self.rows[i].entry(j).or_insert(0.0) += weight;
            }
        }
        Ok(())
    }
}
