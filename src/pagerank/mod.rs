//! Iterative eigenvector ranking (PageRank) over an adjacency matrix.
//!
//! The engine treats `matrix[i][j]` as the number of directed links from
//! node `i` to node `j`, normalizes each row by its outgoing weight, and
//! iterates
//!
//! ```text
//! s' = damping * Pᵀ s + (1 - damping) / n
//! ```
//!
//! until the summed score change drops below the convergence delta or the
//! iteration budget runs out.
//!
//! Dangling nodes (zero outgoing weight) keep a zero transition row: their
//! mass is simply not redistributed. This diverges from the textbook
//! "random jump" fix on purpose — the salience ranking the parser is built
//! on depends on it.

use crate::graph::matrix::AdjacencyMatrix;

/// Default convergence delta.
pub const DEFAULT_CONVERGENCE: f64 = 1e-8;
/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: usize = 200;
/// Default damping factor for general ranking use.
pub const DEFAULT_DAMPING_FACTOR: f64 = 0.85;

/// PageRank engine.
///
/// With `damping = 1.0` the walk degenerates to pure link-following (no
/// teleportation bias) — this is what salience ranking uses. `0.85` is the
/// usual choice for general graphs such as keyword co-occurrence networks.
#[derive(Debug, Clone)]
pub struct PageRank {
    /// Probability that the surfer follows links rather than teleporting.
    pub damping: f64,
    /// Stop once the summed absolute score change falls below this value.
    pub convergence_delta: f64,
    /// Upper bound on iterations.
    pub max_iterations: usize,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING_FACTOR,
            convergence_delta: DEFAULT_CONVERGENCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl PageRank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_convergence_delta(mut self, delta: f64) -> Self {
        self.convergence_delta = delta;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Compute a score per node. An empty matrix yields an empty vector.
    pub fn rank(&self, matrix: &AdjacencyMatrix) -> Vec<f64> {
        let n = matrix.len();
        if n == 0 {
            return Vec::new();
        }

        // Row-stochastic transition snapshot, sorted per row so summation
        // order is fixed. Dangling rows stay empty.
        let transitions: Vec<Vec<(u32, f64)>> = (0..n)
            .map(|i| {
                let out = matrix.row_sum(i);
                let mut row = matrix.sorted_row(i);
                if out > 0.0 {
                    for (_, weight) in &mut row {
                        *weight /= out;
                    }
                } else {
                    row.clear();
                }
                row
            })
            .collect();

        let teleport = (1.0 - self.damping) / n as f64;
        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];

        for _ in 0..self.max_iterations {
            new_scores.fill(teleport);
            for (i, row) in transitions.iter().enumerate() {
                let mass = self.damping * scores[i];
                for &(j, probability) in row {
                    new_scores[j as usize] += mass * probability;
                }
            }

            let delta: f64 = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);

            if delta < self.convergence_delta {
                break;
            }
        }

        scores
    }
}
