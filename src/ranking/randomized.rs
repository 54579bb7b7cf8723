//! Random baseline ranking.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::ParseError;
use crate::graph::matrix::AdjacencyMatrix;
use crate::ranking::RankingStrategy;
use crate::types::{RankedToken, Sentence};

/// Assigns each token a uniform random score in `[0, 1)` and sorts
/// descending. Establishes the chance baseline for attachment accuracy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomizedRanker {
    seed: Option<u64>,
}

impl RandomizedRanker {
    /// An unseeded ranker drawing from entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// A deterministic ranker for reproducible experiments.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl RankingStrategy for RandomizedRanker {
    fn rank(
        &self,
        sentence: &Sentence,
        _matrix: &mut AdjacencyMatrix,
    ) -> Result<Vec<RankedToken>, ParseError> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut ranking: Vec<RankedToken> = (0..sentence.len())
            .map(|i| RankedToken::new(rng.gen::<f64>(), i))
            .collect();
        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(ranking)
    }
}
