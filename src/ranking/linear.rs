//! Surface-order baseline ranking.

use crate::error::ParseError;
use crate::graph::matrix::AdjacencyMatrix;
use crate::ranking::RankingStrategy;
use crate::types::{RankedToken, Sentence};

/// Ranks tokens in surface order, without looking at the graph.
///
/// The plain variant yields the first token as root and every later token
/// attaching to an earlier one, so trees come out right-branching. The
/// inverted variant reverses the order and produces left-branching trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearRanker {
    invert: bool,
}

impl LinearRanker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reverse the ranking (last token first).
    pub fn inverted() -> Self {
        Self { invert: true }
    }
}

impl RankingStrategy for LinearRanker {
    fn rank(
        &self,
        sentence: &Sentence,
        _matrix: &mut AdjacencyMatrix,
    ) -> Result<Vec<RankedToken>, ParseError> {
        let n = sentence.len();
        let ranking = if self.invert {
            (0..n)
                .rev()
                .map(|i| RankedToken::new((n - i) as f64, i))
                .collect()
        } else {
            (0..n).map(|i| RankedToken::new(i as f64, i)).collect()
        };
        Ok(ranking)
    }
}
