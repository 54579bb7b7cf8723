//! Gold-tree oracle ranking.

use std::collections::VecDeque;

use crate::error::ParseError;
use crate::graph::matrix::AdjacencyMatrix;
use crate::ranking::RankingStrategy;
use crate::types::{DependencyEdge, RankedToken, Sentence};

/// Root score in the oracle ranking; each tree level below subtracts one.
const ROOT_SCORE: f64 = 1000.0;

/// Ranks tokens by their depth in a gold dependency tree.
///
/// Used to establish the skyline: with a perfect ranking, how well can the
/// greedy nearest-head attachment do? Roots come first at a fixed score,
/// then their subtrees in breadth-first order, one score point lower per
/// level. Multiple roots are supported (some treebanks use them). Tokens
/// without a gold annotation are appended at score zero.
///
/// The gold edges must form a forest over the sentence; edges referring to
/// positions outside the sentence are ignored.
#[derive(Debug, Clone, Default)]
pub struct OracleRanker {
    gold: Vec<DependencyEdge>,
}

impl OracleRanker {
    pub fn new(gold: Vec<DependencyEdge>) -> Self {
        Self { gold }
    }
}

impl RankingStrategy for OracleRanker {
    fn rank(
        &self,
        sentence: &Sentence,
        _matrix: &mut AdjacencyMatrix,
    ) -> Result<Vec<RankedToken>, ParseError> {
        let n = sentence.len();

        let mut governor_of: Vec<Option<usize>> = vec![None; n];
        for edge in &self.gold {
            if edge.dependent < n && edge.governor < n {
                governor_of[edge.dependent] = Some(edge.governor);
            }
        }

        let mut roots = Vec::new();
        let mut unannotated = Vec::new();
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
        for (i, governor) in governor_of.iter().enumerate() {
            match governor {
                None => unannotated.push(i),
                Some(g) if *g == i => roots.push(i),
                Some(g) => children[*g].push(i),
            }
        }

        let mut ranking = Vec::with_capacity(n);
        let mut queue: VecDeque<(usize, f64)> =
            roots.into_iter().map(|root| (root, ROOT_SCORE)).collect();
        while let Some((index, score)) = queue.pop_front() {
            ranking.push(RankedToken::new(score, index));
            for &child in &children[index] {
                queue.push_back((child, score - 1.0));
            }
        }

        for index in unannotated {
            ranking.push(RankedToken::new(0.0, index));
        }

        Ok(ranking)
    }
}
