//! Token ranking strategies
//!
//! This module provides the ranking strategies that drive tree construction:
//! - SalienceRanker: PageRank over the heuristic token graph (the parser proper)
//! - LinearRanker: surface order, producing right-branching (or, inverted,
//!   left-branching) baseline trees
//! - RandomizedRanker: uniform random scores, the chance baseline
//! - OracleRanker: ranks by gold-tree depth, the skyline

pub mod linear;
pub mod oracle;
pub mod randomized;
pub mod salience;

pub use linear::LinearRanker;
pub use oracle::OracleRanker;
pub use randomized::RandomizedRanker;
pub use salience::SalienceRanker;

use crate::error::ParseError;
use crate::graph::matrix::AdjacencyMatrix;
use crate::types::{RankedToken, Sentence};

/// Produces the token ordering that tree construction consumes.
///
/// The returned sequence contains every token of the sentence exactly once;
/// its *order* is authoritative — the first element becomes the root, and
/// each later element attaches to a head among the earlier ones. Scores are
/// carried along only for the final head-selection tie-break.
///
/// `matrix` holds pre-existing links between tokens (e.g. feedback from a
/// first parsing pass). Graph-based strategies add their discovered links to
/// it; baselines leave it untouched.
pub trait RankingStrategy {
    fn rank(
        &self,
        sentence: &Sentence,
        matrix: &mut AdjacencyMatrix,
    ) -> Result<Vec<RankedToken>, ParseError>;
}
