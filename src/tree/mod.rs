//! Greedy dependency tree assembly from a token ranking.
//!
//! The first token of the ranking becomes the root (emitted as a self-loop
//! edge). Every following token attaches to one of the already-placed
//! tokens, so the result is single-rooted and cycle-free by construction —
//! a governor always precedes its dependent in the ranking.
//!
//! Head selection among the placed tokens is a three-level preference:
//!
//! 1. candidates that match a universal head rule or share a multi-word
//!    expression with the dependent beat all candidates that do not,
//! 2. within the same level, smaller surface distance wins,
//! 3. on equal distance, the higher-scored candidate wins.
//!
//! Remaining exact ties go to the candidate that was placed earliest.

use rustc_hash::FxHashSet;

use crate::graph::matrix::AdjacencyMatrix;
use crate::resources::mwe::shares_mwe;
use crate::resources::LexicalResources;
use crate::types::{DependencyEdge, ParserConfig, RankedToken, Sentence};

/// Assembles dependency attachments from a ranking.
#[derive(Debug)]
pub struct TreeBuilder<'a> {
    config: &'a ParserConfig,
    resources: &'a LexicalResources,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(config: &'a ParserConfig, resources: &'a LexicalResources) -> Self {
        Self { config, resources }
    }

    /// Build the output edges: the root self-loop followed by one `Dep` edge
    /// per remaining token, in ranking order.
    pub fn build_edges(
        &self,
        sentence: &Sentence,
        ranking: &[RankedToken],
        mwe_sets: &[FxHashSet<u32>],
    ) -> Vec<DependencyEdge> {
        let mut edges = Vec::with_capacity(ranking.len());
        if let Some(root) = ranking.first() {
            edges.push(DependencyEdge::root(root.index));
        }
        self.attach(sentence, ranking, mwe_sets, |dependent, governor| {
            edges.push(DependencyEdge::dep(dependent, governor));
        });
        edges
    }

    /// First-pass feedback: instead of edges, return a matrix of link
    /// increments — one dependent→governor entry per attachment, weighted by
    /// the configured two-pass link weight. The root contributes nothing.
    pub fn feedback_links(
        &self,
        sentence: &Sentence,
        ranking: &[RankedToken],
        mwe_sets: &[FxHashSet<u32>],
    ) -> AdjacencyMatrix {
        let mut increments = AdjacencyMatrix::new(sentence.len());
        let weight = self.config.two_pass_link_weight;
        self.attach(sentence, ranking, mwe_sets, |dependent, governor| {
            increments.add(dependent, governor, weight);
        });
        increments
    }

    /// Run the greedy attachment loop, reporting each (dependent, governor)
    /// pair in ranking order.
    fn attach<F: FnMut(usize, usize)>(
        &self,
        sentence: &Sentence,
        ranking: &[RankedToken],
        mwe_sets: &[FxHashSet<u32>],
        mut emit: F,
    ) {
        let Some((root, rest)) = ranking.split_first() else {
            return;
        };
        let mut heads = Vec::with_capacity(ranking.len());
        heads.push(*root);

        for &dependent in rest {
            let governor = self.select_head(sentence, &heads, mwe_sets, dependent);
            emit(dependent.index, governor);
            heads.push(dependent);
        }
    }

    fn select_head(
        &self,
        sentence: &Sentence,
        heads: &[RankedToken],
        mwe_sets: &[FxHashSet<u32>],
        dependent: RankedToken,
    ) -> usize {
        let mut best = heads[0];
        let mut best_preferred = self.is_preferred(sentence, mwe_sets, heads[0], dependent);
        let mut best_distance = heads[0].index.abs_diff(dependent.index);

        for &candidate in &heads[1..] {
            let preferred = self.is_preferred(sentence, mwe_sets, candidate, dependent);
            if preferred != best_preferred {
                if !preferred {
                    continue;
                }
            } else {
                let distance = candidate.index.abs_diff(dependent.index);
                if distance > best_distance
                    || (distance == best_distance && candidate.score <= best.score)
                {
                    continue;
                }
            }
            best = candidate;
            best_preferred = preferred;
            best_distance = candidate.index.abs_diff(dependent.index);
        }

        best.index
    }

    /// Whether the candidate is preferred as a head outright: a universal
    /// rule allows the POS pair, or the two tokens sit in a common MWE.
    fn is_preferred(
        &self,
        sentence: &Sentence,
        mwe_sets: &[FxHashSet<u32>],
        head: RankedToken,
        dependent: RankedToken,
    ) -> bool {
        if self.config.use_universal_rules
            && self
                .resources
                .rules
                .matches(sentence.pos(head.index), sentence.pos(dependent.index))
        {
            return true;
        }
        shares_mwe(&mwe_sets[head.index], &mwe_sets[dependent.index])
    }
}
