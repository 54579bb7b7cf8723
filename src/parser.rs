//! Parser facade — orchestrates ranking and tree assembly.
//!
//! [`UnsupervisedParser`] bundles a configuration with the lexical resources
//! and runs the pipeline per sentence: rank tokens, then greedily attach
//! each token to a head among the higher-ranked ones. With `two_pass`
//! enabled, the attachments of a first run are fed back into the token graph
//! as extra links before the final run.

use rustc_hash::FxHashSet;

use crate::error::ParseError;
use crate::graph::matrix::AdjacencyMatrix;
use crate::ranking::{RankingStrategy, SalienceRanker};
use crate::resources::LexicalResources;
use crate::tree::TreeBuilder;
use crate::types::{DependencyEdge, ParserConfig, RankedToken, Sentence};

/// Enter a tracing span for a parse pass (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_pass {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("parse_pass", pass = $name).entered();
    };
}

/// The unsupervised dependency parser.
///
/// Sentences are parsed independently; the parser itself is immutable after
/// construction and can be shared across threads.
#[derive(Debug)]
pub struct UnsupervisedParser {
    config: ParserConfig,
    resources: LexicalResources,
}

impl UnsupervisedParser {
    pub fn new(config: ParserConfig, resources: LexicalResources) -> Self {
        Self { config, resources }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn resources(&self) -> &LexicalResources {
        &self.resources
    }

    /// Parse a sentence into dependency edges using PageRank salience.
    ///
    /// An empty sentence yields no edges. Otherwise the result contains one
    /// edge per token: a `Root` self-loop for the highest-ranked token and a
    /// `Dep` edge for every other.
    pub fn parse(&self, sentence: &Sentence) -> Result<Vec<DependencyEdge>, ParseError> {
        self.parse_with(sentence, &SalienceRanker::new(&self.config, &self.resources))
    }

    /// Parse with an alternative ranking strategy (baselines, oracle).
    ///
    /// The two-pass setting applies to alternative strategies as well: the
    /// feedback links of the first run seed the matrix handed to the second.
    pub fn parse_with(
        &self,
        sentence: &Sentence,
        strategy: &dyn RankingStrategy,
    ) -> Result<Vec<DependencyEdge>, ParseError> {
        let seed = AdjacencyMatrix::new(sentence.len());
        if !self.config.two_pass {
            return self.run_pass(sentence, strategy, seed);
        }

        let increments = {
            trace_pass!("feedback");
            let mut graph = seed.clone();
            let ranking = strategy.rank(sentence, &mut graph)?;
            let mwe_sets = self.mwe_sets(sentence);
            TreeBuilder::new(&self.config, &self.resources)
                .feedback_links(sentence, &ranking, &mwe_sets)
        };

        // The second pass starts from a fresh copy of the seed plus the
        // feedback links; the first pass's discovered links are not carried
        // over, the graph rules rediscover them.
        let mut second_seed = seed;
        second_seed.merge(&increments)?;
        self.run_pass(sentence, strategy, second_seed)
    }

    /// Parse many sentences, fanning out across threads. Fails on the first
    /// sentence that errors.
    pub fn parse_corpus(
        &self,
        sentences: &[Sentence],
    ) -> Result<Vec<Vec<DependencyEdge>>, ParseError> {
        use rayon::prelude::*;
        sentences.par_iter().map(|s| self.parse(s)).collect()
    }

    /// Rank the sentence's tokens by PageRank salience. Pre-existing links
    /// in `matrix` are kept; the graph rules add theirs on top.
    pub fn rank_tokens(
        &self,
        sentence: &Sentence,
        matrix: &mut AdjacencyMatrix,
    ) -> Result<Vec<RankedToken>, ParseError> {
        SalienceRanker::new(&self.config, &self.resources).rank(sentence, matrix)
    }

    /// Assemble dependency edges from an existing ranking.
    pub fn build_tree(&self, sentence: &Sentence, ranking: &[RankedToken]) -> Vec<DependencyEdge> {
        let mwe_sets = self.mwe_sets(sentence);
        TreeBuilder::new(&self.config, &self.resources).build_edges(sentence, ranking, &mwe_sets)
    }

    fn run_pass(
        &self,
        sentence: &Sentence,
        strategy: &dyn RankingStrategy,
        mut matrix: AdjacencyMatrix,
    ) -> Result<Vec<DependencyEdge>, ParseError> {
        trace_pass!("parse");
        let ranking = strategy.rank(sentence, &mut matrix)?;
        let mwe_sets = self.mwe_sets(sentence);
        Ok(TreeBuilder::new(&self.config, &self.resources).build_edges(
            sentence,
            &ranking,
            &mwe_sets,
        ))
    }

    fn mwe_sets(&self, sentence: &Sentence) -> Vec<FxHashSet<u32>> {
        let texts = sentence.texts();
        self.resources
            .mwe
            .create_mwe_sets(&texts, self.config.mwe_max_tokens, self.config.mwe_min_score)
    }
}
