//! PageRank salience ranking over the heuristic token graph.

use crate::error::ParseError;
use crate::graph::builder::SentenceGraphBuilder;
use crate::graph::matrix::AdjacencyMatrix;
use crate::pagerank::PageRank;
use crate::ranking::RankingStrategy;
use crate::resources::LexicalResources;
use crate::types::{ParserConfig, RankedToken, Sentence};

/// Ranks tokens by their PageRank score in the token graph.
///
/// The walk runs with damping 1.0: pure link-following, no teleportation, so
/// a token's salience comes entirely from the links the heuristics gave it.
/// Tokens are returned in descending score order; the sort is stable, so
/// equal scores keep surface order.
#[derive(Debug)]
pub struct SalienceRanker<'a> {
    config: &'a ParserConfig,
    resources: &'a LexicalResources,
}

impl<'a> SalienceRanker<'a> {
    pub fn new(config: &'a ParserConfig, resources: &'a LexicalResources) -> Self {
        Self { config, resources }
    }
}

impl RankingStrategy for SalienceRanker<'_> {
    fn rank(
        &self,
        sentence: &Sentence,
        matrix: &mut AdjacencyMatrix,
    ) -> Result<Vec<RankedToken>, ParseError> {
        let texts = sentence.texts();
        let mwe_sets = self.resources.mwe.create_mwe_sets(
            &texts,
            self.config.mwe_max_tokens,
            self.config.mwe_min_score,
        );

        SentenceGraphBuilder::new(self.config, self.resources).build(sentence, &mwe_sets, matrix)?;

        let scores = PageRank::new()
            .with_damping(1.0)
            .with_convergence_delta(self.config.convergence_delta)
            .with_max_iterations(self.config.max_iterations)
            .rank(matrix);

        let mut ranking: Vec<RankedToken> = scores
            .into_iter()
            .enumerate()
            .map(|(index, score)| RankedToken::new(score, index))
            .collect();
        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(ranking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Token;

    #[test]
    fn test_verb_outranks_content_words() {
        let config = ParserConfig::default();
        let resources = LexicalResources::default();
        let sentence = Sentence::new(vec![
            Token::new("dogs").with_pos("NOUN"),
            Token::new("chase").with_pos("VERB"),
            Token::new("cats").with_pos("NOUN"),
        ]);

        let mut matrix = AdjacencyMatrix::new(sentence.len());
        let ranking = SalienceRanker::new(&config, &resources)
            .rank(&sentence, &mut matrix)
            .unwrap();

        assert_eq!(ranking.len(), 3);
        // The verb receives fan-in from every other token and should come
        // out on top.
        assert_eq!(ranking[0].index, 1);
    }

    #[test]
    fn test_ranking_is_a_permutation() {
        let config = ParserConfig::default();
        let resources = LexicalResources::default();
        let sentence = Sentence::new(vec![
            Token::new("a1x"),
            Token::new("b2y"),
            Token::new("c3z"),
            Token::new("d4w"),
        ]);

        let mut matrix = AdjacencyMatrix::new(sentence.len());
        let ranking = SalienceRanker::new(&config, &resources)
            .rank(&sentence, &mut matrix)
            .unwrap();

        let mut indices: Vec<usize> = ranking.iter().map(|r| r.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_discovered_links_stay_in_matrix() {
        let config = ParserConfig::default();
        let resources = LexicalResources::default();
        let sentence = Sentence::new(vec![Token::new("abcde"), Token::new("fghij")]);

        let mut matrix = AdjacencyMatrix::new(2);
        SalienceRanker::new(&config, &resources)
            .rank(&sentence, &mut matrix)
            .unwrap();
        assert!(matrix.edge_count() > 0);
    }

    #[test]
    fn test_empty_sentence() {
        let config = ParserConfig::default();
        let resources = LexicalResources::default();
        let sentence = Sentence::default();

        let mut matrix = AdjacencyMatrix::new(0);
        let ranking = SalienceRanker::new(&config, &resources)
            .rank(&sentence, &mut matrix)
            .unwrap();
        assert!(ranking.is_empty());
    }

    #[test]
    fn test_equal_scores_keep_surface_order() {
        let config = ParserConfig::default();
        let resources = LexicalResources::default();
        // Symmetric two-token graph: both tokens end up with equal scores.
        let sentence = Sentence::new(vec![Token::new("abcde"), Token::new("fghij")]);

        let mut matrix = AdjacencyMatrix::new(2);
        let ranking = SalienceRanker::new(&config, &resources)
            .rank(&sentence, &mut matrix)
            .unwrap();
        assert_eq!(ranking[0].index, 0);
        assert_eq!(ranking[1].index, 1);
    }
}
