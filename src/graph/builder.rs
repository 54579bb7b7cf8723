//! Heuristic link rules that turn a sentence into a weighted token graph.
//!
//! For each token, in surface order, five rule families fire in a fixed
//! order:
//!
//! 1. bidirectional links to the immediate left neighbor,
//! 2. bidirectional links to the two-step left neighbor,
//! 3. incoming links to function words from their immediate neighbors,
//! 4. bidirectional morphological links to every earlier token whose
//!    3-character prefix and/or suffix differs,
//! 5. incoming links to verbs from every other token.
//!
//! Rules 1 and 2 are gated by `should_remove_links`, which suppresses links
//! between same-POS-prefix neighbors, distributionally similar terms, and
//! members of a common multi-word expression. The order is fixed for
//! determinism and must not be rearranged.

use rustc_hash::FxHashSet;

use crate::error::ParseError;
use crate::graph::matrix::AdjacencyMatrix;
use crate::resources::mwe::shares_mwe;
use crate::resources::thesaurus::term_key;
use crate::resources::LexicalResources;
use crate::types::{ParserConfig, Sentence};

/// Builds the per-sentence adjacency matrix from a sentence, the loaded
/// lexical resources, and the configuration.
#[derive(Debug)]
pub struct SentenceGraphBuilder<'a> {
    config: &'a ParserConfig,
    resources: &'a LexicalResources,
}

impl<'a> SentenceGraphBuilder<'a> {
    pub fn new(config: &'a ParserConfig, resources: &'a LexicalResources) -> Self {
        Self { config, resources }
    }

    /// Apply all link rules to `matrix`, which may be pre-seeded (two-pass
    /// feedback). The matrix size must match the sentence length.
    pub fn build(
        &self,
        sentence: &Sentence,
        mwe_sets: &[FxHashSet<u32>],
        matrix: &mut AdjacencyMatrix,
    ) -> Result<(), ParseError> {
        let n = sentence.len();
        if matrix.len() != n {
            return Err(ParseError::DimensionMismatch {
                expected: n,
                found: matrix.len(),
            });
        }

        let cfg = self.config;

        for i in 0..n {
            // 1. immediate left neighbor (covers the right direction too)
            if i > 0
                && sentence.text(i) != sentence.text(i - 1)
                && !self.should_remove_links(sentence, mwe_sets, i, i - 1)?
            {
                matrix.add(i, i - 1, cfg.neighbor_link_count);
                matrix.add(i - 1, i, cfg.neighbor_link_count);
            }

            // 2. two-step left neighbor
            if i > 1
                && sentence.text(i) != sentence.text(i - 2)
                && (!cfg.apply_link_removal_to_two_step_neighbors
                    || !self.should_remove_links(sentence, mwe_sets, i, i - 2)?)
            {
                matrix.add(i, i - 2, 1.0);
                matrix.add(i - 2, i, 1.0);
            }

            // 3. incoming links to function words from immediate neighbors
            if self.is_function_word(sentence, i) {
                if i > 0
                    && (cfg.apply_function_word_linking_to_function_words
                        || !self.is_function_word(sentence, i - 1))
                {
                    matrix.add(i - 1, i, 1.0);
                }
                if i + 1 < n
                    && (cfg.apply_function_word_linking_to_function_words
                        || !self.is_function_word(sentence, i + 1))
                {
                    matrix.add(i + 1, i, 1.0);
                }
            }

            // 4. morphological links (looking left only, to avoid duplicates)
            for j in 0..i {
                if suffixes_differ(sentence.text(i), sentence.text(j)) {
                    matrix.add(i, j, 1.0);
                    matrix.add(j, i, 1.0);
                }
                if prefixes_differ(sentence.text(i), sentence.text(j)) {
                    matrix.add(i, j, 1.0);
                    matrix.add(j, i, 1.0);
                }
            }

            // 5. incoming links to verbs from every other token
            if cfg.use_pos_verb && is_verb(sentence.pos(i)) {
                for j in 0..n {
                    if j != i {
                        matrix.add(j, i, 1.0);
                    }
                }
            }
        }

        Ok(())
    }

    /// Whether the link between tokens `i` and `j` should be suppressed:
    /// equal 2-character POS prefixes (when same-POS linking is off),
    /// distributional similarity (when enabled), or shared MWE membership
    /// (when enabled).
    fn should_remove_links(
        &self,
        sentence: &Sentence,
        mwe_sets: &[FxHashSet<u32>],
        i: usize,
        j: usize,
    ) -> Result<bool, ParseError> {
        if self.same_pos_prefix(sentence, i, j) {
            return Ok(true);
        }
        if self.similar_terms(sentence, i, j)? {
            return Ok(true);
        }
        Ok(self.config.mwe_remove_links && shares_mwe(&mwe_sets[i], &mwe_sets[j]))
    }

    fn same_pos_prefix(&self, sentence: &Sentence, i: usize, j: usize) -> bool {
        if self.config.link_same_pos_tag {
            return false;
        }
        match (sentence.pos(i), sentence.pos(j)) {
            (Some(a), Some(b)) => pos_prefix(a) == pos_prefix(b),
            _ => false,
        }
    }

    fn similar_terms(&self, sentence: &Sentence, i: usize, j: usize) -> Result<bool, ParseError> {
        if !self.config.remove_similar_links {
            return Ok(false);
        }
        let Some(thesaurus) = &self.resources.thesaurus else {
            return Ok(false);
        };
        let use_lemma = self.config.thesaurus_use_lemma;
        let a = term_key(sentence.token(i), use_lemma);
        let b = term_key(sentence.token(j), use_lemma);
        Ok(thesaurus.is_similar(&a, &b)?)
    }

    fn is_function_word(&self, sentence: &Sentence, i: usize) -> bool {
        self.resources.function_words.contains(sentence.text(i))
    }
}

/// The first two characters of a POS tag (Penn-Treebank-style coarsening).
fn pos_prefix(pos: &str) -> String {
    pos.chars().take(2).collect()
}

fn is_verb(pos: Option<&str>) -> bool {
    pos.map(|p| p.to_lowercase().starts_with('v')).unwrap_or(false)
}

/// Whether the last 3 characters of the two words differ. Shorter words
/// compare with their full text.
fn suffixes_differ(a: &str, b: &str) -> bool {
    last_chars(a, 3) != last_chars(b, 3)
}

/// Whether the first 3 characters of the two words differ.
fn prefixes_differ(a: &str, b: &str) -> bool {
    let a3: String = a.chars().take(3).collect();
    let b3: String = b.chars().take(3).collect();
    a3 != b3
}

fn last_chars(word: &str, n: usize) -> String {
    let count = word.chars().count();
    word.chars().skip(count.saturating_sub(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{FunctionWords, MweLexicon};
    use crate::types::Token;

    fn build(
        config: &ParserConfig,
        resources: &LexicalResources,
        sentence: &Sentence,
    ) -> AdjacencyMatrix {
        let texts = sentence.texts();
        let mwe_sets =
            resources
                .mwe
                .create_mwe_sets(&texts, config.mwe_max_tokens, config.mwe_min_score);
        let mut matrix = AdjacencyMatrix::new(sentence.len());
        SentenceGraphBuilder::new(config, resources)
            .build(sentence, &mwe_sets, &mut matrix)
            .unwrap();
        matrix
    }

    /// Distinct texts with shared prefixes and suffixes, so morphological
    /// links stay out of the picture.
    fn sentence(words: &[&str]) -> Sentence {
        Sentence::new(words.iter().map(|w| Token::new(*w)).collect())
    }

    #[test]
    fn test_neighbor_links_symmetric() {
        let cfg = ParserConfig::default();
        let resources = LexicalResources::default();
        // All words share prefix "aaa" and suffix "aaa" (length > 3), so
        // only neighbor/two-step links fire.
        let s = sentence(&["aaaXaaa", "aaaYaaa", "aaaZaaa"]);
        let m = build(&cfg, &resources, &s);

        assert_eq!(m.get(0, 1), 1.0);
        assert_eq!(m.get(1, 0), 1.0);
        assert_eq!(m.get(1, 2), 1.0);
        assert_eq!(m.get(2, 1), 1.0);
        // two-step
        assert_eq!(m.get(0, 2), 1.0);
        assert_eq!(m.get(2, 0), 1.0);
    }

    #[test]
    fn test_identical_neighbors_not_linked() {
        let cfg = ParserConfig::default();
        let resources = LexicalResources::default();
        let s = sentence(&["aaaXaaa", "aaaXaaa"]);
        let m = build(&cfg, &resources, &s);
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(m.get(1, 0), 0.0);
    }

    #[test]
    fn test_neighbor_link_count_weighting() {
        let cfg = ParserConfig::default().with_neighbor_link_count(3.0);
        let resources = LexicalResources::default();
        let s = sentence(&["aaaXaaa", "aaaYaaa"]);
        let m = build(&cfg, &resources, &s);
        assert_eq!(m.get(0, 1), 3.0);
        // Two-step weight stays at 1 regardless.
        let s3 = sentence(&["aaaXaaa", "aaaYaaa", "aaaZaaa"]);
        let m3 = build(&cfg, &resources, &s3);
        assert_eq!(m3.get(0, 2), 1.0);
    }

    #[test]
    fn test_function_word_incoming_links() {
        let cfg = ParserConfig::default();
        let resources =
            LexicalResources::default().with_function_words(FunctionWords::from_list(&["aaaYaaa"]));
        let s = sentence(&["aaaXaaa", "aaaYaaa", "aaaZaaa"]);
        let m = build(&cfg, &resources, &s);

        // Neighbor links (1 each way) plus one extra incoming link to the
        // function word from each immediate neighbor.
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(2, 1), 2.0);
        assert_eq!(m.get(1, 0), 1.0);
        assert_eq!(m.get(1, 2), 1.0);
    }

    #[test]
    fn test_function_word_linking_to_function_words_gate() {
        let mut cfg = ParserConfig::default();
        cfg.apply_function_word_linking_to_function_words = false;
        let resources = LexicalResources::default()
            .with_function_words(FunctionWords::from_list(&["aaaXaaa", "aaaYaaa"]));
        let s = sentence(&["aaaXaaa", "aaaYaaa", "aaaZaaa"]);
        let m = build(&cfg, &resources, &s);

        // Token 0 is itself a function word, so it contributes no extra
        // incoming link to token 1; token 2 still does.
        assert_eq!(m.get(0, 1), 1.0);
        assert_eq!(m.get(2, 1), 2.0);
        // Token 1 is a function word neighbor of token 0: suppressed, but
        // the incoming link from the non-existent left neighbor of 0 is moot.
        assert_eq!(m.get(1, 0), 1.0);
    }

    #[test]
    fn test_morphological_links() {
        let cfg = ParserConfig::default();
        let resources = LexicalResources::default();
        // "walked" vs "walks": prefix "wal" equal, suffixes differ -> 1 link.
        // "walked" vs "jumped": prefixes differ, suffixes ("ked" vs "ped")
        // differ -> 2 links.
        let s = sentence(&["walked", "walks"]);
        let m = build(&cfg, &resources, &s);
        // Neighbor link 1.0 + suffix link 1.0.
        assert_eq!(m.get(0, 1), 2.0);

        let s2 = sentence(&["walked", "jumped"]);
        let m2 = build(&cfg, &resources, &s2);
        // Neighbor 1.0 + suffix 1.0 + prefix 1.0.
        assert_eq!(m2.get(0, 1), 3.0);
    }

    #[test]
    fn test_short_words_compare_full_text() {
        // "go" vs "gone": prefixes "go" vs "gon" differ, suffixes "go" vs
        // "one" differ.
        assert!(prefixes_differ("go", "gone"));
        assert!(suffixes_differ("go", "gone"));
        // Identical short words differ in neither.
        assert!(!prefixes_differ("go", "go"));
        assert!(!suffixes_differ("go", "go"));
    }

    #[test]
    fn test_verb_fan_in() {
        let cfg = ParserConfig::default();
        let resources = LexicalResources::default();
        let s = Sentence::new(vec![
            Token::new("aaaXaaa").with_pos("NOUN"),
            Token::new("aaaYaaa").with_pos("VERB"),
            Token::new("aaaZaaa").with_pos("NOUN"),
        ]);
        let m = build(&cfg, &resources, &s);

        // Verb at index 1: neighbor links 1.0 each way plus fan-in 1.0 from
        // every other token.
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(2, 1), 2.0);
        assert_eq!(m.get(1, 0), 1.0);
        assert_eq!(m.get(1, 2), 1.0);
    }

    #[test]
    fn test_verb_fan_in_disabled() {
        let cfg = ParserConfig::default().with_use_pos_verb(false);
        let resources = LexicalResources::default();
        let s = Sentence::new(vec![
            Token::new("aaaXaaa").with_pos("NOUN"),
            Token::new("aaaYaaa").with_pos("VERB"),
        ]);
        let m = build(&cfg, &resources, &s);
        assert_eq!(m.get(0, 1), 1.0);
    }

    #[test]
    fn test_lowercase_verb_tag_counts() {
        assert!(is_verb(Some("vbz")));
        assert!(is_verb(Some("VERB")));
        assert!(!is_verb(Some("NOUN")));
        assert!(!is_verb(None));
    }

    #[test]
    fn test_same_pos_prefix_removal() {
        let cfg = ParserConfig::default().with_link_same_pos_tag(false);
        let resources = LexicalResources::default();
        let s = Sentence::new(vec![
            Token::new("aaaXaaa").with_pos("NN"),
            Token::new("aaaYaaa").with_pos("NNS"),
        ]);
        let m = build(&cfg, &resources, &s);
        // Both tags share prefix "NN": neighbor link suppressed.
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(m.get(1, 0), 0.0);

        // With the default config the link is kept.
        let m2 = build(&ParserConfig::default(), &resources, &s);
        assert_eq!(m2.get(0, 1), 1.0);
    }

    #[test]
    fn test_two_step_removal_gate() {
        let mut cfg = ParserConfig::default().with_link_same_pos_tag(false);
        cfg.apply_link_removal_to_two_step_neighbors = false;
        let resources = LexicalResources::default();
        let s = Sentence::new(vec![
            Token::new("aaaXaaa").with_pos("NN"),
            Token::new("aaaYaaa").with_pos("VB"),
            Token::new("aaaZaaa").with_pos("NNS"),
        ]);
        let m = build(&cfg, &resources, &s);

        // 0 and 2 share the POS prefix, but removal is not applied to
        // two-step neighbors here.
        assert_eq!(m.get(0, 2), 1.0);

        cfg.apply_link_removal_to_two_step_neighbors = true;
        let m2 = build(&cfg, &resources, &s);
        assert_eq!(m2.get(0, 2), 0.0);
    }

    #[test]
    fn test_mwe_link_removal_gate() {
        let resources = LexicalResources::default()
            .with_mwe(MweLexicon::from_entries([("aaaXaaa aaaYaaa", 0.9)]));

        let s = sentence(&["aaaXaaa", "aaaYaaa"]);

        // Disabled: neighbor link added as normal.
        let cfg = ParserConfig::default();
        let m = build(&cfg, &resources, &s);
        assert_eq!(m.get(0, 1), 1.0);

        // Enabled: adjacent same-MWE tokens get no neighbor link.
        let cfg = ParserConfig::default().with_mwe_remove_links(true);
        let m = build(&cfg, &resources, &s);
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(m.get(1, 0), 0.0);
    }

    #[test]
    fn test_similar_terms_link_removal() {
        use crate::error::ThesaurusError;
        use crate::resources::{CachedThesaurus, ThesaurusClient};

        struct PairClient;
        impl ThesaurusClient for PairClient {
            fn connect(&mut self) -> Result<(), ThesaurusError> {
                Ok(())
            }
            fn similar_terms(&self, term: &str) -> Result<FxHashSet<String>, ThesaurusError> {
                let mut set = FxHashSet::default();
                match term {
                    "quick#JJ" => set.insert("fast#JJ".to_string()),
                    "fast#JJ" => set.insert("quick#JJ".to_string()),
                    _ => false,
                };
                Ok(set)
            }
        }

        let s = Sentence::new(vec![
            Token::new("quick").with_pos("JJ"),
            Token::new("fast").with_pos("JJ"),
        ]);

        // Morphological links (prefixes and suffixes both differ) are not
        // gated by similarity, only the neighbor link is.
        let resources = LexicalResources::default()
            .with_thesaurus(CachedThesaurus::connect(Box::new(PairClient)).unwrap());
        let cfg = ParserConfig::default().with_remove_similar_links(true);
        let m = build(&cfg, &resources, &s);
        assert_eq!(m.get(0, 1), 2.0);

        let cfg = ParserConfig::default();
        let m = build(&cfg, &resources, &s);
        assert_eq!(m.get(0, 1), 3.0);
    }

    #[test]
    fn test_thesaurus_lookup_failure_propagates() {
        use crate::error::ThesaurusError;
        use crate::resources::{CachedThesaurus, ThesaurusClient};

        struct FailingClient;
        impl ThesaurusClient for FailingClient {
            fn connect(&mut self) -> Result<(), ThesaurusError> {
                Ok(())
            }
            fn similar_terms(&self, term: &str) -> Result<FxHashSet<String>, ThesaurusError> {
                Err(ThesaurusError::Lookup {
                    term: term.to_string(),
                    message: "timeout".into(),
                })
            }
        }

        let resources = LexicalResources::default()
            .with_thesaurus(CachedThesaurus::connect(Box::new(FailingClient)).unwrap());
        let cfg = ParserConfig::default().with_remove_similar_links(true);
        let s = Sentence::new(vec![
            Token::new("quick").with_pos("JJ"),
            Token::new("fast").with_pos("JJ"),
        ]);

        let mut matrix = AdjacencyMatrix::new(2);
        let sets = vec![FxHashSet::default(), FxHashSet::default()];
        let err = SentenceGraphBuilder::new(&cfg, &resources)
            .build(&s, &sets, &mut matrix)
            .unwrap_err();
        assert!(matches!(err, ParseError::Thesaurus(_)));
    }

    #[test]
    fn test_matrix_size_mismatch_fails() {
        let cfg = ParserConfig::default();
        let resources = LexicalResources::default();
        let s = sentence(&["a", "b"]);
        let mut matrix = AdjacencyMatrix::new(3);
        let err = SentenceGraphBuilder::new(&cfg, &resources)
            .build(&s, &[FxHashSet::default(), FxHashSet::default()], &mut matrix)
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::DimensionMismatch {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_empty_sentence() {
        let cfg = ParserConfig::default();
        let resources = LexicalResources::default();
        let s = Sentence::default();
        let m = build(&cfg, &resources, &s);
        assert!(m.is_empty());
    }
}
