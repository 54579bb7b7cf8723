//! Core data types shared across the parsing pipeline.

use serde::{Deserialize, Serialize};

/// A single token of a sentence.
///
/// Tokens are owned by their [`Sentence`] and never mutated by the parser.
/// A token's index is its position in the sentence, so token indices are
/// contiguous `0..n` by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text.
    pub text: String,
    /// Part-of-speech tag, if the caller's pipeline produced one.
    #[serde(default)]
    pub pos: Option<String>,
    /// Lemma, if the caller's pipeline produced one.
    #[serde(default)]
    pub lemma: Option<String>,
}

impl Token {
    /// Create a token with surface text only.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: None,
            lemma: None,
        }
    }

    /// Set the part-of-speech tag.
    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    /// Set the lemma.
    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    /// The POS tag as a string slice, if present.
    pub fn pos(&self) -> Option<&str> {
        self.pos.as_deref()
    }

    /// The lemma if present, otherwise the surface text.
    pub fn lemma_or_text(&self) -> &str {
        self.lemma.as_deref().unwrap_or(&self.text)
    }
}

/// An ordered sequence of tokens — the unit of processing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Create a sentence from tokens in surface order.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens in surface order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The token at the given position.
    pub fn token(&self, index: usize) -> &Token {
        &self.tokens[index]
    }

    /// Surface text of the token at the given position.
    pub fn text(&self, index: usize) -> &str {
        &self.tokens[index].text
    }

    /// POS tag of the token at the given position, if any.
    pub fn pos(&self, index: usize) -> Option<&str> {
        self.tokens[index].pos()
    }

    /// Surface texts of all tokens, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

impl From<Vec<Token>> for Sentence {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

/// A token together with its salience score.
///
/// Produced by a [`crate::ranking::RankingStrategy`]. The *sequence order* of
/// ranked tokens is authoritative for tree construction; the score itself is
/// only consulted as the last tie-break during head selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedToken {
    /// Salience score (PageRank value, or a synthetic score for baselines).
    pub score: f64,
    /// Position of the token in its sentence.
    pub index: usize,
}

impl RankedToken {
    pub fn new(score: f64, index: usize) -> Self {
        Self { score, index }
    }
}

/// Label of a dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DepLabel {
    /// The designated root; by convention a self-loop on the root token.
    Root,
    /// An ordinary head attachment.
    Dep,
}

/// A single edge of the output tree.
///
/// Every non-root token carries exactly one `Dep` edge pointing at its
/// governor; the root token carries a self-loop `Root` edge so consumers
/// never need to special-case "no head".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// Position of the dependent token.
    pub dependent: usize,
    /// Position of the governing token (equal to `dependent` for the root).
    pub governor: usize,
    pub label: DepLabel,
}

impl DependencyEdge {
    /// The root's self-loop edge.
    pub fn root(index: usize) -> Self {
        Self {
            dependent: index,
            governor: index,
            label: DepLabel::Root,
        }
    }

    /// An ordinary attachment of `dependent` to `governor`.
    pub fn dep(dependent: usize, governor: usize) -> Self {
        Self {
            dependent,
            governor,
            label: DepLabel::Dep,
        }
    }

    /// Whether this is the root self-loop.
    pub fn is_root(&self) -> bool {
        self.label == DepLabel::Root
    }
}

/// Configuration for graph construction, ranking and tree assembly.
///
/// Defaults reproduce the settings published with Søgaard (2012).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// How many directed links to add between immediate neighbors (in each
    /// direction).
    pub neighbor_link_count: f64,
    /// Add incoming links to verbs (any POS starting with "V") from every
    /// other token.
    pub use_pos_verb: bool,
    /// Consult the universal head/dependent POS rules during tree
    /// construction. Requires universal POS tags on the tokens.
    pub use_universal_rules: bool,
    /// Feed first-pass attachments back into the graph and rerank before
    /// emitting edges.
    pub two_pass: bool,
    /// Link weight added from dependent to governor for each first-pass
    /// attachment when `two_pass` is on.
    pub two_pass_link_weight: f64,
    /// Add the function-word link even when the neighbor is itself a
    /// function word.
    pub apply_function_word_linking_to_function_words: bool,
    /// Keep links between neighbors sharing the same 2-character POS tag
    /// prefix. When `false`, such links are removed.
    pub link_same_pos_tag: bool,
    /// Apply link removal (same POS, similarity, MWE) to two-step neighbors
    /// as well. May disconnect the graph.
    pub apply_link_removal_to_two_step_neighbors: bool,
    /// Maximum multi-word-expression detection window. Below 2 no MWEs are
    /// detected.
    pub mwe_max_tokens: usize,
    /// Minimum lexicon score for a span to count as a significant MWE.
    pub mwe_min_score: f64,
    /// Remove graph links between members of the same MWE.
    pub mwe_remove_links: bool,
    /// Remove links between distributionally similar terms. Requires a
    /// thesaurus in the lexical resources.
    pub remove_similar_links: bool,
    /// Look up thesaurus entries by lemma rather than surface form.
    pub thesaurus_use_lemma: bool,
    /// Ranking stops once the summed score change drops below this value.
    pub convergence_delta: f64,
    /// Upper bound on ranking iterations.
    pub max_iterations: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            neighbor_link_count: 1.0,
            use_pos_verb: true,
            use_universal_rules: false,
            two_pass: false,
            two_pass_link_weight: 2.0,
            apply_function_word_linking_to_function_words: true,
            link_same_pos_tag: true,
            apply_link_removal_to_two_step_neighbors: true,
            mwe_max_tokens: 4,
            mwe_min_score: 0.5,
            mwe_remove_links: false,
            remove_similar_links: false,
            thesaurus_use_lemma: true,
            convergence_delta: 1e-8,
            max_iterations: 200,
        }
    }
}

impl ParserConfig {
    pub fn with_neighbor_link_count(mut self, count: f64) -> Self {
        self.neighbor_link_count = count;
        self
    }

    pub fn with_use_pos_verb(mut self, on: bool) -> Self {
        self.use_pos_verb = on;
        self
    }

    pub fn with_universal_rules(mut self, on: bool) -> Self {
        self.use_universal_rules = on;
        self
    }

    pub fn with_two_pass(mut self, on: bool) -> Self {
        self.two_pass = on;
        self
    }

    pub fn with_two_pass_link_weight(mut self, weight: f64) -> Self {
        self.two_pass_link_weight = weight;
        self
    }

    pub fn with_link_same_pos_tag(mut self, on: bool) -> Self {
        self.link_same_pos_tag = on;
        self
    }

    pub fn with_mwe_remove_links(mut self, on: bool) -> Self {
        self.mwe_remove_links = on;
        self
    }

    pub fn with_remove_similar_links(mut self, on: bool) -> Self {
        self.remove_similar_links = on;
        self
    }
}
