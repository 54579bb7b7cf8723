//! Unsupervised graph-based dependency parsing.
//!
//! This crate ranks the tokens of a sentence by structural salience and uses
//! that ranking to greedily assemble an unlabeled dependency tree, without
//! any trained model. The approach follows Søgaard (2012), "Unsupervised
//! dependency parsing without training":
//!
//! 1. Build a directed, weighted graph over the sentence's tokens from
//!    positional, lexical, morphological and part-of-speech heuristics
//!    ([`graph::builder::SentenceGraphBuilder`]).
//! 2. Run PageRank on the graph to obtain a salience score per token
//!    ([`pagerank::PageRank`]).
//! 3. In descending salience order, attach each token to the best head among
//!    those already placed, producing a single-rooted, cycle-free tree
//!    ([`tree::TreeBuilder`]).
//!
//! The whole pipeline is wrapped by [`parser::UnsupervisedParser`]. Baseline
//! ranking strategies for evaluation (linear, randomized, gold-tree oracle)
//! live in [`ranking`]. Lexical resources consulted during graph and tree
//! construction — function words, multi-word expressions, universal
//! dependency rules, a distributional thesaurus — are loaded once and passed
//! in read-only ([`resources`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use graphdep::parser::UnsupervisedParser;
//! use graphdep::resources::LexicalResources;
//! use graphdep::types::{ParserConfig, Sentence, Token};
//!
//! let sentence = Sentence::new(vec![
//!     Token::new("The").with_pos("DET"),
//!     Token::new("quick").with_pos("ADJ"),
//!     Token::new("fox").with_pos("NOUN"),
//!     Token::new("jumps").with_pos("VERB"),
//! ]);
//!
//! let parser = UnsupervisedParser::new(ParserConfig::default(), LexicalResources::default());
//! let edges = parser.parse(&sentence)?;
//! ```

pub mod error;
pub mod graph;
pub mod keywords;
pub mod pagerank;
pub mod parser;
pub mod ranking;
pub mod resources;
pub mod tree;
pub mod types;

pub use error::{ParseError, ResourceError, ThesaurusError};
pub use parser::UnsupervisedParser;
pub use types::{DepLabel, DependencyEdge, ParserConfig, RankedToken, Sentence, Token};
