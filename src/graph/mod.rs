//! Per-sentence token graph: adjacency matrix and heuristic link rules.

pub mod builder;
pub mod matrix;

pub use builder::SentenceGraphBuilder;
pub use matrix::AdjacencyMatrix;
