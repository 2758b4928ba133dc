//! `cantica` — word-adjacency network analytics for the Divine Comedy.
//!
//! The crate normalizes the Gutenberg text into three canticle
//! sub-corpora, builds a weighted word-adjacency graph per corpus,
//! computes weighted degree, betweenness, and eigenvector centrality
//! rankings, extracts a high-centrality subgraph around the top-ranked
//! words, fits rank-frequency (Zipf) statistics, and measures per-canto
//! relative bigram entropy against a shuffled baseline.
//!
//! # Pipeline
//!
//! ```text
//! raw text -> TextNormalizer -> token stream -> GraphBuilder -> WordGraph
//!          -> centrality rankings + subgraph -> plots / console report
//! ```
//!
//! All randomized steps (betweenness source sampling, entropy baseline
//! shuffles, layout initialization) take an explicit seed.

pub mod centrality;
pub mod corpus;
pub mod entropy;
pub mod error;
pub mod freq;
pub mod graph;
pub mod nlp;
pub mod render;
pub mod report;
pub mod types;

pub use centrality::{
    betweenness_ranking, eigenvector_ranking, extract_high_centrality_subgraph,
    weighted_degree_ranking, CentralityRanking, Subgraph,
};
pub use corpus::{NormalizedCorpus, TextNormalizer};
pub use error::{AnalysisError, Result};
pub use graph::{GraphBuilder, WordGraph};
pub use nlp::StopwordFilter;
pub use report::{analyze_canticle, CanticleReport};
pub use types::{AnalysisConfig, Canticle};
