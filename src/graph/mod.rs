//! Word-adjacency graph construction and representation.

pub mod builder;
pub mod word_graph;

pub use builder::GraphBuilder;
pub use word_graph::WordGraph;
