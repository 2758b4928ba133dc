//! Immutable word-adjacency graph.
//!
//! Freezing the builder sorts every adjacency list by neighbor ID, so
//! all downstream iteration (rankings, shortest paths, subgraph
//! extraction) is deterministic for a given token stream.

use rustc_hash::FxHashMap;

use super::builder::GraphBuilder;

/// An undirected weighted graph over words, read-only after construction.
///
/// Edge weight is the exact count of adjacent co-occurrences in the
/// filtered token stream. Each undirected edge is stored in both
/// adjacency lists with the same weight.
#[derive(Debug, Clone)]
pub struct WordGraph {
    /// Word for each node ID.
    words: Vec<String>,
    /// Maps word -> node ID.
    word_to_id: FxHashMap<String, u32>,
    /// Sorted adjacency lists: (neighbor ID, weight).
    adjacency: Vec<Vec<(u32, u32)>>,
}

impl WordGraph {
    /// Freeze a [`GraphBuilder`] into an immutable graph.
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let mut words = Vec::with_capacity(builder.node_count());
        let mut word_to_id = FxHashMap::default();
        let mut adjacency = Vec::with_capacity(builder.node_count());

        for (id, node) in builder.nodes() {
            words.push(node.word.clone());
            word_to_id.insert(node.word.clone(), id);

            let mut edges: Vec<(u32, u32)> = node.edges.iter().map(|(&k, &v)| (k, v)).collect();
            edges.sort_unstable_by_key(|&(k, _)| k);
            adjacency.push(edges);
        }

        Self {
            words,
            word_to_id,
            adjacency,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.words.len()
    }

    /// Number of undirected edges (each counted once).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Neighbors of a node with edge weights, sorted by neighbor ID.
    pub fn neighbors(&self, node: u32) -> &[(u32, u32)] {
        &self.adjacency[node as usize]
    }

    /// Weight of the edge between two nodes, if present.
    pub fn weight(&self, a: u32, b: u32) -> Option<u32> {
        self.adjacency[a as usize]
            .binary_search_by_key(&b, |&(k, _)| k)
            .ok()
            .map(|i| self.adjacency[a as usize][i].1)
    }

    /// Sum of weights over all edges incident to a node.
    pub fn weighted_degree(&self, node: u32) -> u64 {
        self.adjacency[node as usize]
            .iter()
            .map(|&(_, w)| w as u64)
            .sum()
    }

    /// Number of incident edges for a node.
    pub fn degree(&self, node: u32) -> usize {
        self.adjacency[node as usize].len()
    }

    /// The word for a node ID.
    pub fn word(&self, node: u32) -> &str {
        &self.words[node as usize]
    }

    /// Node ID for a word, if present.
    pub fn node_id(&self, word: &str) -> Option<u32> {
        self.word_to_id.get(word).copied()
    }

    /// Iterate over all node IDs in insertion order.
    pub fn node_ids(&self) -> std::ops::Range<u32> {
        0..self.words.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::StopwordFilter;

    fn build_test_graph() -> WordGraph {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");
        let c = builder.get_or_create_node("c");

        builder.increment_edge(a, b);
        builder.increment_edge(b, c);
        builder.increment_edge(b, c);
        builder.freeze()
    }

    #[test]
    fn test_freeze_preserves_counts() {
        let graph = build_test_graph();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight(0, 1), Some(1));
        assert_eq!(graph.weight(1, 2), Some(2));
        assert_eq!(graph.weight(0, 2), None);
    }

    #[test]
    fn test_undirected_symmetry() {
        let graph = build_test_graph();

        for a in 0..graph.node_count() as u32 {
            for &(b, w) in graph.neighbors(a) {
                assert_eq!(graph.weight(b, a), Some(w));
            }
        }
    }

    #[test]
    fn test_weighted_degree() {
        let graph = build_test_graph();

        assert_eq!(graph.weighted_degree(0), 1); // a: a-b
        assert_eq!(graph.weighted_degree(1), 3); // b: a-b + b-c(2)
        assert_eq!(graph.weighted_degree(2), 2); // c: b-c(2)
    }

    #[test]
    fn test_word_lookup() {
        let graph = build_test_graph();

        assert_eq!(graph.node_id("b"), Some(1));
        assert_eq!(graph.word(1), "b");
        assert_eq!(graph.node_id("z"), None);
    }

    #[test]
    fn test_end_to_end_example() {
        // [a,b,c,b,a,b,c] with no stopwords: (a,b) w=2, (b,c) w=2,
        // plus (c,b) and (b,a) merging into the same undirected edges.
        let tokens = ["a", "b", "c", "b", "a", "b", "c"];
        let graph = GraphBuilder::from_tokens(&tokens, &StopwordFilter::empty()).freeze();

        let a = graph.node_id("a").unwrap();
        let b = graph.node_id("b").unwrap();
        let c = graph.node_id("c").unwrap();

        assert_eq!(graph.weight(a, b), Some(2));
        assert_eq!(graph.weight(b, c), Some(2));
        assert_eq!(graph.weight(a, c), None);

        assert_eq!(graph.weighted_degree(a), 2);
        assert_eq!(graph.weighted_degree(b), 4);
        assert_eq!(graph.weighted_degree(c), 2);
    }

    #[test]
    fn test_empty_graph() {
        let graph = GraphBuilder::new().freeze();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
