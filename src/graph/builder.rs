//! Graph builder with efficient edge handling.
//!
//! A mutable builder that uses `FxHashMap` for O(1) edge lookups during
//! construction. Once the adjacency counts are accumulated, the builder
//! is frozen into an immutable [`WordGraph`].

use rustc_hash::FxHashMap;

use super::word_graph::WordGraph;
use crate::nlp::StopwordFilter;

/// A node in the graph builder.
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The word for this node.
    pub word: String,
    /// Adjacency list: neighbor node ID -> co-occurrence count.
    pub edges: FxHashMap<u32, u32>,
}

impl BuilderNode {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            edges: FxHashMap::default(),
        }
    }
}

/// A mutable graph builder optimized for incremental construction.
///
/// Nodes are interned in first-seen order, which keeps downstream
/// iteration deterministic for a given token stream.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Maps word -> node ID.
    word_to_id: FxHashMap<String, u32>,
    /// Node storage, indexed by ID.
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a new empty graph builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph builder with pre-allocated capacity.
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            word_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given word, returning its ID.
    pub fn get_or_create_node(&mut self, word: &str) -> u32 {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.word_to_id.insert(word.to_string(), id);
        self.nodes.push(BuilderNode::new(word));
        id
    }

    /// Increment the co-occurrence count between two nodes.
    ///
    /// If the edge doesn't exist, it's created with count 1. Self-pairs
    /// (a word adjacent to an identical word) are dropped: the graph
    /// never carries self-loops.
    pub fn increment_edge(&mut self, from: u32, to: u32) {
        if from == to {
            return; // No self-loops
        }

        // Add edge in both directions (undirected graph)
        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0) += 1;
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            *node.edges.entry(from).or_insert(0) += 1;
        }
    }

    /// Build a graph from a token stream.
    ///
    /// Stopwords are removed first, then every adjacent pair of
    /// *surviving* tokens contributes one co-occurrence. Filtering
    /// before pairing means a removed stopword does not separate the
    /// words on either side of it.
    pub fn from_tokens(tokens: &[&str], filter: &StopwordFilter) -> Self {
        let surviving: Vec<&str> = tokens
            .iter()
            .copied()
            .filter(|t| !filter.is_stopword(t))
            .collect();

        let mut builder = Self::with_capacity(surviving.len() / 2);

        for pair in surviving.windows(2) {
            let a = builder.get_or_create_node(pair[0]);
            let b = builder.get_or_create_node(pair[1]);
            builder.increment_edge(a, b);
        }

        builder
    }

    /// Freeze into an immutable [`WordGraph`].
    pub fn freeze(&self) -> WordGraph {
        WordGraph::from_builder(self)
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges (counting each undirected edge once).
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID.
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by word.
    pub fn get_node_id(&self, word: &str) -> Option<u32> {
        self.word_to_id.get(word).copied()
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_interning() {
        let mut builder = GraphBuilder::new();

        let id_a = builder.get_or_create_node("selva");
        let id_b = builder.get_or_create_node("oscura");
        let id_c = builder.get_or_create_node("selva"); // duplicate

        assert_eq!(id_a, id_c);
        assert_ne!(id_a, id_b);
        assert_eq!(builder.node_count(), 2);
    }

    #[test]
    fn test_edge_incrementing() {
        let mut builder = GraphBuilder::new();

        let id_a = builder.get_or_create_node("selva");
        let id_b = builder.get_or_create_node("oscura");

        builder.increment_edge(id_a, id_b);
        builder.increment_edge(id_b, id_a);

        // (a,b) and (b,a) merge into one undirected edge of weight 2.
        assert_eq!(builder.get_node(id_a).unwrap().edges.get(&id_b), Some(&2));
        assert_eq!(builder.get_node(id_b).unwrap().edges.get(&id_a), Some(&2));
        assert_eq!(builder.edge_count(), 1);
    }

    #[test]
    fn test_self_loops_dropped() {
        let mut builder = GraphBuilder::new();
        let id_a = builder.get_or_create_node("ombra");

        builder.increment_edge(id_a, id_a);

        assert!(builder.get_node(id_a).unwrap().edges.is_empty());
    }

    #[test]
    fn test_from_tokens_adjacency_counts() {
        let tokens = ["x", "y", "x", "y", "z"];
        let builder = GraphBuilder::from_tokens(&tokens, &StopwordFilter::empty());

        let x = builder.get_node_id("x").unwrap();
        let y = builder.get_node_id("y").unwrap();
        let z = builder.get_node_id("z").unwrap();

        // x-y appears twice (forward then backward), y-z once.
        assert_eq!(builder.get_node(x).unwrap().edges.get(&y), Some(&2));
        assert_eq!(builder.get_node(y).unwrap().edges.get(&z), Some(&1));
        assert_eq!(builder.edge_count(), 2);
    }

    #[test]
    fn test_filtering_before_pairing() {
        // With "che" removed first, "selva" and "oscura" become adjacent.
        let tokens = ["selva", "che", "oscura"];
        let filter = StopwordFilter::from_list(&["che"]);
        let builder = GraphBuilder::from_tokens(&tokens, &filter);

        let a = builder.get_node_id("selva").unwrap();
        let b = builder.get_node_id("oscura").unwrap();
        assert_eq!(builder.get_node(a).unwrap().edges.get(&b), Some(&1));
        assert!(builder.get_node_id("che").is_none());
    }

    #[test]
    fn test_repeated_word_no_self_loop() {
        let tokens = ["onde", "onde", "luce"];
        let builder = GraphBuilder::from_tokens(&tokens, &StopwordFilter::empty());

        let onde = builder.get_node_id("onde").unwrap();
        assert!(!builder.get_node(onde).unwrap().edges.contains_key(&onde));
        // onde-luce still recorded.
        let luce = builder.get_node_id("luce").unwrap();
        assert_eq!(builder.get_node(onde).unwrap().edges.get(&luce), Some(&1));
    }

    #[test]
    fn test_empty_input() {
        let builder = GraphBuilder::from_tokens(&[], &StopwordFilter::empty());
        assert!(builder.is_empty());
        assert_eq!(builder.edge_count(), 0);
    }
}
