//! High-centrality subgraph extraction.
//!
//! Starting from a seed list (typically the top eigenvector-centrality
//! words), the extractor pulls in each seed's strongest neighbors and
//! then closes over every edge among the expanded node set.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::graph::WordGraph;

/// An induced subgraph with owned node and edge lists.
///
/// Edges are deduplicated and stored in canonical order (smaller node
/// ID first, list sorted), so extraction is idempotent: identical
/// inputs produce an identical edge list, not merely an isomorphic one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subgraph {
    /// Words appearing in at least one edge.
    pub nodes: Vec<String>,
    /// Deduplicated (a, b, weight) edges.
    pub edges: Vec<(String, String, u32)>,
}

impl Subgraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.nodes.iter().any(|n| n.as_str() == word)
    }

    /// Unweighted degree of a node within the subgraph.
    pub fn degree(&self, word: &str) -> usize {
        self.edges
            .iter()
            .filter(|(a, b, _)| a.as_str() == word || b.as_str() == word)
            .count()
    }
}

/// Extract the subgraph induced by `seeds` and their strongest neighbors.
///
/// 1. For each seed present in the graph, take its `top_edges_per_seed`
///    neighbors by descending edge weight (ties broken by node ID) and
///    record the seed-neighbor edges.
/// 2. Close over the expanded node set: record every edge of the source
///    graph whose endpoints are both in the set.
///
/// Seeds absent from the graph are skipped. The output never contains
/// self-loops. Every seed with at least one edge in the source graph
/// appears in the output (given `top_edges_per_seed >= 1`).
pub fn extract_high_centrality_subgraph(
    graph: &WordGraph,
    seeds: &[String],
    top_edges_per_seed: usize,
) -> Subgraph {
    let mut node_set: FxHashSet<u32> = seeds.iter().filter_map(|s| graph.node_id(s)).collect();

    // Canonical edge key (min ID, max ID) -> weight. BTreeMap keeps the
    // final edge list sorted and deduplicated.
    let mut edges: BTreeMap<(u32, u32), u32> = BTreeMap::new();

    for seed in seeds {
        let Some(seed_id) = graph.node_id(seed) else {
            continue; // absence just means no contributed edges
        };

        let mut neighbor_weights: Vec<(u32, u32)> = graph
            .neighbors(seed_id)
            .iter()
            .copied()
            .filter(|&(n, _)| n != seed_id)
            .collect();
        neighbor_weights.sort_by_key(|&(n, w)| (std::cmp::Reverse(w), n));

        for &(neighbor, weight) in neighbor_weights.iter().take(top_edges_per_seed) {
            node_set.insert(neighbor);
            edges.insert(canonical(seed_id, neighbor), weight);
        }
    }

    // Second pass: capture edges among the expanded set that step one
    // missed, including edges between different seeds' neighbor sets.
    for &node in &node_set {
        for &(neighbor, weight) in graph.neighbors(node) {
            if neighbor != node && node_set.contains(&neighbor) {
                edges.insert(canonical(node, neighbor), weight);
            }
        }
    }

    // Materialize words; nodes are those appearing in at least one edge.
    let mut seen: FxHashSet<u32> = FxHashSet::default();
    let mut nodes = Vec::new();
    for (&(a, b), _) in &edges {
        for id in [a, b] {
            if seen.insert(id) {
                nodes.push(graph.word(id).to_string());
            }
        }
    }

    let edges = edges
        .into_iter()
        .map(|((a, b), w)| (graph.word(a).to_string(), graph.word(b).to_string(), w))
        .collect();

    Subgraph { nodes, edges }
}

fn canonical(a: u32, b: u32) -> (u32, u32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
