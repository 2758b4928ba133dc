//! Weighted centrality measures and high-centrality subgraph extraction.

pub mod betweenness;
pub mod degree;
pub mod eigenvector;
pub mod subgraph;

use serde::Serialize;

pub use betweenness::betweenness_ranking;
pub use degree::weighted_degree_ranking;
pub use eigenvector::eigenvector_ranking;
pub use subgraph::{extract_high_centrality_subgraph, Subgraph};

/// An ordered sequence of (word, score) pairs, descending by score.
///
/// Produced by each of the three centrality measures. Sorting is
/// stable, so ties keep the graph's node insertion order and re-running
/// a ranking on the same graph yields identical output.
#[derive(Debug, Clone, Serialize)]
pub struct CentralityRanking {
    pub entries: Vec<(String, f64)>,
}

impl CentralityRanking {
    /// Sort scored words descending and truncate to `top_n`.
    pub fn from_scores(mut scored: Vec<(String, f64)>, top_n: usize) -> Self {
        // Stable sort: equal scores keep discovery order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(top_n);
        Self { entries: scored }
    }

    /// The ranked words without scores.
    pub fn words(&self) -> Vec<String> {
        self.entries.iter().map(|(w, _)| w.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Display for CentralityRanking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (word, score) in &self.entries {
            writeln!(f, "{word}: {score:.3}")?;
        }
        Ok(())
    }
}
