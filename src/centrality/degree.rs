//! Weighted degree centrality.

use super::CentralityRanking;
use crate::graph::WordGraph;

/// Rank nodes by the sum of weights over their incident edges.
///
/// Exact, O(E).
pub fn weighted_degree_ranking(graph: &WordGraph, top_n: usize) -> CentralityRanking {
    let scored: Vec<(String, f64)> = graph
        .node_ids()
        .map(|id| (graph.word(id).to_string(), graph.weighted_degree(id) as f64))
        .collect();

    CentralityRanking::from_scores(scored, top_n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use crate::nlp::StopwordFilter;

    #[test]
    fn test_constructed_small_graph() {
        // [x,y,x,y,z]: edges (x,y) w=2, (y,z) w=1.
        let tokens = ["x", "y", "x", "y", "z"];
        let graph = GraphBuilder::from_tokens(&tokens, &StopwordFilter::empty()).freeze();

        let ranking = weighted_degree_ranking(&graph, 10);
        let scores: Vec<_> = ranking.entries.clone();

        assert_eq!(scores[0], ("y".to_string(), 3.0));
        assert_eq!(scores[1], ("x".to_string(), 2.0));
        assert_eq!(scores[2], ("z".to_string(), 1.0));
    }

    #[test]
    fn test_top_one() {
        let tokens = ["a", "b", "c", "b", "a", "b", "c"];
        let graph = GraphBuilder::from_tokens(&tokens, &StopwordFilter::empty()).freeze();

        let ranking = weighted_degree_ranking(&graph, 1);
        assert_eq!(ranking.entries, vec![("b".to_string(), 4.0)]);
    }

    #[test]
    fn test_determinism() {
        let tokens = ["a", "b", "c", "a", "c", "b"];
        let graph = GraphBuilder::from_tokens(&tokens, &StopwordFilter::empty()).freeze();

        let first = weighted_degree_ranking(&graph, 10);
        let second = weighted_degree_ranking(&graph, 10);
        assert_eq!(first.entries, second.entries);
    }

    #[test]
    fn test_empty_graph() {
        let graph = GraphBuilder::new().freeze();
        assert!(weighted_degree_ranking(&graph, 10).is_empty());
    }
}
