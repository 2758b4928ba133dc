//! Per-canticle analysis orchestration and console reporting.

use serde::Serialize;
use tracing::info;

use crate::centrality::{
    betweenness_ranking, eigenvector_ranking, extract_high_centrality_subgraph,
    weighted_degree_ranking, CentralityRanking, Subgraph,
};
use crate::error::Result;
use crate::freq::{fit_power_law, FreqDist, PowerLawFit};
use crate::graph::GraphBuilder;
use crate::nlp::{tokenize, StopwordFilter};
use crate::types::{AnalysisConfig, Canticle};

/// Everything computed for one canticle: the three centrality
/// rankings, the high-centrality subgraph seeded by the eigenvector
/// ranking, and the rank-frequency statistics.
#[derive(Debug, Clone, Serialize)]
pub struct CanticleReport {
    pub canticle: Canticle,
    pub node_count: usize,
    pub edge_count: usize,
    pub weighted_degree: CentralityRanking,
    pub betweenness: CentralityRanking,
    pub eigenvector: CentralityRanking,
    pub subgraph: Subgraph,
    /// (rank, frequency) pairs over the unfiltered token stream.
    pub rank_frequency: Vec<(f64, f64)>,
    /// Power-law fit of the rank-frequency curve, if enough points.
    pub zipf_fit: Option<PowerLawFit>,
}

/// Run the full graph and frequency analysis for one canticle.
///
/// Stopword filtering applies to the adjacency graph only; frequency
/// counts run over the unfiltered token stream.
pub fn analyze_canticle(
    canticle: Canticle,
    text: &str,
    filter: &StopwordFilter,
    config: &AnalysisConfig,
) -> Result<CanticleReport> {
    let tokens = tokenize(text);
    let graph = GraphBuilder::from_tokens(&tokens, filter).freeze();
    info!(
        canticle = %canticle,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built word-adjacency graph"
    );

    let weighted_degree = weighted_degree_ranking(&graph, config.top_n);
    let betweenness = betweenness_ranking(
        &graph,
        config.top_n,
        config.betweenness_samples,
        config.seed,
    );
    let eigenvector = eigenvector_ranking(&graph, config.top_n)?;

    let seeds = eigenvector.words();
    let subgraph = extract_high_centrality_subgraph(&graph, &seeds, config.edges_per_seed);

    let freq = FreqDist::from_tokens(&tokens);
    let rank_frequency = freq.rank_frequency();
    let zipf_fit = fit_power_law(&rank_frequency);

    Ok(CanticleReport {
        canticle,
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        weighted_degree,
        betweenness,
        eigenvector,
        subgraph,
        rank_frequency,
        zipf_fit,
    })
}

impl std::fmt::Display for CanticleReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = self.canticle.title();
        let n = self.weighted_degree.len();
        writeln!(f, "\nTop {n} Words by Weighted Degree Centrality - {title}")?;
        write!(f, "{}", self.weighted_degree)?;
        writeln!(f, "\nTop {n} Words by Betweenness Centrality - {title}")?;
        write!(f, "{}", self.betweenness)?;
        writeln!(f, "\nTop {n} Words by Eigenvector Centrality - {title}")?;
        write!(f, "{}", self.eigenvector)?;
        if let Some(fit) = self.zipf_fit {
            writeln!(f, "\nZipf slope - {title}: β = {:.2}", fit.beta)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> CanticleReport {
        // Small but non-degenerate corpus.
        let text = "selva oscura selva cammin oscura selva cammin vita \
                    oscura selva notte cammin selva";
        analyze_canticle(
            Canticle::Inferno,
            text,
            &StopwordFilter::empty(),
            &AnalysisConfig::default().with_top_n(3),
        )
        .unwrap()
    }

    #[test]
    fn test_rankings_respect_top_n() {
        let report = sample_report();

        assert!(report.weighted_degree.len() <= 3);
        assert!(report.betweenness.len() <= 3);
        assert!(report.eigenvector.len() <= 3);
    }

    #[test]
    fn test_subgraph_seeded_by_eigenvector() {
        let report = sample_report();

        // The top eigenvector word is connected, so it must appear.
        let top = &report.eigenvector.entries[0].0;
        assert!(report.subgraph.contains(top));
    }

    #[test]
    fn test_display_sections() {
        let report = sample_report();
        let text = report.to_string();

        assert!(text.contains("Weighted Degree Centrality - Inferno"));
        assert!(text.contains("Betweenness Centrality - Inferno"));
        assert!(text.contains("Eigenvector Centrality - Inferno"));
    }

    #[test]
    fn test_degenerate_canticle_is_error() {
        let result = analyze_canticle(
            Canticle::Paradiso,
            "",
            &StopwordFilter::empty(),
            &AnalysisConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_report_serializes() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"canticle\":\"inferno\""));
    }
}
