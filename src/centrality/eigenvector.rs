//! Weighted eigenvector centrality.
//!
//! Scores are the components of the dominant eigenvector of the dense
//! weighted adjacency matrix, computed with `nalgebra`'s symmetric
//! eigensolver. A direct solve avoids the non-convergence that power
//! iteration hits on disconnected or degenerate spectra.

use nalgebra::{DMatrix, SymmetricEigen};

use super::CentralityRanking;
use crate::error::{AnalysisError, Result};
use crate::graph::WordGraph;

/// Rank nodes by dominant-eigenvector component.
///
/// Returns [`AnalysisError::DegenerateGraph`] when the graph has no
/// nodes or no edges, where the dominant eigenvector is undefined.
pub fn eigenvector_ranking(graph: &WordGraph, top_n: usize) -> Result<CentralityRanking> {
    let n = graph.node_count();
    if n == 0 {
        return Err(AnalysisError::DegenerateGraph("graph has no nodes"));
    }
    if graph.edge_count() == 0 {
        return Err(AnalysisError::DegenerateGraph("graph has no edges"));
    }

    let mut adjacency = DMatrix::<f64>::zeros(n, n);
    for a in graph.node_ids() {
        for &(b, w) in graph.neighbors(a) {
            adjacency[(a as usize, b as usize)] = w as f64;
        }
    }

    let eigen = SymmetricEigen::new(adjacency);

    // Index of the largest eigenvalue (the adjacency matrix of a
    // weighted graph always has a real spectrum here, it is symmetric).
    let mut dominant = 0;
    for i in 1..n {
        if eigen.eigenvalues[i] > eigen.eigenvalues[dominant] {
            dominant = i;
        }
    }

    let vector = eigen.eigenvectors.column(dominant);

    // Fix the sign so the dominant component is positive, then scale to
    // unit length. Matches the usual eigensolver-centrality convention.
    let sum: f64 = vector.iter().sum();
    let sign = if sum < 0.0 { -1.0 } else { 1.0 };
    let norm = vector.norm();

    let scored: Vec<(String, f64)> = vector
        .iter()
        .enumerate()
        .map(|(id, &v)| (graph.word(id as u32).to_string(), sign * v / norm))
        .collect();

    Ok(CentralityRanking::from_scores(scored, top_n))
}
