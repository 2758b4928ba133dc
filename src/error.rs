//! Error types for corpus analysis.

use thiserror::Error;

/// Errors produced while analyzing a corpus.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Eigenvector centrality was requested for a graph with no nodes
    /// or no edges, where the dominant eigenvector is undefined.
    #[error("degenerate graph: {0}")]
    DegenerateGraph(&'static str),

    /// A canticle marker was not found in the corpus text.
    #[error("canticle marker `{0}` not found in corpus")]
    CanticleNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A plotting backend failure, stringified at the boundary since
    /// plotters error types are generic over the backend.
    #[error("render error: {0}")]
    Render(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;
