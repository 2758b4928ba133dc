//! Plot rendering via `plotters`.

pub mod layout;
pub mod plots;

pub use layout::spring_layout;
pub use plots::{plot_relative_entropy, plot_subgraph, plot_zipf};

use crate::error::AnalysisError;

/// Map a plotters backend error (generic over the backend) into the
/// crate error type at the rendering boundary.
pub(crate) fn render_err<E: std::fmt::Display>(err: E) -> AnalysisError {
    AnalysisError::Render(err.to_string())
}
