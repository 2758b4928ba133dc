//! Shared configuration and corpus types.

use serde::{Deserialize, Serialize};

/// The three major divisions of the Commedia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Canticle {
    Inferno,
    Purgatorio,
    Paradiso,
}

impl Canticle {
    /// All canticles in narrative order.
    pub const ALL: [Canticle; 3] = [Canticle::Inferno, Canticle::Purgatorio, Canticle::Paradiso];

    /// The heading marker used in the Gutenberg text.
    pub fn marker(&self) -> &'static str {
        match self {
            Canticle::Inferno => "INFERNO",
            Canticle::Purgatorio => "PURGATORIO",
            Canticle::Paradiso => "PARADISO",
        }
    }

    /// Display name for reports and plot titles.
    pub fn title(&self) -> &'static str {
        match self {
            Canticle::Inferno => "Inferno",
            Canticle::Purgatorio => "Purgatorio",
            Canticle::Paradiso => "Paradiso",
        }
    }
}

impl std::fmt::Display for Canticle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Tunable parameters for a full analysis run.
///
/// Replaces the module-level globals of ad-hoc analysis scripts with an
/// explicit value passed into each stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// How many nodes each centrality ranking keeps.
    pub top_n: usize,
    /// Neighbors kept per seed during subgraph extraction.
    pub edges_per_seed: usize,
    /// Maximum number of source nodes sampled for betweenness.
    pub betweenness_samples: usize,
    /// N-gram length for entropy analysis (2 = bigrams).
    pub ngram: usize,
    /// Shuffles per baseline round.
    pub entropy_shuffles: usize,
    /// Baseline rounds averaged for the shuffled entropy estimate.
    pub entropy_rounds: usize,
    /// Seed for every randomized step (betweenness sampling, entropy
    /// baseline shuffles, layout initialization).
    pub seed: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            edges_per_seed: 5,
            betweenness_samples: 1000,
            ngram: 2,
            entropy_shuffles: 5,
            entropy_rounds: 10,
            seed: 42,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_edges_per_seed(mut self, edges_per_seed: usize) -> Self {
        self.edges_per_seed = edges_per_seed;
        self
    }

    pub fn with_betweenness_samples(mut self, samples: usize) -> Self {
        self.betweenness_samples = samples;
        self
    }

    pub fn with_ngram(mut self, n: usize) -> Self {
        self.ngram = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
