//! Command-line entry point: run the full corpus analysis and write
//! plots plus a JSON summary alongside the console report.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cantica::corpus::normalizer::split_into_canti;
use cantica::entropy::relative_entropy_per_canto;
use cantica::render::{plot_relative_entropy, plot_subgraph, plot_zipf};
use cantica::{
    analyze_canticle, AnalysisConfig, Canticle, GraphBuilder, StopwordFilter, TextNormalizer,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CanticleArg {
    Inferno,
    Purgatorio,
    Paradiso,
}

impl From<CanticleArg> for Canticle {
    fn from(arg: CanticleArg) -> Self {
        match arg {
            CanticleArg::Inferno => Canticle::Inferno,
            CanticleArg::Purgatorio => Canticle::Purgatorio,
            CanticleArg::Paradiso => Canticle::Paradiso,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "cantica", about = "Word-adjacency network analytics for the Divine Comedy")]
struct Args {
    /// Path to the Divine Comedy text (Project Gutenberg #8800).
    #[arg(long, default_value = "divine_comedy.txt")]
    corpus: PathBuf,

    /// Directory for plot and summary output.
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,

    /// Canticle for the per-canto entropy journey.
    #[arg(long, value_enum, default_value_t = CanticleArg::Inferno)]
    canticle: CanticleArg,

    /// N-gram length for entropy analysis.
    #[arg(long, default_value_t = 2)]
    ngram: usize,

    /// Use logarithmic rank binning in the Zipf plots.
    #[arg(long)]
    binned: bool,

    /// Seed for all randomized steps.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Ranking length.
    #[arg(long, default_value_t = 10)]
    top_n: usize,

    /// Neighbors kept per seed in subgraph extraction.
    #[arg(long, default_value_t = 5)]
    edges_per_seed: usize,

    /// Source nodes sampled for betweenness centrality.
    #[arg(long, default_value_t = 1000)]
    betweenness_samples: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = AnalysisConfig::new()
        .with_top_n(args.top_n)
        .with_edges_per_seed(args.edges_per_seed)
        .with_betweenness_samples(args.betweenness_samples)
        .with_ngram(args.ngram)
        .with_seed(args.seed);

    let raw = fs::read_to_string(&args.corpus)
        .with_context(|| format!("reading corpus from {}", args.corpus.display()))?;
    let corpus = TextNormalizer::new().normalize(&raw)?;
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory {}", args.out_dir.display()))?;

    let filter = StopwordFilter::italian();

    // Combined corpus graph, for scale context only.
    let whole_tokens = cantica::nlp::tokenize(&corpus.whole);
    let whole = GraphBuilder::from_tokens(&whole_tokens, &filter).freeze();
    info!(
        nodes = whole.node_count(),
        edges = whole.edge_count(),
        "combined corpus graph"
    );

    for canticle in Canticle::ALL {
        // A failure in one canticle halts that canticle only.
        let report = match analyze_canticle(canticle, corpus.canticle(canticle), &filter, &config) {
            Ok(report) => report,
            Err(err) => {
                error!(canticle = %canticle, %err, "analysis failed");
                continue;
            }
        };

        println!("{report}");

        let slug = canticle.title().to_lowercase();
        let seeds = report.eigenvector.words();
        plot_subgraph(
            &args.out_dir.join(format!("{slug}_subgraph.png")),
            &format!("{canticle} - High Eigenvector Centrality Subgraph"),
            &report.subgraph,
            &seeds,
            config.seed,
        )?;

        let binned_points = if args.binned {
            Some(cantica::freq::log_bin(&report.rank_frequency, 50, 2))
        } else {
            None
        };
        plot_zipf(
            &args.out_dir.join(format!("{slug}_zipf.png")),
            canticle.title(),
            &report.rank_frequency,
            binned_points.as_deref(),
            report.zipf_fit,
        )?;

        let summary = serde_json::to_string_pretty(&report)?;
        fs::write(args.out_dir.join(format!("{slug}_summary.json")), summary)?;
    }

    // Per-canto relative entropy for the requested canticle.
    let entropy_canticle: Canticle = args.canticle.into();
    for canticle in Canticle::ALL {
        let canti = split_into_canti(corpus.canticle(canticle));
        println!("Number of Canti - {}: {}", canticle, canti.len());
    }
    let canti = split_into_canti(corpus.canticle(entropy_canticle));
    let entropies = relative_entropy_per_canto(
        &canti,
        config.ngram,
        config.entropy_shuffles,
        config.entropy_rounds,
        config.seed,
    );
    plot_relative_entropy(
        &args
            .out_dir
            .join(format!("{}_entropy.png", entropy_canticle.title().to_lowercase())),
        entropy_canticle.title(),
        &entropies,
    )?;

    info!(out_dir = %args.out_dir.display(), "analysis complete");
    Ok(())
}
