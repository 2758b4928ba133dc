//! Plot output: Zipf rank-frequency, relative-entropy journey, and
//! high-centrality subgraph drawings.

use std::path::Path;

use plotters::prelude::*;
use rustc_hash::FxHashSet;

use super::{render_err, spring_layout};
use crate::centrality::Subgraph;
use crate::error::Result;
use crate::freq::PowerLawFit;

const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);
const LIGHT_CORAL: RGBColor = RGBColor(240, 128, 128);
const GRAY: RGBColor = RGBColor(128, 128, 128);

/// Zipf rank-frequency plot on log-log axes.
///
/// Raw points are always drawn (faded when binned points are supplied);
/// the fitted power law is overlaid with its slope annotated as `β`.
pub fn plot_zipf(
    path: &Path,
    title: &str,
    raw: &[(f64, f64)],
    binned: Option<&[(f64, f64)]>,
    fit: Option<PowerLawFit>,
) -> Result<()> {
    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let max_rank = raw.iter().map(|&(r, _)| r).fold(1.0f64, f64::max);
    let max_freq = raw.iter().map(|&(_, f)| f).fold(1.0f64, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Word frequency rank distribution in {title}"),
            ("serif", 24),
        )
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (1.0..max_rank * 1.1).log_scale(),
            (0.5..max_freq * 1.5).log_scale(),
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Rank")
        .y_desc("Frequency")
        .draw()
        .map_err(render_err)?;

    let raw_alpha = if binned.is_some() { 0.25 } else { 0.9 };
    chart
        .draw_series(
            raw.iter()
                .map(|&(r, f)| Circle::new((r, f), 2, BLUE.mix(raw_alpha).filled())),
        )
        .map_err(render_err)?
        .label("Raw")
        .legend(|(x, y)| Circle::new((x, y), 3, BLUE.filled()));

    if let Some(binned) = binned {
        chart
            .draw_series(
                binned
                    .iter()
                    .map(|&(r, f)| Circle::new((r, f), 4, BLACK.filled())),
            )
            .map_err(render_err)?
            .label("Log binned")
            .legend(|(x, y)| Circle::new((x, y), 4, BLACK.filled()));
    }

    if let Some(fit) = fit {
        let fit_points: Vec<(f64, f64)> = raw
            .iter()
            .map(|&(r, _)| (r, fit.predict(r)))
            .collect();
        chart
            .draw_series(LineSeries::new(fit_points, RED.stroke_width(2)))
            .map_err(render_err)?
            .label("Fit")
            .legend(|(x, y)| PathElement::new(vec![(x - 5, y), (x + 5, y)], RED));

        root.draw(&Text::new(
            format!("β = {:.2}", fit.beta),
            (640, 40),
            ("serif", 22).into_font().style(FontStyle::Bold),
        ))
        .map_err(render_err)?;
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Relative n-gram entropy per canto as a line-and-marker plot.
pub fn plot_relative_entropy(path: &Path, title: &str, entropies: &[(usize, f64)]) -> Result<()> {
    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let max_canto = entropies.iter().map(|&(i, _)| i).max().unwrap_or(1);
    let (min_val, max_val) = entropies.iter().fold((0.0f64, 0.0f64), |(lo, hi), &(_, v)| {
        (lo.min(v), hi.max(v))
    });
    let pad = ((max_val - min_val) * 0.1).max(0.1);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Relative n-gram entropy across canti - {title}"),
            ("serif", 24),
        )
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(
            0.0..(max_canto + 1) as f64,
            (min_val - pad)..(max_val + pad),
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Canto number")
        .y_desc("Relative bigram entropy")
        .draw()
        .map_err(render_err)?;

    let points: Vec<(f64, f64)> = entropies.iter().map(|&(i, v)| (i as f64, v)).collect();
    chart
        .draw_series(LineSeries::new(points.clone(), &BLACK))
        .map_err(render_err)?;
    chart
        .draw_series(points.iter().map(|&p| Circle::new(p, 3, BLACK.filled())))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Draw a high-centrality subgraph.
///
/// Seed nodes are steel blue, pulled-in neighbors light coral, node
/// size scales with degree within the subgraph, edges gray. Layout is
/// a seeded spring embedding.
pub fn plot_subgraph(
    path: &Path,
    title: &str,
    subgraph: &Subgraph,
    seeds: &[String],
    seed: u64,
) -> Result<()> {
    let root = BitMapBackend::new(path, (1000, 850)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let positions = spring_layout(subgraph, 50, seed);
    let seed_set: FxHashSet<&str> = seeds.iter().map(String::as_str).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("serif", 26))
        .margin(15)
        .build_cartesian_2d(-1.2..1.2, -1.2..1.2)
        .map_err(render_err)?;

    for (a, b, _) in &subgraph.edges {
        let pa = positions[a.as_str()];
        let pb = positions[b.as_str()];
        chart
            .draw_series(LineSeries::new(vec![pa, pb], &GRAY.mix(0.6)))
            .map_err(render_err)?;
    }

    chart
        .draw_series(subgraph.nodes.iter().map(|word| {
            let (x, y) = positions[word.as_str()];
            let radius = 4 + 2 * subgraph.degree(word).min(8) as i32;
            let color = if seed_set.contains(word.as_str()) {
                STEEL_BLUE
            } else {
                LIGHT_CORAL
            };
            EmptyElement::at((x, y))
                + Circle::new((0, 0), radius, color.mix(0.9).filled())
                + Text::new(word.clone(), (radius + 2, -6), ("serif", 14))
        }))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::centrality::extract_high_centrality_subgraph;
    use crate::graph::GraphBuilder;
    use crate::nlp::StopwordFilter;

    #[test]
    fn test_plots_write_files() {
        let dir = std::env::temp_dir().join("cantica_plot_tests");
        std::fs::create_dir_all(&dir).unwrap();

        let raw: Vec<(f64, f64)> = (1..=100).map(|r| (r as f64, 200.0 / r as f64)).collect();
        let fit = crate::freq::fit_power_law(&raw);
        let zipf_path = dir.join("zipf.png");
        plot_zipf(&zipf_path, "Inferno", &raw, None, fit).unwrap();
        assert!(zipf_path.exists());

        let entropy_path = dir.join("entropy.png");
        plot_relative_entropy(&entropy_path, "Inferno", &[(1, 0.5), (2, 0.7), (3, 0.6)]).unwrap();
        assert!(entropy_path.exists());

        let tokens = ["a", "b", "c", "a", "b", "d", "a"];
        let graph = GraphBuilder::from_tokens(&tokens, &StopwordFilter::empty()).freeze();
        let seeds = vec!["a".to_string()];
        let sub = extract_high_centrality_subgraph(&graph, &seeds, 3);
        let sub_path = dir.join("subgraph.png");
        plot_subgraph(&sub_path, "Inferno subgraph", &sub, &seeds, 42).unwrap();
        assert!(sub_path.exists());
    }
}
