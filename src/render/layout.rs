//! Force-directed (Fruchterman-Reingold) layout for subgraph drawing.
//!
//! Initial positions come from a seeded RNG, so a fixed seed yields the
//! same picture on every run.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;

use crate::centrality::Subgraph;

/// Compute 2D positions for every subgraph node, roughly within the
/// unit square centered on the origin.
pub fn spring_layout(
    subgraph: &Subgraph,
    iterations: usize,
    seed: u64,
) -> FxHashMap<String, (f64, f64)> {
    let n = subgraph.node_count();
    if n == 0 {
        return FxHashMap::default();
    }

    let index: FxHashMap<&str, usize> = subgraph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, w)| (w.as_str(), i))
        .collect();
    let edges: Vec<(usize, usize)> = subgraph
        .edges
        .iter()
        .map(|(a, b, _)| (index[a.as_str()], index[b.as_str()]))
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut pos: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5)))
        .collect();

    let k = (1.0 / n as f64).sqrt();
    let mut temperature = 0.1;
    let cooling = temperature / iterations.max(1) as f64;

    for _ in 0..iterations {
        let mut disp = vec![(0.0f64, 0.0f64); n];

        // Repulsion between all pairs.
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
                let force = k * k / dist;
                let (fx, fy) = (dx / dist * force, dy / dist * force);
                disp[i].0 += fx;
                disp[i].1 += fy;
                disp[j].0 -= fx;
                disp[j].1 -= fy;
            }
        }

        // Attraction along edges.
        for &(a, b) in &edges {
            let dx = pos[a].0 - pos[b].0;
            let dy = pos[a].1 - pos[b].1;
            let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
            let force = dist * dist / k;
            let (fx, fy) = (dx / dist * force, dy / dist * force);
            disp[a].0 -= fx;
            disp[a].1 -= fy;
            disp[b].0 += fx;
            disp[b].1 += fy;
        }

        // Displace, capped by the current temperature.
        for i in 0..n {
            let (dx, dy) = disp[i];
            let len = (dx * dx + dy * dy).sqrt().max(1e-9);
            let capped = len.min(temperature);
            pos[i].0 += dx / len * capped;
            pos[i].1 += dy / len * capped;
        }

        temperature = (temperature - cooling).max(1e-3);
    }

    // Rescale into [-1, 1].
    let max_extent = pos
        .iter()
        .flat_map(|&(x, y)| [x.abs(), y.abs()])
        .fold(1e-9f64, f64::max);
    subgraph
        .nodes
        .iter()
        .zip(pos)
        .map(|(w, (x, y))| (w.clone(), (x / max_extent, y / max_extent)))
        .collect()
}
