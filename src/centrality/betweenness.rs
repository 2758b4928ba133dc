//! Weighted betweenness centrality (Brandes, sampled sources).
//!
//! Edge weight is used directly as the path cost fed to Dijkstra, so a
//! heavier co-occurrence edge counts as a *longer* hop. That convention
//! is deliberately preserved from the original analysis rather than
//! inverted; see DESIGN.md. Costs are integer sums of `u32` weights,
//! which makes equal-distance comparisons exact.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::CentralityRanking;
use crate::graph::WordGraph;

/// Rank nodes by the fraction of weighted shortest paths passing
/// through them.
///
/// Exact when `sample_size >= node count`; otherwise `sample_size`
/// source nodes are drawn with a `ChaCha8Rng` seeded from `seed` and
/// the accumulated scores are extrapolated by `n / k`. Scores are
/// normalized by `1 / ((n-1)(n-2))`, counting each unordered pair from
/// both endpoints.
pub fn betweenness_ranking(
    graph: &WordGraph,
    top_n: usize,
    sample_size: usize,
    seed: u64,
) -> CentralityRanking {
    let n = graph.node_count();
    if n == 0 {
        return CentralityRanking::from_scores(Vec::new(), top_n);
    }

    let sources: Vec<u32> = if sample_size >= n {
        (0..n as u32).collect()
    } else {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rand::seq::index::sample(&mut rng, n, sample_size)
            .into_iter()
            .map(|i| i as u32)
            .collect()
    };

    let mut centrality = vec![0.0f64; n];
    for &s in &sources {
        accumulate_from_source(graph, s, &mut centrality);
    }

    let k = sources.len();
    let scale = if n > 2 {
        (1.0 / ((n - 1) as f64 * (n - 2) as f64)) * (n as f64 / k as f64)
    } else {
        1.0
    };

    let scored: Vec<(String, f64)> = centrality
        .iter()
        .enumerate()
        .map(|(id, &c)| (graph.word(id as u32).to_string(), c * scale))
        .collect();

    CentralityRanking::from_scores(scored, top_n)
}

/// One Brandes pass: Dijkstra from `s`, then dependency accumulation
/// in reverse settle order.
fn accumulate_from_source(graph: &WordGraph, s: u32, centrality: &mut [f64]) {
    let n = graph.node_count();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut sigma = vec![0.0f64; n];
    let mut preds: Vec<Vec<u32>> = vec![Vec::new(); n];
    let mut settled = vec![false; n];
    let mut order: Vec<u32> = Vec::with_capacity(n);

    let mut heap = BinaryHeap::new();
    dist[s as usize] = Some(0);
    sigma[s as usize] = 1.0;
    heap.push(Reverse((0u64, s)));

    while let Some(Reverse((d, v))) = heap.pop() {
        if settled[v as usize] {
            continue;
        }
        settled[v as usize] = true;
        order.push(v);

        for &(w, weight) in graph.neighbors(v) {
            if settled[w as usize] {
                continue;
            }
            let nd = d + weight as u64;
            match dist[w as usize] {
                Some(dw) if nd > dw => {}
                Some(dw) if nd == dw => {
                    // Another shortest path to w through v.
                    sigma[w as usize] += sigma[v as usize];
                    preds[w as usize].push(v);
                }
                _ => {
                    dist[w as usize] = Some(nd);
                    sigma[w as usize] = sigma[v as usize];
                    preds[w as usize] = vec![v];
                    heap.push(Reverse((nd, w)));
                }
            }
        }
    }

    let mut delta = vec![0.0f64; n];
    for &w in order.iter().rev() {
        for &v in &preds[w as usize] {
            delta[v as usize] += sigma[v as usize] / sigma[w as usize] * (1.0 + delta[w as usize]);
        }
        if w != s {
            centrality[w as usize] += delta[w as usize];
        }
    }
}
