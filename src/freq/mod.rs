//! Word frequency distributions and rank-frequency (Zipf) statistics.
//!
//! Frequencies are counted over the raw normalized token stream (no
//! stopword removal), ranked descending, and fitted with a power law
//! in log10-log10 space. Logarithmic rank binning is available to
//! denoise the right tail before fitting or plotting.

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Token counts for one text unit.
#[derive(Debug, Clone, Default)]
pub struct FreqDist {
    counts: FxHashMap<String, u64>,
}

impl FreqDist {
    /// Count occurrences of each token.
    pub fn from_tokens(tokens: &[&str]) -> Self {
        let mut counts = FxHashMap::default();
        for &token in tokens {
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of one token.
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }

    /// Total token count.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Frequencies sorted descending, paired with 1-based ranks.
    pub fn rank_frequency(&self) -> Vec<(f64, f64)> {
        let mut freqs: Vec<u64> = self.counts.values().copied().collect();
        freqs.sort_unstable_by(|a, b| b.cmp(a));
        freqs
            .into_iter()
            .enumerate()
            .map(|(i, f)| ((i + 1) as f64, f as f64))
            .collect()
    }
}

/// A fitted power law `log10(freq) = beta * log10(rank) + intercept`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PowerLawFit {
    /// Slope in log-log space. Negative for Zipf-like distributions.
    pub beta: f64,
    pub intercept: f64,
}

impl PowerLawFit {
    /// Predicted frequency at a given rank.
    pub fn predict(&self, rank: f64) -> f64 {
        10f64.powf(self.beta * rank.log10() + self.intercept)
    }
}

/// Least-squares line fit in log10-log10 space.
///
/// Points with non-positive rank or frequency are ignored. Returns
/// `None` when fewer than two usable points remain.
pub fn fit_power_law(points: &[(f64, f64)]) -> Option<PowerLawFit> {
    let logged: Vec<(f64, f64)> = points
        .iter()
        .filter(|&&(r, f)| r > 0.0 && f > 0.0)
        .map(|&(r, f)| (r.log10(), f.log10()))
        .collect();
    if logged.len() < 2 {
        return None;
    }

    let n = logged.len() as f64;
    let sum_x: f64 = logged.iter().map(|(x, _)| x).sum();
    let sum_y: f64 = logged.iter().map(|(_, y)| y).sum();
    let sum_xx: f64 = logged.iter().map(|(x, _)| x * x).sum();
    let sum_xy: f64 = logged.iter().map(|(x, y)| x * y).sum();

    let denom = n * sum_xx - sum_x * sum_x;
    if denom == 0.0 {
        return None;
    }
    let beta = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - beta * sum_x) / n;

    Some(PowerLawFit { beta, intercept })
}

/// Logarithmic binning in rank space.
///
/// Bins use geometric-mean rank and arithmetic-mean frequency; bins
/// with fewer than `min_points` members are dropped.
pub fn log_bin(points: &[(f64, f64)], n_bins: usize, min_points: usize) -> Vec<(f64, f64)> {
    let usable: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|&(r, f)| r > 0.0 && f > 0.0)
        .collect();
    if usable.is_empty() || n_bins == 0 {
        return Vec::new();
    }

    let min_rank = usable.iter().map(|&(r, _)| r).fold(f64::MAX, f64::min);
    let max_rank = usable.iter().map(|&(r, _)| r).fold(f64::MIN, f64::max);
    let log_min = min_rank.log10();
    let log_max = max_rank.log10();
    let step = (log_max - log_min) / n_bins as f64;

    let mut binned = Vec::new();
    for bin in 0..n_bins {
        let lo = 10f64.powf(log_min + step * bin as f64);
        let hi = 10f64.powf(log_min + step * (bin + 1) as f64);
        // Last bin is closed on the right so the max rank is included.
        let members: Vec<(f64, f64)> = usable
            .iter()
            .copied()
            .filter(|&(r, _)| r >= lo && (r < hi || (bin == n_bins - 1 && r <= hi)))
            .collect();
        if members.len() < min_points {
            continue;
        }

        let log_rank_mean =
            members.iter().map(|(r, _)| r.ln()).sum::<f64>() / members.len() as f64;
        let freq_mean = members.iter().map(|(_, f)| f).sum::<f64>() / members.len() as f64;
        binned.push((log_rank_mean.exp(), freq_mean));
    }

    binned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let dist = FreqDist::from_tokens(&["amor", "luce", "amor", "amor"]);

        assert_eq!(dist.count("amor"), 3);
        assert_eq!(dist.count("luce"), 1);
        assert_eq!(dist.count("ombra"), 0);
        assert_eq!(dist.vocabulary_size(), 2);
        assert_eq!(dist.total(), 4);
    }

    #[test]
    fn test_rank_frequency_descending() {
        let dist = FreqDist::from_tokens(&["a", "a", "a", "b", "b", "c"]);
        let rf = dist.rank_frequency();

        assert_eq!(rf, vec![(1.0, 3.0), (2.0, 2.0), (3.0, 1.0)]);
    }

    #[test]
    fn test_fit_recovers_exact_power_law() {
        // freq = 100 * rank^-1, exactly linear in log-log space.
        let points: Vec<(f64, f64)> = (1..=50)
            .map(|r| (r as f64, 100.0 / r as f64))
            .collect();
        let fit = fit_power_law(&points).unwrap();

        assert!((fit.beta - (-1.0)).abs() < 1e-9);
        assert!((fit.intercept - 2.0).abs() < 1e-9);
        assert!((fit.predict(10.0) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_fit_needs_two_points() {
        assert!(fit_power_law(&[(1.0, 5.0)]).is_none());
        assert!(fit_power_law(&[]).is_none());
    }

    #[test]
    fn test_log_bin_reduces_points() {
        let points: Vec<(f64, f64)> = (1..=1000)
            .map(|r| (r as f64, 1000.0 / r as f64))
            .collect();
        let binned = log_bin(&points, 20, 1);

        assert!(!binned.is_empty());
        assert!(binned.len() <= 20);
        // Binned ranks stay within the raw range and increase.
        for window in binned.windows(2) {
            assert!(window[0].0 < window[1].0);
        }
        assert!(binned.first().unwrap().0 >= 1.0);
        assert!(binned.last().unwrap().0 <= 1000.0);
    }

    #[test]
    fn test_log_bin_empty_input() {
        assert!(log_bin(&[], 10, 1).is_empty());
    }
}
