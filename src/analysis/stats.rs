use crate::types::exceedance::{SampleStats, WilsonInterval};
use std::collections::BTreeMap;

/// z for a two-sided 95% normal interval.
const Z_95: f64 = 1.96;

/// Percentile ranks reported by [`sample_stats`].
const PERCENTILE_RANKS: [u8; 5] = [10, 25, 50, 75, 90];

/// Wilson score interval at 95% confidence for `successes` out of `trials`,
/// clamped to `[0, 1]`. `None` when there were no trials.
///
/// Unlike the plain normal approximation, the Wilson interval stays sensible
/// for small counts and for probabilities near the edges, which is exactly
/// where rare-weather queries live.
pub fn wilson_interval(successes: u32, trials: u32) -> Option<WilsonInterval> {
    if trials == 0 {
        return None;
    }
    let n = f64::from(trials);
    let p_hat = f64::from(successes) / n;
    let z2 = Z_95 * Z_95;
    let denominator = 1.0 + z2 / n;
    let center = p_hat + z2 / (2.0 * n);
    let adjustment = Z_95 * (p_hat * (1.0 - p_hat) / n + z2 / (4.0 * n * n)).sqrt();
    Some(WilsonInterval {
        lower: ((center - adjustment) / denominator).max(0.0),
        upper: ((center + adjustment) / denominator).min(1.0),
    })
}

/// Mean, median and fixed percentiles of the observed values. `None` for an
/// empty sample.
///
/// Percentiles, and the median as their 50th, interpolate linearly between
/// the two nearest order statistics of the sorted sample.
pub fn sample_stats(values: &[f64]) -> Option<SampleStats> {
    if values.is_empty() {
        return None;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mut percentiles = BTreeMap::new();
    for rank in PERCENTILE_RANKS {
        percentiles.insert(rank, linear_quantile(&sorted, f64::from(rank) / 100.0));
    }
    Some(SampleStats {
        mean,
        median: linear_quantile(&sorted, 0.5),
        percentiles,
    })
}

/// Quantile of a sorted, non-empty sample by linear interpolation between the
/// two nearest order statistics.
fn linear_quantile(sorted: &[f64], tau: f64) -> f64 {
    let position = (sorted.len() - 1) as f64 * tau;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    let weight = position - position.floor();
    sorted[below] + weight * (sorted[above] - sorted[below])
}
