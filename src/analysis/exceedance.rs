use crate::analysis::stats::{sample_stats, wilson_interval};
use crate::analysis::trend::{fit_trend, yearly_fractions};
use crate::types::exceedance::{SampleStats, TrendLine, WilsonInterval};
use crate::types::matched_sample::MatchedSample;
use crate::types::variable::{Direction, WeatherVariable};

/// The statistical payload of an exceedance query, computed from the matched
/// window samples alone.
#[derive(Debug, Clone, PartialEq)]
pub struct ExceedanceSummary {
    /// Usable observations in the window.
    pub n: u32,
    /// Observations beyond the threshold.
    pub k: u32,
    /// `k / n`, or zero when no observation was usable.
    pub probability: f64,
    pub wilson95: Option<WilsonInterval>,
    pub stats: Option<SampleStats>,
    pub trend: Option<TrendLine>,
}

/// Counts threshold crossings over the window samples and derives the
/// interval, summary and trend statistics.
///
/// Missing values never enter `n`: a day without the variable can count
/// neither for nor against the threshold. With no usable observation at all
/// the summary is empty — probability zero and every statistic absent.
pub fn summarize_exceedance(
    samples: &[MatchedSample],
    variable: WeatherVariable,
    threshold: f64,
    direction: Direction,
) -> ExceedanceSummary {
    let values: Vec<f64> = samples
        .iter()
        .filter_map(|sample| sample.record.value(variable))
        .collect();
    let n = values.len() as u32;
    let k = values
        .iter()
        .filter(|value| direction.exceeds(**value, threshold))
        .count() as u32;
    let probability = if n > 0 {
        f64::from(k) / f64::from(n)
    } else {
        0.0
    };
    let trend = if n == 0 {
        None
    } else {
        fit_trend(&yearly_fractions(samples, variable, threshold, direction))
    };
    ExceedanceSummary {
        n,
        k,
        probability,
        wilson95: wilson_interval(k, n),
        stats: sample_stats(&values),
        trend,
    }
}
