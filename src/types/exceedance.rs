use crate::types::month_day::MonthDay;
use crate::types::variable::{Direction, WeatherVariable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wilson 95% score interval around an empirical probability, clamped to
/// `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WilsonInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Distribution summary of the observed values behind an exceedance query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleStats {
    pub mean: f64,
    pub median: f64,
    /// Values at the 10th, 25th, 50th, 75th and 90th percentile ranks.
    pub percentiles: BTreeMap<u8, f64>,
}

/// Least-squares trend of the yearly exceedance fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendLine {
    /// Change in exceedance fraction per calendar year.
    pub slope_per_year: f64,
    pub intercept: f64,
    /// Pearson correlation of year against fraction.
    pub r_value: f64,
    /// Two-sided p-value of the slope, absent when fewer than three yearly
    /// points were available.
    pub p_value: Option<f64>,
}

/// Outcome of a single-variable threshold query over a day window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceedanceReport {
    pub variable: WeatherVariable,
    pub threshold: f64,
    pub direction: Direction,
    pub month_day: MonthDay,
    /// Days on either side of the target included in the sample.
    pub window_days: u32,
    pub start_year: i32,
    pub end_year: i32,
    /// Usable observations in the window.
    pub n: u32,
    /// Observations beyond the threshold.
    pub k: u32,
    /// `k / n`, or zero when the window held no usable observation.
    pub probability: f64,
    pub wilson95: Option<WilsonInterval>,
    pub stats: Option<SampleStats>,
    pub trend: Option<TrendLine>,
}
