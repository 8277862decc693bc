use crate::types::condition::{ExtremeCounts, ExtremeProbabilities};
use crate::types::matched_sample::MatchedSample;
use crate::types::thresholds::ThresholdConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The complete outcome of one calendar-day analysis, ready for serialization.
///
/// Carries everything a consumer needs to render or audit the result: the
/// headline probabilities, the counts they came from, the raw per-year
/// samples, and the thresholds that were applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Display name for the queried place.
    pub location: String,
    /// `"lat, lon"` rendered to four decimal places.
    pub coordinates: String,
    /// The target date of the query.
    pub date: NaiveDate,
    /// Years that contributed at least one usable measurement. This is the
    /// shared denominator behind every probability.
    pub years_sampled: u32,
    pub counts: ExtremeCounts,
    pub probabilities: ExtremeProbabilities,
    /// One entry per historical year that matched the target month and day,
    /// ascending by year, including years excluded from the denominator.
    pub samples: Vec<MatchedSample>,
    /// The cutoffs this result was computed against.
    pub thresholds: ThresholdConfig,
}
