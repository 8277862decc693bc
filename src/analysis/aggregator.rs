use crate::analysis::classifier::classify;
use crate::types::condition::{ExtremeCounts, ExtremeProbabilities};
use crate::types::matched_sample::MatchedSample;
use crate::types::thresholds::ThresholdConfig;

/// What the aggregation stage produces for one calendar-day query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayAggregate {
    /// Samples carrying at least one measurement; the shared denominator.
    pub years_sampled: u32,
    pub counts: ExtremeCounts,
    pub probabilities: ExtremeProbabilities,
}

/// Folds matched samples into per-condition counts and probabilities.
///
/// A sample with every field absent contributes to neither the counts nor the
/// denominator. Every probability divides by the same `years_sampled`, and an
/// empty input produces the all-zero aggregate rather than an error.
///
/// # Example
///
/// ```
/// use powerday::{aggregate, DailyRecord, MatchedSample, ThresholdConfig};
///
/// let samples: Vec<MatchedSample> = vec![
///     MatchedSample::from_record(DailyRecord {
///         max_temperature_c: Some(38.0),
///         ..DailyRecord::empty("19900704".parse().unwrap())
///     }),
///     MatchedSample::from_record(DailyRecord {
///         max_temperature_c: Some(29.0),
///         ..DailyRecord::empty("19910704".parse().unwrap())
///     }),
/// ];
///
/// let totals = aggregate(&samples, &ThresholdConfig::default());
/// assert_eq!(totals.years_sampled, 2);
/// assert_eq!(totals.counts.very_hot, 1);
/// assert_eq!(totals.probabilities.very_hot, 0.5);
/// ```
pub fn aggregate(samples: &[MatchedSample], thresholds: &ThresholdConfig) -> DayAggregate {
    let mut years_sampled = 0u32;
    let mut counts = ExtremeCounts::default();
    for sample in samples {
        if sample.record.is_all_absent() {
            continue;
        }
        years_sampled += 1;
        counts.record(classify(sample, thresholds));
    }
    DayAggregate {
        years_sampled,
        counts,
        probabilities: ExtremeProbabilities::from_counts(counts, years_sampled),
    }
}
