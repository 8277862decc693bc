use crate::types::condition::ConditionFlags;
use crate::types::matched_sample::MatchedSample;
use crate::types::thresholds::ThresholdConfig;

/// Classifies one sampled day against the threshold configuration.
///
/// Each condition checks a single field, except very uncomfortable, which
/// requires both the maximum temperature and the relative humidity components
/// to hold at once. An absent field never raises a flag: missing data reads
/// as "not extreme", not as an error.
///
/// # Example
///
/// ```
/// use powerday::{classify, DailyRecord, MatchedSample, ThresholdConfig};
///
/// let sample = MatchedSample::from_record(DailyRecord {
///     max_temperature_c: Some(36.2),
///     relative_humidity_pct: Some(74.0),
///     ..DailyRecord::empty("19950704".parse().unwrap())
/// });
/// let flags = classify(&sample, &ThresholdConfig::default());
/// assert!(flags.very_hot);
/// assert!(flags.very_uncomfortable);
/// assert!(!flags.very_wet);
/// ```
pub fn classify(sample: &MatchedSample, thresholds: &ThresholdConfig) -> ConditionFlags {
    let record = &sample.record;
    ConditionFlags {
        very_hot: record
            .max_temperature_c
            .map_or(false, |t| t >= thresholds.very_hot_c),
        very_cold: record
            .min_temperature_c
            .map_or(false, |t| t <= thresholds.very_cold_c),
        very_windy: record
            .wind_speed_ms
            .map_or(false, |w| w >= thresholds.very_windy_ms),
        very_wet: record
            .precipitation_mm
            .map_or(false, |p| p >= thresholds.very_wet_mm),
        very_uncomfortable: match (record.max_temperature_c, record.relative_humidity_pct) {
            (Some(t), Some(rh)) => {
                t >= thresholds.uncomfortable_temp_c && rh >= thresholds.uncomfortable_rh
            }
            _ => false,
        },
    }
}
