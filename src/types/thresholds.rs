use serde::{Deserialize, Serialize};

/// Fixed cutoffs for the five extreme-condition checks.
///
/// A configuration is supplied once per analysis and applied uniformly to
/// every sampled year. [`ThresholdConfig::default`] carries the standard
/// values; callers tuning for a different climate can pass their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdConfig {
    /// Very hot when the daily maximum reaches this temperature, °C.
    pub very_hot_c: f64,
    /// Very cold when the daily minimum drops to this temperature, °C.
    pub very_cold_c: f64,
    /// Very windy at or above this wind speed, m/s.
    pub very_windy_ms: f64,
    /// Very wet at or above this daily precipitation, mm.
    pub very_wet_mm: f64,
    /// Muggy-day temperature component, °C. Both this and the humidity
    /// component must hold for a day to count as very uncomfortable.
    pub uncomfortable_temp_c: f64,
    /// Muggy-day relative humidity component, %.
    #[serde(rename = "uncomfortableRH")]
    pub uncomfortable_rh: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        ThresholdConfig {
            very_hot_c: 35.0,
            very_cold_c: 0.0,
            very_windy_ms: 10.0,
            very_wet_mm: 20.0,
            uncomfortable_temp_c: 30.0,
            uncomfortable_rh: 70.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_carries_the_standard_cutoffs() {
        let thresholds = ThresholdConfig::default();
        assert_eq!(thresholds.very_hot_c, 35.0);
        assert_eq!(thresholds.very_cold_c, 0.0);
        assert_eq!(thresholds.very_windy_ms, 10.0);
        assert_eq!(thresholds.very_wet_mm, 20.0);
        assert_eq!(thresholds.uncomfortable_temp_c, 30.0);
        assert_eq!(thresholds.uncomfortable_rh, 70.0);
    }

    #[test]
    fn humidity_key_keeps_its_capitalized_suffix() {
        let json = serde_json::to_value(ThresholdConfig::default()).unwrap();
        assert_eq!(json["veryHotC"], 35.0);
        assert_eq!(json["uncomfortableRH"], 70.0);
        assert!(json.get("uncomfortableRh").is_none());
    }
}
