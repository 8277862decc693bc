use crate::types::date_key::DateKey;
use crate::types::variable::WeatherVariable;
use serde::{Deserialize, Serialize};

/// One calendar day of observations at a fixed location.
///
/// Every measurement is optional: the upstream archive has coverage gaps, and
/// a record is kept even when only a single field came through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date_key: DateKey,
    pub max_temperature_c: Option<f64>,  // T2M_MAX
    pub min_temperature_c: Option<f64>,  // T2M_MIN
    pub precipitation_mm: Option<f64>,   // PRECTOTCORR
    pub wind_speed_ms: Option<f64>,      // WS10M
    pub relative_humidity_pct: Option<f64>, // RH2M
}

impl DailyRecord {
    /// A record with all five measurements absent.
    pub fn empty(date_key: DateKey) -> DailyRecord {
        DailyRecord {
            date_key,
            max_temperature_c: None,
            min_temperature_c: None,
            precipitation_mm: None,
            wind_speed_ms: None,
            relative_humidity_pct: None,
        }
    }

    /// Whether every measurement is absent. Such a record carries no usable
    /// signal and is excluded from sample denominators.
    pub fn is_all_absent(&self) -> bool {
        self.max_temperature_c.is_none()
            && self.min_temperature_c.is_none()
            && self.precipitation_mm.is_none()
            && self.wind_speed_ms.is_none()
            && self.relative_humidity_pct.is_none()
    }

    /// The measurement for one variable, if present.
    pub fn value(&self, variable: WeatherVariable) -> Option<f64> {
        match variable {
            WeatherVariable::MaxTemperature => self.max_temperature_c,
            WeatherVariable::MinTemperature => self.min_temperature_c,
            WeatherVariable::Precipitation => self.precipitation_mm,
            WeatherVariable::WindSpeed => self.wind_speed_ms,
            WeatherVariable::RelativeHumidity => self.relative_humidity_pct,
        }
    }
}
