//! The daily weather variables served by the NASA POWER archive that this
//! crate knows how to request and interpret.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// One of the five daily parameters used by the analysis pipeline.
///
/// Each variant maps to the POWER parameter code sent in the request URL and
/// found again as a key under `properties.parameter` in the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeatherVariable {
    /// Daily maximum air temperature at 2 m, °C (`T2M_MAX`).
    MaxTemperature,
    /// Daily minimum air temperature at 2 m, °C (`T2M_MIN`).
    MinTemperature,
    /// Bias-corrected total precipitation, mm/day (`PRECTOTCORR`).
    Precipitation,
    /// Wind speed at 10 m, m/s (`WS10M`).
    WindSpeed,
    /// Relative humidity at 2 m, % (`RH2M`).
    RelativeHumidity,
}

impl WeatherVariable {
    /// All five variables, in the order the analysis pipeline requests them.
    pub const ALL: [WeatherVariable; 5] = [
        WeatherVariable::MaxTemperature,
        WeatherVariable::MinTemperature,
        WeatherVariable::Precipitation,
        WeatherVariable::WindSpeed,
        WeatherVariable::RelativeHumidity,
    ];

    /// The parameter code understood by the POWER temporal API.
    pub fn power_code(self) -> &'static str {
        match self {
            WeatherVariable::MaxTemperature => "T2M_MAX",
            WeatherVariable::MinTemperature => "T2M_MIN",
            WeatherVariable::Precipitation => "PRECTOTCORR",
            WeatherVariable::WindSpeed => "WS10M",
            WeatherVariable::RelativeHumidity => "RH2M",
        }
    }

    /// Human-readable unit label for display purposes.
    pub fn unit(self) -> &'static str {
        match self {
            WeatherVariable::MaxTemperature | WeatherVariable::MinTemperature => "°C",
            WeatherVariable::Precipitation => "mm/day",
            WeatherVariable::WindSpeed => "m/s",
            WeatherVariable::RelativeHumidity => "%",
        }
    }
}

impl Display for WeatherVariable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.power_code())
    }
}

/// Which side of a threshold an exceedance query counts.
///
/// Comparisons are strict: `Above` counts values greater than the threshold,
/// `Below` counts values less than it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Above,
    Below,
}

impl Direction {
    /// Whether `value` lies on this direction's side of `threshold`.
    pub fn exceeds(self, value: f64, threshold: f64) -> bool {
        match self {
            Direction::Above => value > threshold,
            Direction::Below => value < threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_codes_round_trip_through_all() {
        let codes: Vec<&str> = WeatherVariable::ALL.iter().map(|v| v.power_code()).collect();
        assert_eq!(
            codes,
            ["T2M_MAX", "T2M_MIN", "PRECTOTCORR", "WS10M", "RH2M"]
        );
    }

    #[test]
    fn direction_comparisons_are_strict() {
        assert!(Direction::Above.exceeds(35.1, 35.0));
        assert!(!Direction::Above.exceeds(35.0, 35.0));
        assert!(Direction::Below.exceeds(-0.1, 0.0));
        assert!(!Direction::Below.exceeds(0.0, 0.0));
    }
}
