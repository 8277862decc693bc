use crate::power::error::PowerApiError;
use crate::types::daily_record::DailyRecord;
use crate::types::daily_series::DailySeries;
use crate::types::date_key::DateKey;
use crate::types::variable::WeatherVariable;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Sentinel POWER substitutes for missing observations when the header does
/// not announce one.
const DEFAULT_FILL_VALUE: f64 = -999.0;

/// Shape of a POWER `temporal/daily/point` JSON payload.
///
/// Only the parts this crate consumes are modeled; the service sends plenty
/// more (geometry, units, timings) that deserialization skips over.
#[derive(Debug, Deserialize)]
pub struct PowerResponse {
    properties: PowerProperties,
    #[serde(default)]
    header: PowerHeader,
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    /// Parameter code to date-keyed values, e.g. `T2M_MAX -> 19810101 -> -2.3`.
    parameter: HashMap<String, BTreeMap<String, Option<f64>>>,
}

#[derive(Debug, Default, Deserialize)]
struct PowerHeader {
    fill_value: Option<f64>,
}

impl PowerResponse {
    fn fill_value(&self) -> f64 {
        self.header.fill_value.unwrap_or(DEFAULT_FILL_VALUE)
    }

    /// Pivots the per-parameter maps into one chronological series of typed
    /// records.
    ///
    /// A record is emitted for every date key appearing under any known
    /// parameter, so a day missing from one parameter still shows up with that
    /// field absent. JSON `null` and the announced fill value both normalize
    /// to an absent field.
    pub fn into_daily_series(self) -> Result<DailySeries, PowerApiError> {
        let fill = self.fill_value();
        let parameter = self.properties.parameter;

        let mut keys: BTreeSet<&String> = BTreeSet::new();
        for variable in WeatherVariable::ALL {
            if let Some(values) = parameter.get(variable.power_code()) {
                keys.extend(values.keys());
            }
        }

        let lookup = |variable: WeatherVariable, key: &String| -> Option<f64> {
            parameter
                .get(variable.power_code())
                .and_then(|values| values.get(key))
                .copied()
                .flatten()
                .filter(|value| *value != fill)
        };

        let mut records = Vec::with_capacity(keys.len());
        for key in keys {
            let date_key: DateKey = key.parse()?;
            records.push(DailyRecord {
                date_key,
                max_temperature_c: lookup(WeatherVariable::MaxTemperature, key),
                min_temperature_c: lookup(WeatherVariable::MinTemperature, key),
                precipitation_mm: lookup(WeatherVariable::Precipitation, key),
                wind_speed_ms: lookup(WeatherVariable::WindSpeed, key),
                relative_humidity_pct: lookup(WeatherVariable::RelativeHumidity, key),
            });
        }
        Ok(DailySeries::from_records(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> PowerResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn pivots_parameters_into_records() {
        let response = parse(
            r#"{
                "properties": {
                    "parameter": {
                        "T2M_MAX": {"19810101": -2.5, "19810102": 1.0},
                        "T2M_MIN": {"19810101": -9.1, "19810102": -4.2},
                        "PRECTOTCORR": {"19810101": 0.4, "19810102": 21.7},
                        "WS10M": {"19810101": 3.1, "19810102": 11.0},
                        "RH2M": {"19810101": 81.0, "19810102": 75.5}
                    }
                },
                "header": {"fill_value": -999.0}
            }"#,
        );
        let series = response.into_daily_series().unwrap();
        assert_eq!(series.len(), 2);

        let second = series.get("19810102".parse().unwrap()).unwrap();
        assert_eq!(second.max_temperature_c, Some(1.0));
        assert_eq!(second.min_temperature_c, Some(-4.2));
        assert_eq!(second.precipitation_mm, Some(21.7));
        assert_eq!(second.wind_speed_ms, Some(11.0));
        assert_eq!(second.relative_humidity_pct, Some(75.5));
    }

    #[test]
    fn null_and_fill_value_both_normalize_to_absent() {
        let response = parse(
            r#"{
                "properties": {
                    "parameter": {
                        "T2M_MAX": {"19810101": null},
                        "RH2M": {"19810101": -999.0}
                    }
                },
                "header": {"fill_value": -999.0}
            }"#,
        );
        let series = response.into_daily_series().unwrap();
        let record = series.get("19810101".parse().unwrap()).unwrap();
        assert_eq!(record.max_temperature_c, None);
        assert_eq!(record.relative_humidity_pct, None);
        assert!(record.is_all_absent());
    }

    #[test]
    fn honors_a_custom_fill_value() {
        let response = parse(
            r#"{
                "properties": {
                    "parameter": {
                        "WS10M": {"19810101": -99.0, "19810102": 4.0}
                    }
                },
                "header": {"fill_value": -99.0}
            }"#,
        );
        let series = response.into_daily_series().unwrap();
        assert_eq!(
            series.get("19810101".parse().unwrap()).unwrap().wind_speed_ms,
            None
        );
        assert_eq!(
            series.get("19810102".parse().unwrap()).unwrap().wind_speed_ms,
            Some(4.0)
        );
    }

    #[test]
    fn default_fill_value_applies_without_header() {
        let response = parse(
            r#"{
                "properties": {
                    "parameter": {
                        "T2M_MAX": {"19810101": -999.0}
                    }
                }
            }"#,
        );
        let series = response.into_daily_series().unwrap();
        assert!(series.get("19810101".parse().unwrap()).unwrap().is_all_absent());
    }

    #[test]
    fn takes_the_union_of_date_keys_across_parameters() {
        let response = parse(
            r#"{
                "properties": {
                    "parameter": {
                        "T2M_MAX": {"19810102": 5.0},
                        "WS10M": {"19810101": 2.0}
                    }
                }
            }"#,
        );
        let series = response.into_daily_series().unwrap();
        assert_eq!(series.len(), 2);

        let first = series.get("19810101".parse().unwrap()).unwrap();
        assert_eq!(first.wind_speed_ms, Some(2.0));
        assert_eq!(first.max_temperature_c, None);

        let second = series.get("19810102".parse().unwrap()).unwrap();
        assert_eq!(second.max_temperature_c, Some(5.0));
        assert_eq!(second.wind_speed_ms, None);
    }

    #[test]
    fn unknown_parameters_are_ignored() {
        let response = parse(
            r#"{
                "properties": {
                    "parameter": {
                        "T2M_MAX": {"19810101": 5.0},
                        "ALLSKY_SFC_SW_DWN": {"19810101": 12.3, "19810102": 14.0}
                    }
                }
            }"#,
        );
        let series = response.into_daily_series().unwrap();
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn malformed_date_key_is_an_error() {
        let response = parse(
            r#"{
                "properties": {
                    "parameter": {
                        "T2M_MAX": {"1981-01-01": 5.0}
                    }
                }
            }"#,
        );
        let error = response.into_daily_series().unwrap_err();
        assert!(matches!(error, PowerApiError::MalformedDateKey(_)));
    }

    #[test]
    fn empty_parameter_map_yields_an_empty_series() {
        let response = parse(r#"{"properties": {"parameter": {}}}"#);
        let series = response.into_daily_series().unwrap();
        assert!(series.is_empty());
    }
}
