use crate::power::error::PowerApiError;
use crate::power::response::PowerResponse;
use crate::types::daily_series::DailySeries;
use crate::types::date_key::DateKey;
use crate::types::variable::WeatherVariable;
use chrono::NaiveDate;
use log::{info, warn};
use reqwest::Client;

const POWER_DAILY_ENDPOINT: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";

/// Thin client for the POWER `temporal/daily/point` endpoint.
///
/// One call performs one HTTP request; there is no retry loop and no cache.
/// Timeouts and user agent come from the [`Client`] handed in.
pub struct PowerFetcher {
    client: Client,
}

impl PowerFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches the requested variables for one point and date range and pivots
    /// the payload into a [`DailySeries`].
    pub async fn fetch_daily(
        &self,
        latitude: f64,
        longitude: f64,
        start: NaiveDate,
        end: NaiveDate,
        variables: &[WeatherVariable],
        community: &str,
    ) -> Result<DailySeries, PowerApiError> {
        let url = build_url(latitude, longitude, start, end, variables, community);
        info!("Requesting POWER daily data from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PowerApiError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    PowerApiError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    PowerApiError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .text()
            .await
            .map_err(|e| PowerApiError::BodyRead(url.clone(), e))?;

        let parsed: PowerResponse = serde_json::from_str(&body)
            .map_err(|source| PowerApiError::MalformedResponse { url, source })?;

        let series = parsed.into_daily_series()?;
        info!("Parsed {} daily records from POWER response", series.len());
        Ok(series)
    }
}

fn build_url(
    latitude: f64,
    longitude: f64,
    start: NaiveDate,
    end: NaiveDate,
    variables: &[WeatherVariable],
    community: &str,
) -> String {
    let parameters = variables
        .iter()
        .map(|variable| variable.power_code())
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{}?parameters={}&community={}&longitude={}&latitude={}&start={}&end={}&format=JSON",
        POWER_DAILY_ENDPOINT,
        parameters,
        community,
        longitude,
        latitude,
        DateKey::from(start),
        DateKey::from(end),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_matches_the_power_contract() {
        let url = build_url(
            31.5204,
            74.3587,
            NaiveDate::from_ymd_opt(1981, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
            &WeatherVariable::ALL,
            "AG",
        );
        assert_eq!(
            url,
            "https://power.larc.nasa.gov/api/temporal/daily/point\
             ?parameters=T2M_MAX,T2M_MIN,PRECTOTCORR,WS10M,RH2M\
             &community=AG&longitude=74.3587&latitude=31.5204\
             &start=19810101&end=20260825&format=JSON"
        );
    }

    #[test]
    fn build_url_with_a_single_variable() {
        let url = build_url(
            48.8566,
            2.3522,
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            &[WeatherVariable::Precipitation],
            "RE",
        );
        assert!(url.contains("parameters=PRECTOTCORR&community=RE"));
        assert!(url.contains("start=19900101&end=20251231"));
    }
}
