//! This module provides the main entry point for the POWER day-odds client.
//! It fetches historical daily weather for a coordinate from the NASA POWER
//! archive and turns it into empirical probabilities for a calendar day.

use crate::analysis::aggregator::aggregate;
use crate::analysis::exceedance::summarize_exceedance;
use crate::analysis::matcher::{match_calendar_day, match_day_window};
use crate::error::PowerdayError;
use crate::power::fetcher::PowerFetcher;
use crate::types::analysis_result::AnalysisResult;
use crate::types::daily_series::DailySeries;
use crate::types::exceedance::ExceedanceReport;
use crate::types::month_day::MonthDay;
use crate::types::thresholds::ThresholdConfig;
use crate::types::variable::{Direction, WeatherVariable};
use bon::bon;
use chrono::{Datelike, NaiveDate, Utc};
use reqwest::Client;
use std::time::Duration;

/// First day of the POWER daily archive.
const POWER_RECORD_START: (i32, u32, u32) = (1981, 1, 1);
/// POWER user community used unless a query overrides it.
const DEFAULT_COMMUNITY: &str = "AG";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_WINDOW_DAYS: u32 = 3;
const DEFAULT_EXCEEDANCE_START_YEAR: i32 = 1990;
const USER_AGENT: &str = concat!("powerday/", env!("CARGO_PKG_VERSION"));

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second
/// (index 1). Both values are degrees as `f64`.
///
/// # Examples
///
/// ```
/// use powerday::LatLon;
///
/// let lahore = LatLon(31.5204, 74.3587);
/// assert_eq!(lahore.0, 31.5204); // Latitude
/// assert_eq!(lahore.1, 74.3587); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// The main client for computing calendar-day weather odds.
///
/// Each query performs a single request against the NASA POWER daily archive
/// and runs a pure analysis pipeline over the response: no caching, no
/// retries, no state carried between calls. Two identical queries against an
/// unchanged archive return identical results.
///
/// Create an instance with [`Powerday::new()`] for the default 30 second
/// request timeout, or [`Powerday::with_timeout()`] to override it.
///
/// # Examples
///
/// ```rust
/// # use powerday::{Powerday, PowerdayError};
/// # fn run() -> Result<(), PowerdayError> {
/// let client = Powerday::new()?;
/// // Now you can use the client to analyze days or fetch series.
/// # Ok(())
/// # }
/// ```
pub struct Powerday {
    fetcher: PowerFetcher,
}

#[bon]
impl Powerday {
    /// Creates a client with a custom request timeout.
    ///
    /// The timeout covers the whole request, connection through body. POWER
    /// responses span four decades of daily data and routinely take several
    /// seconds, so very short timeouts will produce spurious failures.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Maximum duration for one archive request.
    ///
    /// # Errors
    ///
    /// Returns [`PowerdayError::HttpClient`] if the underlying HTTP client
    /// cannot be constructed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use powerday::{Powerday, PowerdayError};
    /// # use std::time::Duration;
    /// # fn run() -> Result<(), PowerdayError> {
    /// let client = Powerday::with_timeout(Duration::from_secs(60))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_timeout(timeout: Duration) -> Result<Self, PowerdayError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(PowerdayError::HttpClient)?;
        Ok(Self {
            fetcher: PowerFetcher::new(client),
        })
    }

    /// Creates a client with the default 30 second request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`PowerdayError::HttpClient`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new() -> Result<Self, PowerdayError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Computes the odds of extreme weather on one calendar day at one place.
    ///
    /// Fetches the full daily archive for the coordinate (1981 through today),
    /// keeps every year's record for the target month and day, classifies each
    /// against the thresholds, and reports how often each extreme condition
    /// occurred. The target's year only labels the output; a date of
    /// 2026-07-04 samples every historical July 4th.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The coordinate to analyze.
    /// * `.date(NaiveDate)`: **Required.** The target calendar day.
    /// * `.label(String)`: Optional. Display name for the place. Defaults to
    ///   the formatted coordinates.
    /// * `.thresholds(ThresholdConfig)`: Optional. Cutoffs for the five
    ///   conditions. Defaults to [`ThresholdConfig::default()`].
    ///
    /// # Returns
    ///
    /// A `Result` with the [`AnalysisResult`]: probabilities and counts for
    /// the five conditions, the shared `years_sampled` denominator, and the
    /// per-year samples behind them. A location with no usable archive data
    /// yields the all-zero result, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`PowerdayError::InvalidCoordinates`] when the latitude or
    /// longitude is out of range.
    /// Returns [`PowerdayError::PowerApi`] variants for network failures,
    /// HTTP error statuses, or a response body that cannot be decoded.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use powerday::{LatLon, Powerday, PowerdayError};
    /// # use chrono::NaiveDate;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), PowerdayError> {
    /// let client = Powerday::new()?;
    ///
    /// let result = client
    ///     .analyze()
    ///     .location(LatLon(31.5204, 74.3587))
    ///     .label("Lahore, Pakistan".to_string())
    ///     .date(NaiveDate::from_ymd_opt(2026, 7, 4).unwrap())
    ///     .call()
    ///     .await?;
    ///
    /// println!(
    ///     "Very hot on July 4th in {} out of {} years: p = {:.2}",
    ///     result.counts.very_hot, result.years_sampled, result.probabilities.very_hot,
    /// );
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn analyze(
        &self,
        location: LatLon,
        date: NaiveDate,
        label: Option<String>,
        thresholds: Option<ThresholdConfig>,
    ) -> Result<AnalysisResult, PowerdayError> {
        validate_location(location)?;
        let thresholds = thresholds.unwrap_or_default();

        let series = self
            .fetcher
            .fetch_daily(
                location.0,
                location.1,
                power_record_start(),
                today(),
                &WeatherVariable::ALL,
                DEFAULT_COMMUNITY,
            )
            .await?;

        let samples = match_calendar_day(&series, MonthDay::from(date));
        let totals = aggregate(&samples, &thresholds);

        let coordinates = format_coordinates(location);
        Ok(AnalysisResult {
            location: label.unwrap_or_else(|| coordinates.clone()),
            coordinates,
            date,
            years_sampled: totals.years_sampled,
            counts: totals.counts,
            probabilities: totals.probabilities,
            samples,
            thresholds,
        })
    }

    /// Fetches a raw daily series for a coordinate.
    ///
    /// This is the untouched input of the analysis pipeline: one typed record
    /// per archive day, chronological, with gaps kept as absent fields. Use it
    /// to run your own statistics or to feed [`match_calendar_day`] and
    /// friends directly.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The coordinate to fetch.
    /// * `.start(NaiveDate)`: Optional. First day requested. Defaults to
    ///   1981-01-01, the start of the POWER daily archive.
    /// * `.end(NaiveDate)`: Optional. Last day requested. Defaults to today.
    /// * `.variables(Vec<WeatherVariable>)`: Optional. Which parameters to
    ///   request. Defaults to all five.
    /// * `.community(String)`: Optional. POWER user community. Defaults to
    ///   `"AG"`.
    ///
    /// # Errors
    ///
    /// Returns [`PowerdayError::InvalidCoordinates`] when the latitude or
    /// longitude is out of range.
    /// Returns [`PowerdayError::PowerApi`] variants for request or decoding
    /// failures.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use powerday::{LatLon, Powerday, PowerdayError, WeatherVariable};
    /// # use chrono::NaiveDate;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), PowerdayError> {
    /// let client = Powerday::new()?;
    ///
    /// let series = client
    ///     .fetch_series()
    ///     .location(LatLon(52.5200, 13.4050))
    ///     .start(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
    ///     .end(NaiveDate::from_ymd_opt(2020, 12, 31).unwrap())
    ///     .variables(vec![WeatherVariable::Precipitation])
    ///     .call()
    ///     .await?;
    ///
    /// println!("Fetched {} records.", series.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn fetch_series(
        &self,
        location: LatLon,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        variables: Option<Vec<WeatherVariable>>,
        community: Option<String>,
    ) -> Result<DailySeries, PowerdayError> {
        validate_location(location)?;
        let start = start.unwrap_or_else(power_record_start);
        let end = end.unwrap_or_else(today);
        let variables = variables.unwrap_or_else(|| WeatherVariable::ALL.to_vec());
        let community = community.unwrap_or_else(|| DEFAULT_COMMUNITY.to_string());

        let series = self
            .fetcher
            .fetch_daily(location.0, location.1, start, end, &variables, &community)
            .await?;
        Ok(series)
    }

    /// Estimates how often one variable crosses a threshold around a calendar
    /// day, with uncertainty and a long-term trend.
    ///
    /// Instead of the single target day, this query pools every archive day
    /// within `window_days` of the target across the year range, then counts
    /// the fraction of usable observations strictly beyond the threshold. On
    /// top of the point estimate it reports a Wilson 95% interval, percentile
    /// statistics of the observed values, and a least-squares trend of the
    /// yearly exceedance fraction.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The coordinate to analyze.
    /// * `.variable(WeatherVariable)`: **Required.** The measurement to test.
    /// * `.threshold(f64)`: **Required.** The cutoff, in the variable's unit.
    /// * `.direction(Direction)`: **Required.** Which side of the cutoff
    ///   counts; comparisons are strict.
    /// * `.month_day(MonthDay)`: **Required.** The target calendar day.
    /// * `.window_days(u32)`: Optional. Day radius around the target.
    ///   Defaults to `3`.
    /// * `.start_year(i32)`: Optional. First year sampled. Defaults to 1990.
    /// * `.end_year(i32)`: Optional. Last year sampled. Defaults to last year,
    ///   the newest complete one.
    /// * `.community(String)`: Optional. POWER user community. Defaults to
    ///   `"AG"`.
    ///
    /// # Returns
    ///
    /// A `Result` with the [`ExceedanceReport`]. A window with no usable
    /// observation yields `n = 0`, probability zero and absent statistics,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`PowerdayError::InvalidCoordinates`] when the latitude or
    /// longitude is out of range.
    /// Returns [`PowerdayError::InvalidYearRange`] when the start year is
    /// after the end year.
    /// Returns [`PowerdayError::UnrepresentableYear`] when a year cannot be
    /// turned into a calendar date.
    /// Returns [`PowerdayError::PowerApi`] variants for request or decoding
    /// failures.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use powerday::{Direction, LatLon, MonthDay, Powerday, PowerdayError, WeatherVariable};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), PowerdayError> {
    /// let client = Powerday::new()?;
    ///
    /// // How often does mid-July Paris top 35 °C?
    /// let report = client
    ///     .exceedance()
    ///     .location(LatLon(48.8566, 2.3522))
    ///     .variable(WeatherVariable::MaxTemperature)
    ///     .threshold(35.0)
    ///     .direction(Direction::Above)
    ///     .month_day(MonthDay::new(7, 15).unwrap())
    ///     .call()
    ///     .await?;
    ///
    /// println!("p = {:.3} over {} observations", report.probability, report.n);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn exceedance(
        &self,
        location: LatLon,
        variable: WeatherVariable,
        threshold: f64,
        direction: Direction,
        month_day: MonthDay,
        window_days: Option<u32>,
        start_year: Option<i32>,
        end_year: Option<i32>,
        community: Option<String>,
    ) -> Result<ExceedanceReport, PowerdayError> {
        validate_location(location)?;
        let window_days = window_days.unwrap_or(DEFAULT_WINDOW_DAYS);
        let start_year = start_year.unwrap_or(DEFAULT_EXCEEDANCE_START_YEAR);
        let end_year = end_year.unwrap_or_else(|| today().year() - 1);
        if start_year > end_year {
            return Err(PowerdayError::InvalidYearRange {
                start: start_year,
                end: end_year,
            });
        }
        let start = NaiveDate::from_ymd_opt(start_year, 1, 1)
            .ok_or(PowerdayError::UnrepresentableYear(start_year))?;
        let end = NaiveDate::from_ymd_opt(end_year, 12, 31)
            .ok_or(PowerdayError::UnrepresentableYear(end_year))?;
        let community = community.unwrap_or_else(|| DEFAULT_COMMUNITY.to_string());

        let series = self
            .fetcher
            .fetch_daily(location.0, location.1, start, end, &[variable], &community)
            .await?;

        let samples = match_day_window(&series, month_day, window_days);
        let summary = summarize_exceedance(&samples, variable, threshold, direction);
        Ok(ExceedanceReport {
            variable,
            threshold,
            direction,
            month_day,
            window_days,
            start_year,
            end_year,
            n: summary.n,
            k: summary.k,
            probability: summary.probability,
            wilson95: summary.wilson95,
            stats: summary.stats,
            trend: summary.trend,
        })
    }
}

fn validate_location(location: LatLon) -> Result<(), PowerdayError> {
    let LatLon(latitude, longitude) = location;
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(PowerdayError::InvalidCoordinates {
            latitude,
            longitude,
        });
    }
    Ok(())
}

fn format_coordinates(location: LatLon) -> String {
    format!("{:.4}, {:.4}", location.0, location.1)
}

fn power_record_start() -> NaiveDate {
    let (year, month, day) = POWER_RECORD_START;
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
