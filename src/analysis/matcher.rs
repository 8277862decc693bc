use crate::types::daily_series::DailySeries;
use crate::types::date_key::DateKey;
use crate::types::matched_sample::MatchedSample;
use crate::types::month_day::MonthDay;
use chrono::{Datelike, NaiveDate};

/// Selects every record in `series` falling on the target month and day.
///
/// The result is ascending by year, with at most one sample per year since a
/// series holds at most one record per date. February 29 targets only match
/// leap years, and a structurally valid but impossible target such as
/// February 30 matches nothing.
///
/// # Example
///
/// ```
/// use powerday::{match_calendar_day, DailyRecord, DailySeries, MonthDay};
///
/// let series = DailySeries::from_records(vec![
///     DailyRecord {
///         max_temperature_c: Some(36.1),
///         ..DailyRecord::empty("19900704".parse().unwrap())
///     },
///     DailyRecord {
///         max_temperature_c: Some(28.4),
///         ..DailyRecord::empty("19910704".parse().unwrap())
///     },
///     DailyRecord {
///         max_temperature_c: Some(35.0),
///         ..DailyRecord::empty("19910705".parse().unwrap())
///     },
/// ]);
///
/// let matched = match_calendar_day(&series, MonthDay::new(7, 4).unwrap());
/// assert_eq!(matched.len(), 2);
/// assert_eq!(matched[0].year, 1990);
/// assert_eq!(matched[1].year, 1991);
/// ```
pub fn match_calendar_day(series: &DailySeries, target: MonthDay) -> Vec<MatchedSample> {
    series
        .records()
        .iter()
        .filter(|record| target.matches(record.date_key))
        .map(|record| MatchedSample::from_record(*record))
        .collect()
}

/// Selects every record within `window_days` of the target month and day,
/// measured in calendar days and spanning year boundaries.
///
/// Distance is taken against the target's occurrence in the record's own year
/// and its two neighbors, whichever is closest, so a January 1st window
/// reaches back into late December. When the target day does not exist in a
/// year (February 29 outside leap years), that year's reference clamps to the
/// 28th.
pub fn match_day_window(
    series: &DailySeries,
    target: MonthDay,
    window_days: u32,
) -> Vec<MatchedSample> {
    series
        .records()
        .iter()
        .filter(|record| within_window(record.date_key, target, window_days))
        .map(|record| MatchedSample::from_record(*record))
        .collect()
}

fn within_window(key: DateKey, target: MonthDay, window_days: u32) -> bool {
    let date = match key.as_naive_date() {
        Some(date) => date,
        None => return false,
    };
    let mut closest: Option<i64> = None;
    for year_offset in -1i32..=1 {
        if let Some(reference) = target_in_year(date.year() + year_offset, target) {
            let distance = (date - reference).num_days().abs();
            closest = Some(match closest {
                Some(best) => best.min(distance),
                None => distance,
            });
        }
    }
    matches!(closest, Some(distance) if distance <= i64::from(window_days))
}

/// The target's date within one year, clamping impossible days to the 28th.
fn target_in_year(year: i32, target: MonthDay) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, target.month(), target.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, target.month(), target.day().min(28)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::daily_record::DailyRecord;

    fn series_of(keys: &[&str]) -> DailySeries {
        DailySeries::from_records(
            keys.iter()
                .map(|key| DailyRecord {
                    max_temperature_c: Some(20.0),
                    ..DailyRecord::empty(key.parse().unwrap())
                })
                .collect(),
        )
    }

    #[test]
    fn matches_one_sample_per_year_ascending() {
        let series = series_of(&[
            "19810704", "19810705", "19820704", "19840704", "19830704",
        ]);
        let matched = match_calendar_day(&series, MonthDay::new(7, 4).unwrap());
        let years: Vec<i32> = matched.iter().map(|sample| sample.year).collect();
        assert_eq!(years, [1981, 1982, 1983, 1984]);
    }

    #[test]
    fn leap_day_matches_only_leap_years() {
        let series = series_of(&[
            "19990228", "20000229", "20010228", "20040229", "20040228",
        ]);
        let matched = match_calendar_day(&series, MonthDay::new(2, 29).unwrap());
        let years: Vec<i32> = matched.iter().map(|sample| sample.year).collect();
        assert_eq!(years, [2000, 2004]);
    }

    #[test]
    fn impossible_target_matches_nothing() {
        let series = series_of(&["19810228", "19810230"]); // keys, not real dates
        let matched = match_calendar_day(&series, MonthDay::new(2, 30).unwrap());
        assert!(matched.is_empty());
    }

    #[test]
    fn empty_series_yields_no_samples() {
        let matched = match_calendar_day(&DailySeries::default(), MonthDay::new(7, 4).unwrap());
        assert!(matched.is_empty());
    }

    #[test]
    fn every_matched_key_decodes_to_the_target() {
        // Five full calendar years, every single day present.
        let mut records = Vec::new();
        let mut date = NaiveDate::from_ymd_opt(1981, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(1985, 12, 31).unwrap();
        while date <= end {
            records.push(DailyRecord {
                max_temperature_c: Some(10.0),
                ..DailyRecord::empty(DateKey::from(date))
            });
            date = date.succ_opt().unwrap();
        }
        let series = DailySeries::from_records(records);

        for (month, day, expected_years) in [(3, 15, 5), (12, 31, 5), (2, 29, 1), (2, 30, 0)] {
            let target = MonthDay::new(month, day).unwrap();
            let matched = match_calendar_day(&series, target);
            assert_eq!(matched.len(), expected_years, "target {:02}-{:02}", month, day);
            for sample in &matched {
                assert_eq!(sample.record.date_key.month(), month);
                assert_eq!(sample.record.date_key.day(), day);
                assert_eq!(sample.year, sample.record.date_key.year());
            }
        }
    }

    #[test]
    fn window_selects_neighboring_days() {
        let series = series_of(&[
            "19900711", "19900712", "19900715", "19900718", "19900719",
        ]);
        let matched = match_day_window(&series, MonthDay::new(7, 15).unwrap(), 3);
        let keys: Vec<String> = matched
            .iter()
            .map(|sample| sample.record.date_key.to_string())
            .collect();
        assert_eq!(keys, ["19900712", "19900715", "19900718"]);
    }

    #[test]
    fn window_zero_degenerates_to_exact_match() {
        let series = series_of(&["19900714", "19900715", "19900716"]);
        let matched = match_day_window(&series, MonthDay::new(7, 15).unwrap(), 0);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].record.date_key.to_string(), "19900715");
    }

    #[test]
    fn window_spans_the_year_boundary() {
        let series = series_of(&["19901230", "19901231", "19910102", "19910301"]);
        let matched = match_day_window(&series, MonthDay::new(1, 1).unwrap(), 2);
        let keys: Vec<String> = matched
            .iter()
            .map(|sample| sample.record.date_key.to_string())
            .collect();
        // Dec 30/31 sit within two days of the following Jan 1.
        assert_eq!(keys, ["19901230", "19901231", "19910102"]);
    }

    #[test]
    fn leap_target_clamps_to_feb_28_in_common_years() {
        let series = series_of(&["19990227", "19990228", "19990301", "20000229"]);
        let matched = match_day_window(&series, MonthDay::new(2, 29).unwrap(), 1);
        let keys: Vec<String> = matched
            .iter()
            .map(|sample| sample.record.date_key.to_string())
            .collect();
        // 1999 has no Feb 29, so its reference clamps to Feb 28; the 27th
        // and March 1 are both one day away. 2000 matches its real Feb 29.
        assert_eq!(keys, ["19990227", "19990228", "19990301", "20000229"]);
    }
}
