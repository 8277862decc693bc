use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Raised when an 8-character `YYYYMMDD` key cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid date key '{0}', expected 8 digits in YYYYMMDD form")]
pub struct InvalidDateKey(pub String);

/// A `YYYYMMDD` identifier for one calendar day, as used by the POWER daily
/// endpoint to key every observation.
///
/// Keys compare chronologically because the year component leads. A key is
/// structurally valid (month 1-12, day 1-31) without being required to name a
/// real calendar date; [`DateKey::as_naive_date`] resolves the difference.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct DateKey {
    year: i32,
    month: u32,
    day: u32,
}

impl DateKey {
    /// Builds a key from its components, or `None` when a component is out of
    /// structural range.
    pub fn new(year: i32, month: u32, day: u32) -> Option<DateKey> {
        if !(0..=9999).contains(&year) || !(1..=12).contains(&month) || !(1..=31).contains(&day)
        {
            return None;
        }
        Some(DateKey { year, month, day })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// The key as a real calendar date, or `None` for structurally valid but
    /// non-existent days such as `19900230`.
    pub fn as_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = InvalidDateKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidDateKey(s.to_string()));
        }
        let year = s[..4].parse().map_err(|_| InvalidDateKey(s.to_string()))?;
        let month = s[4..6].parse().map_err(|_| InvalidDateKey(s.to_string()))?;
        let day = s[6..8].parse().map_err(|_| InvalidDateKey(s.to_string()))?;
        DateKey::new(year, month, day).ok_or_else(|| InvalidDateKey(s.to_string()))
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> String {
        key.to_string()
    }
}

impl TryFrom<String> for DateKey {
    type Error = InvalidDateKey;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_round_trip() {
        let key: DateKey = "19810704".parse().unwrap();
        assert_eq!(key.year(), 1981);
        assert_eq!(key.month(), 7);
        assert_eq!(key.day(), 4);
        assert_eq!(key.to_string(), "19810704");
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!("1981074".parse::<DateKey>().is_err());
        assert!("198107045".parse::<DateKey>().is_err());
        assert!("1981X704".parse::<DateKey>().is_err());
        assert!("19811304".parse::<DateKey>().is_err());
        assert!("19810700".parse::<DateKey>().is_err());
        assert!("19810732".parse::<DateKey>().is_err());
    }

    #[test]
    fn orders_chronologically() {
        let a: DateKey = "19811231".parse().unwrap();
        let b: DateKey = "19820101".parse().unwrap();
        let c: DateKey = "19820102".parse().unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn structurally_valid_key_may_not_name_a_real_date() {
        let key: DateKey = "19900230".parse().unwrap();
        assert_eq!(key.as_naive_date(), None);

        let leap: DateKey = "20000229".parse().unwrap();
        assert!(leap.as_naive_date().is_some());
    }

    #[test]
    fn converts_from_naive_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let key = DateKey::from(date);
        assert_eq!(key.to_string(), "20240229");
        assert_eq!(key.as_naive_date(), Some(date));
    }

    #[test]
    fn serializes_as_string() {
        let key: DateKey = "19810101".parse().unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"19810101\"");
        let back: DateKey = serde_json::from_str("\"19810101\"").unwrap();
        assert_eq!(back, key);
    }
}
