use crate::types::date_key::DateKey;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A year-agnostic calendar day: the month/day pair an analysis targets.
///
/// Construction only checks structural bounds (month 1-12, day 1-31), so
/// targets like February 30 are representable. Such a target simply matches
/// nothing, and February 29 matches in leap years only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Builds a target day, or `None` when a component is out of bounds.
    pub fn new(month: u32, day: u32) -> Option<MonthDay> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(MonthDay { month, day })
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// Whether `key` falls on this month and day, regardless of year.
    pub fn matches(self, key: DateKey) -> bool {
        key.month() == self.month && key.day() == self.day
    }
}

impl From<NaiveDate> for MonthDay {
    fn from(date: NaiveDate) -> Self {
        MonthDay {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl Display for MonthDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}
