use crate::types::daily_record::DailyRecord;
use serde::{Deserialize, Serialize};

/// A historical day that matched the analysis target, tagged with the year it
/// came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedSample {
    pub year: i32,
    #[serde(flatten)]
    pub record: DailyRecord,
}

impl MatchedSample {
    pub fn from_record(record: DailyRecord) -> MatchedSample {
        MatchedSample {
            year: record.date_key.year(),
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_tag_comes_from_the_date_key() {
        let record = DailyRecord::empty("19930615".parse().unwrap());
        let sample = MatchedSample::from_record(record);
        assert_eq!(sample.year, 1993);
        assert_eq!(sample.record, record);
    }

    #[test]
    fn serializes_flat() {
        let record = DailyRecord {
            precipitation_mm: Some(22.0),
            ..DailyRecord::empty("19930615".parse().unwrap())
        };
        let json = serde_json::to_value(MatchedSample::from_record(record)).unwrap();
        assert_eq!(json["year"], 1993);
        assert_eq!(json["dateKey"], "19930615");
        assert_eq!(json["precipitationMm"], 22.0);
    }
}
