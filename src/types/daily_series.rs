use crate::types::daily_record::DailyRecord;
use crate::types::date_key::DateKey;
use serde::{Deserialize, Serialize};

/// A chronologically ordered run of daily records, at most one per date key.
///
/// Serializes as a plain array of records; deserialization re-sorts, so a
/// series read back from JSON upholds the same ordering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "Vec<DailyRecord>", from = "Vec<DailyRecord>")]
pub struct DailySeries {
    records: Vec<DailyRecord>,
}

impl DailySeries {
    /// Builds a series from records in any order. Records are sorted by date
    /// key; when a key repeats, the first occurrence wins.
    pub fn from_records(mut records: Vec<DailyRecord>) -> DailySeries {
        records.sort_by_key(|record| record.date_key);
        records.dedup_by_key(|record| record.date_key);
        DailySeries { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up the record for one date key.
    pub fn get(&self, key: DateKey) -> Option<&DailyRecord> {
        self.records
            .binary_search_by_key(&key, |record| record.date_key)
            .ok()
            .map(|index| &self.records[index])
    }

    /// The earliest record, when the series is non-empty.
    pub fn first(&self) -> Option<&DailyRecord> {
        self.records.first()
    }

    /// The latest record, when the series is non-empty.
    pub fn last(&self) -> Option<&DailyRecord> {
        self.records.last()
    }

    /// All records in chronological order.
    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }
}

impl From<Vec<DailyRecord>> for DailySeries {
    fn from(records: Vec<DailyRecord>) -> DailySeries {
        DailySeries::from_records(records)
    }
}

impl From<DailySeries> for Vec<DailyRecord> {
    fn from(series: DailySeries) -> Vec<DailyRecord> {
        series.records
    }
}

impl IntoIterator for DailySeries {
    type Item = DailyRecord;
    type IntoIter = std::vec::IntoIter<DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a DailySeries {
    type Item = &'a DailyRecord;
    type IntoIter = std::slice::Iter<'a, DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str) -> DailyRecord {
        DailyRecord::empty(key.parse().unwrap())
    }

    #[test]
    fn sorts_records_chronologically() {
        let series = DailySeries::from_records(vec![
            record("19820101"),
            record("19810101"),
            record("19811231"),
        ]);
        let keys: Vec<String> = series
            .records()
            .iter()
            .map(|r| r.date_key.to_string())
            .collect();
        assert_eq!(keys, ["19810101", "19811231", "19820101"]);
        assert_eq!(series.first().unwrap().date_key.year(), 1981);
        assert_eq!(series.last().unwrap().date_key.year(), 1982);
    }

    #[test]
    fn first_record_wins_on_duplicate_keys() {
        let kept = DailyRecord {
            max_temperature_c: Some(20.0),
            ..record("19810101")
        };
        let dropped = DailyRecord {
            max_temperature_c: Some(99.0),
            ..record("19810101")
        };
        let series = DailySeries::from_records(vec![kept, dropped]);
        assert_eq!(series.len(), 1);
        assert_eq!(
            series.get("19810101".parse().unwrap()).unwrap().max_temperature_c,
            Some(20.0)
        );
    }

    #[test]
    fn get_misses_absent_keys() {
        let series = DailySeries::from_records(vec![record("19810101")]);
        assert!(series.get("19810102".parse().unwrap()).is_none());
    }

    #[test]
    fn empty_series_is_well_behaved() {
        let series = DailySeries::default();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert!(series.first().is_none());
        assert!(series.last().is_none());
    }

    #[test]
    fn deserialization_restores_chronological_order() {
        let series = DailySeries::from_records(vec![record("19810102"), record("19810101")]);
        let json = serde_json::to_string(&series).unwrap();
        assert!(json.starts_with('['), "series should serialize as a bare array: {json}");

        let shuffled = r#"[{"dateKey":"19820101"},{"dateKey":"19810101"}]"#;
        let restored: DailySeries = serde_json::from_str(shuffled).unwrap();
        assert_eq!(restored.first().unwrap().date_key.year(), 1981);
        assert_eq!(restored.last().unwrap().date_key.year(), 1982);
    }
}
