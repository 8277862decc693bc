pub mod analysis_result;
pub mod condition;
pub mod daily_record;
pub mod daily_series;
pub mod date_key;
pub mod exceedance;
pub mod matched_sample;
pub mod month_day;
pub mod thresholds;
pub mod variable;
