mod analysis;
mod error;
mod power;
mod powerday;
mod types;

pub use error::PowerdayError;
pub use powerday::*;

pub use analysis::aggregator::*;
pub use analysis::classifier::*;
pub use analysis::exceedance::*;
pub use analysis::matcher::*;
pub use analysis::stats::*;
pub use analysis::trend::*;

pub use types::analysis_result::*;
pub use types::condition::*;
pub use types::daily_record::*;
pub use types::daily_series::*;
pub use types::date_key::*;
pub use types::exceedance::*;
pub use types::matched_sample::*;
pub use types::month_day::*;
pub use types::thresholds::*;
pub use types::variable::*;

pub use power::error::PowerApiError;
