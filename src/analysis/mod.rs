pub mod aggregator;
pub mod classifier;
pub mod exceedance;
pub mod matcher;
pub mod stats;
pub mod trend;
