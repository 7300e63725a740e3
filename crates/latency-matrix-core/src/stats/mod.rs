//! Per-region statistics over the telemetry store.

pub mod aggregate;
pub mod report;
pub mod summary;

pub use aggregate::Aggregator;
pub use report::{MetricsReport, RegionStats};
pub use summary::{mean, percentile, round2};
