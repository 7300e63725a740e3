//! Metrics aggregator: the per-request computation over the store.

use std::sync::Arc;

use crate::telemetry::TelemetryStore;

use super::report::{MetricsReport, RegionStats};
use super::summary::{mean, percentile, round2};

const P95: f64 = 95.0;

/// Stateless between calls; cloning shares the same store.
#[derive(Debug, Clone)]
pub struct Aggregator {
    store: Arc<TelemetryStore>,
}

impl Aggregator {
    pub fn new(store: Arc<TelemetryStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TelemetryStore {
        &self.store
    }

    /// Compute stats for each requested region, keyed by the caller's spelling.
    ///
    /// Regions are processed independently and in order; an exact repeat of a
    /// key overwrites the earlier entry.
    pub fn compute<S: AsRef<str>>(&self, regions: &[S], threshold_ms: i64) -> MetricsReport {
        let mut report = MetricsReport::with_capacity(regions.len());
        for region in regions {
            let region = region.as_ref();
            report.insert(region.to_string(), self.region_stats(region, threshold_ms));
        }
        report
    }

    /// Stats for a single region. All zeros when nothing matches.
    pub fn region_stats(&self, region: &str, threshold_ms: i64) -> RegionStats {
        let records = self.store.records_for(region);
        if records.is_empty() {
            return RegionStats::ZERO;
        }

        let latencies: Vec<f64> = records.iter().map(|r| r.latency_ms).collect();
        let uptimes: Vec<f64> = records.iter().map(|r| r.uptime_pct).collect();
        let threshold = threshold_ms as f64;

        RegionStats {
            avg_latency: round2(mean(&latencies).unwrap_or_default()),
            p95_latency: round2(percentile(&latencies, P95).unwrap_or_default()),
            avg_uptime: round2(mean(&uptimes).unwrap_or_default()),
            breach_count: latencies.iter().filter(|&&l| l > threshold).count() as u64,
        }
    }
}
