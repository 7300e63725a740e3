//! Shared application state.
//!
//! The telemetry store is loaded here, before the listener binds, so a bad
//! dataset stops the process instead of serving.

use std::sync::Arc;

use latency_matrix_core::error::Result;
use latency_matrix_core::{Aggregator, TelemetryStore};

use crate::config::GatewayConfig;
use crate::obs::ServiceMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<ServiceMetrics>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    aggregator: Aggregator,
}

impl AppState {
    /// Load the dataset named by `cfg.telemetry` and build state.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let store = TelemetryStore::load(&cfg.telemetry.path, cfg.telemetry.on_malformed)?;
        tracing::info!(
            path = %cfg.telemetry.path,
            records = store.len(),
            regions = store.regions().len(),
            "telemetry loaded"
        );
        Ok(Self::with_store(cfg, store))
    }

    /// Build state around an already-loaded store.
    pub fn with_store(cfg: GatewayConfig, store: TelemetryStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                aggregator: Aggregator::new(Arc::new(store)),
            }),
            metrics: Arc::new(ServiceMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.inner.aggregator
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.metrics
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    /// Store gauges appended to the `/metrics` output.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        let store = self.aggregator().store();
        vec![
            ("latmat_store_records", store.len() as u64),
            ("latmat_store_regions", store.regions().len() as u64),
        ]
    }
}
