//! latency-matrix core: telemetry records, the immutable store, and the
//! per-region statistics aggregator.
//!
//! This crate carries no transport or runtime dependencies. The gateway owns
//! HTTP, config and process lifecycle; everything here is pure data and
//! computation so it can be shared by any front end and by tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `LatencyMatrixError`/`LoadError` so a bad dataset is reported,
//! not crashed on.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod stats;
pub mod telemetry;

/// Shared result type.
pub use error::{LatencyMatrixError, Result};
pub use stats::{Aggregator, MetricsReport, RegionStats};
pub use telemetry::{LoadError, MalformedPolicy, TelemetryRecord, TelemetryStore};
