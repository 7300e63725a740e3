//! Telemetry dataset: strict records and the immutable in-memory store.
//!
//! Raw input is loosely typed JSON. It is validated and normalized exactly
//! once at load time so the aggregator can assume well-typed fields.

pub mod record;
pub mod store;

use serde::Deserialize;
use thiserror::Error;

pub use record::TelemetryRecord;
pub use store::TelemetryStore;

/// What to do with a record that fails validation during load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Fail the whole load on the first malformed record.
    #[default]
    Reject,
    /// Drop malformed records (each logged) and keep the rest.
    Skip,
}

/// Dataset load failure. Always fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read {path} failed: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("top-level value must be an array of records, got {0}")]
    NotASequence(&'static str),
    #[error("malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}
