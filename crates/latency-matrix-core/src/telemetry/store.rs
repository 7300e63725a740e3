//! Immutable in-memory telemetry table with a case-insensitive region index.
//!
//! Built once at startup and shared read-only (`Arc<TelemetryStore>`), so
//! concurrent readers need no locking.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use super::record::{region_key, TelemetryRecord};
use super::{LoadError, MalformedPolicy};

#[derive(Debug, Default)]
pub struct TelemetryStore {
    records: Vec<TelemetryRecord>,
    // lower-cased region -> positions in `records`, in load order
    index: HashMap<String, Vec<usize>>,
}

impl TelemetryStore {
    /// Read and validate a JSON dataset from disk.
    pub fn load(path: impl AsRef<Path>, policy: MalformedPolicy) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&s, policy)
    }

    pub fn from_json_str(s: &str, policy: MalformedPolicy) -> Result<Self, LoadError> {
        match serde_json::from_str::<Value>(s)? {
            Value::Array(values) => Self::from_values(values, policy),
            Value::Object(_) => Err(LoadError::NotASequence("object")),
            Value::String(_) => Err(LoadError::NotASequence("string")),
            Value::Number(_) => Err(LoadError::NotASequence("number")),
            Value::Bool(_) => Err(LoadError::NotASequence("bool")),
            Value::Null => Err(LoadError::NotASequence("null")),
        }
    }

    /// Validate raw entries according to `policy`.
    pub fn from_values(values: Vec<Value>, policy: MalformedPolicy) -> Result<Self, LoadError> {
        let mut records = Vec::with_capacity(values.len());
        let mut skipped = 0usize;

        for (index, v) in values.iter().enumerate() {
            match TelemetryRecord::from_value(v) {
                Ok(r) => records.push(r),
                Err(reason) => match policy {
                    MalformedPolicy::Reject => {
                        return Err(LoadError::MalformedRecord { index, reason });
                    }
                    MalformedPolicy::Skip => {
                        tracing::warn!(index, %reason, "skipping malformed telemetry record");
                        skipped += 1;
                    }
                },
            }
        }

        if skipped > 0 {
            tracing::info!(skipped, kept = records.len(), "telemetry load skipped malformed records");
        }

        Self::from_records(records)
    }

    /// Index already-typed records. Fails if any record has an empty region.
    pub fn from_records(records: Vec<TelemetryRecord>) -> Result<Self, LoadError> {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, r) in records.iter().enumerate() {
            if r.region.trim().is_empty() {
                return Err(LoadError::MalformedRecord {
                    index: i,
                    reason: "region must not be empty".into(),
                });
            }
            index.entry(r.region_key()).or_default().push(i);
        }
        Ok(Self { records, index })
    }

    /// Records whose region matches case-insensitively. Empty when none match.
    pub fn records_for(&self, region: &str) -> Vec<&TelemetryRecord> {
        self.index
            .get(&region_key(region))
            .map(|ids| ids.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    pub fn contains_region(&self, region: &str) -> bool {
        self.index.contains_key(&region_key(region))
    }

    pub fn records(&self) -> &[TelemetryRecord] {
        &self.records
    }

    /// Distinct lower-cased regions, sorted.
    pub fn regions(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.index.keys().map(String::as_str).collect();
        out.sort_unstable();
        out
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
