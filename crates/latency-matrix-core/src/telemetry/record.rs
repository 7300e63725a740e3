//! A single telemetry observation and its load-time validation.

use serde_json::{Map, Value};

/// Normalized field names (lower-case, separators stripped).
const FIELD_REGION: &str = "region";
const FIELD_LATENCY: &str = "latencyms";
const FIELD_UPTIME: &str = "uptimepct";

/// One observation. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryRecord {
    pub region: String,
    pub latency_ms: f64,
    pub uptime_pct: f64,
}

impl TelemetryRecord {
    /// Build a record from already-typed values, enforcing the record invariants.
    pub fn new(region: impl Into<String>, latency_ms: f64, uptime_pct: f64) -> Result<Self, String> {
        let region = region.into();
        if region.trim().is_empty() {
            return Err("region must not be empty".into());
        }
        if !latency_ms.is_finite() || latency_ms < 0.0 {
            return Err(format!("latency must be a non-negative finite number, got {latency_ms}"));
        }
        if !uptime_pct.is_finite() {
            return Err(format!("uptime must be a finite number, got {uptime_pct}"));
        }
        Ok(Self { region, latency_ms, uptime_pct })
    }

    /// Parse one loosely-typed JSON entry.
    ///
    /// Field names are matched after normalization, so `latency_ms`,
    /// `latencyMs` and `Latency-MS` all resolve to the same field. Unknown
    /// fields are ignored. The error is a human-readable reason.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        let obj = value
            .as_object()
            .ok_or_else(|| format!("expected object, got {}", json_kind(value)))?;
        let fields = normalize_fields(obj);

        let region = match fields.iter().find(|(k, _)| k == FIELD_REGION) {
            Some((_, Value::String(s))) => s.clone(),
            Some((_, other)) => return Err(format!("region must be a string, got {}", json_kind(other))),
            None => return Err("missing field: region".into()),
        };
        let latency_ms = number_field(&fields, FIELD_LATENCY)?;
        let uptime_pct = number_field(&fields, FIELD_UPTIME)?;

        Self::new(region, latency_ms, uptime_pct)
    }

    /// Case-insensitive lookup key for this record's region.
    pub fn region_key(&self) -> String {
        region_key(&self.region)
    }
}

/// Lookup key used for case-insensitive region matching.
pub fn region_key(region: &str) -> String {
    region.to_lowercase()
}

/// Normalize a raw field name: lower-case, drop `_`, `-` and spaces.
pub fn normalize_field_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

fn normalize_fields(obj: &Map<String, Value>) -> Vec<(String, &Value)> {
    obj.iter().map(|(k, v)| (normalize_field_name(k), v)).collect()
}

fn number_field(fields: &[(String, &Value)], name: &str) -> Result<f64, String> {
    match fields.iter().find(|(k, _)| k == name) {
        Some((_, v)) => v
            .as_f64()
            .ok_or_else(|| format!("{name} must be a number, got {}", json_kind(v))),
        None => Err(format!("missing field: {name}")),
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
