//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use latency_matrix_core::error::{LatencyMatrixError, Result};

pub use schema::{CorsSection, GatewayConfig, GatewaySection, TelemetrySection};

/// Config path when neither the first CLI argument nor the env var is set.
pub const DEFAULT_CONFIG_PATH: &str = "latency-matrix.yaml";
pub const CONFIG_PATH_ENV: &str = "LATENCY_MATRIX_CONFIG";

/// Resolve the config path: first CLI argument, then env var, then default.
pub fn resolve_path(arg: Option<String>, env: Option<String>) -> String {
    arg.or(env)
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| LatencyMatrixError::Internal(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| LatencyMatrixError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
