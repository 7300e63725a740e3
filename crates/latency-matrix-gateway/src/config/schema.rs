use std::net::SocketAddr;

use axum::http::HeaderValue;
use serde::Deserialize;

use latency_matrix_core::error::{LatencyMatrixError, Result};
use latency_matrix_core::telemetry::MalformedPolicy;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    pub telemetry: TelemetrySection,

    #[serde(default)]
    pub cors: CorsSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(LatencyMatrixError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.gateway.validate()?;
        self.telemetry.validate()?;
        self.cors.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            LatencyMatrixError::BadRequest(format!(
                "gateway.listen must be a valid socket address, got {:?}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetrySection {
    /// JSON dataset, read once at startup.
    pub path: String,

    #[serde(default)]
    pub on_malformed: MalformedPolicy,
}

impl TelemetrySection {
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(LatencyMatrixError::BadRequest(
                "telemetry.path must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsSection {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// `["*"]` for any origin, otherwise explicit origins.
    #[serde(default = "default_allow_origins")]
    pub allow_origins: Vec<String>,
}

impl Default for CorsSection {
    fn default() -> Self {
        Self {
            enabled: true,
            allow_origins: default_allow_origins(),
        }
    }
}

impl CorsSection {
    pub fn validate(&self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        if self.allow_origins.is_empty() {
            return Err(LatencyMatrixError::BadRequest(
                "cors.allow_origins must not be empty when cors is enabled".into(),
            ));
        }
        if self.allows_any_origin() && self.allow_origins.len() > 1 {
            return Err(LatencyMatrixError::BadRequest(
                "cors.allow_origins: \"*\" cannot be combined with explicit origins".into(),
            ));
        }
        self.origin_headers().map(|_| ())
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allow_origins.iter().any(|o| o == "*")
    }

    /// Explicit origins as header values. Empty when any origin is allowed.
    pub fn origin_headers(&self) -> Result<Vec<HeaderValue>> {
        if self.allows_any_origin() {
            return Ok(Vec::new());
        }
        self.allow_origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o).map_err(|_| {
                    LatencyMatrixError::BadRequest(format!("cors.allow_origins: invalid origin {o:?}"))
                })
            })
            .collect()
    }
}

fn default_true() -> bool {
    true
}

fn default_allow_origins() -> Vec<String> {
    vec!["*".into()]
}
