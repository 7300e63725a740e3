//! Shared error type across latency-matrix crates.

use thiserror::Error;

use crate::telemetry::LoadError;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request or config.
    BadRequest,
    /// Telemetry dataset could not be loaded.
    LoadFailed,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::LoadFailed => "LOAD_FAILED",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, LatencyMatrixError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum LatencyMatrixError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("telemetry load failed: {0}")]
    Load(#[from] LoadError),
    #[error("internal: {0}")]
    Internal(String),
}

impl LatencyMatrixError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            LatencyMatrixError::BadRequest(_) => ClientCode::BadRequest,
            LatencyMatrixError::Load(_) => ClientCode::LoadFailed,
            LatencyMatrixError::Internal(_) => ClientCode::Internal,
        }
    }
}
