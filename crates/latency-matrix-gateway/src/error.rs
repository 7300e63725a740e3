//! HTTP rendering of the shared error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use latency_matrix_core::error::LatencyMatrixError;

/// Wrapper so the core error can be returned from axum handlers.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct HttpError(#[from] pub LatencyMatrixError);

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            LatencyMatrixError::BadRequest(_) => StatusCode::BAD_REQUEST,
            LatencyMatrixError::Load(_) | LatencyMatrixError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        (self.status(), body).into_response()
    }
}
