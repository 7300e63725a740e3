//! `POST /latency-metrics` handler.
//!
//! Body decoding happens here; malformed input is answered with 400 and never
//! reaches the aggregator.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use latency_matrix_core::error::LatencyMatrixError;
use latency_matrix_core::MetricsReport;

use crate::app_state::AppState;
use crate::error::HttpError;

#[derive(Debug, Deserialize)]
pub struct MetricsRequest {
    pub regions: Vec<String>,
    #[serde(deserialize_with = "integral_ms")]
    pub threshold_ms: i64,
}

/// Integer, or a float with no fractional part (`150.0`). `150.5` is rejected.
fn integral_ms<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    let n = serde_json::Number::deserialize(d)?;
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(D::Error::custom(format!("threshold_ms must be an integer, got {n}"))),
    }
}

pub async fn latency_metrics(
    State(state): State<AppState>,
    payload: Result<Json<MetricsRequest>, JsonRejection>,
) -> Result<Json<MetricsReport>, HttpError> {
    let metrics = state.metrics();

    let Json(req) = payload.map_err(|rejection| {
        metrics.requests.inc(&[("outcome", "bad_request")]);
        tracing::debug!(error = %rejection, "rejected latency-metrics request");
        LatencyMatrixError::BadRequest(rejection.body_text())
    })?;

    let aggregator = state.aggregator();
    let started = Instant::now();
    let report = aggregator.compute(&req.regions, req.threshold_ms);
    metrics.compute_duration.observe(&[], started.elapsed());

    let unknown = req
        .regions
        .iter()
        .filter(|r| !aggregator.store().contains_region(r))
        .count();
    metrics.requests.inc(&[("outcome", "ok")]);
    metrics.regions_requested.add(&[], req.regions.len() as u64);
    metrics.unknown_regions.add(&[], unknown as u64);

    tracing::debug!(
        regions = req.regions.len(),
        unknown,
        threshold_ms = req.threshold_ms,
        "latency metrics computed"
    );

    Ok(Json(report))
}
