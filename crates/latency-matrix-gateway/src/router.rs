//! Axum router wiring.
//!
//! `POST /latency-metrics` plus the ops endpoints. CORS is applied to the whole
//! router; preflight `OPTIONS` requests are answered by the CORS layer.

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsSection;
use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cfg().cors);

    let router = Router::new()
        .route("/latency-metrics", post(transport::http::latency_metrics))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// Build the CORS layer, or `None` when disabled. Origins were validated at
/// config load, so unparsable entries are simply dropped here.
pub fn cors_layer(cfg: &CorsSection) -> Option<CorsLayer> {
    if !cfg.enabled {
        return None;
    }
    let origin = if cfg.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(cfg.origin_headers().unwrap_or_default())
    };
    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::POST])
            .allow_headers(Any),
    )
}
