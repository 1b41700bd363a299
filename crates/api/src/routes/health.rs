//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

/// Health report for the API process.
///
/// A 200 here only means the process is serving requests; the product
/// store and the event bus report their failures per operation instead.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET /health — liveness probe.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "catalog-api",
    })
}
