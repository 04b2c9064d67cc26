//! Liveness and readiness probes.
//!
//! ```text
//! GET /health/live   Process is up
//! GET /health/ready  Process is accepting work
//! ```

use actix_web::{HttpResponse, get};
use serde::Serialize;

/// Probe response body.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct HealthStatus {
    /// Either `live` or `ready`.
    pub status: &'static str,
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health/live",
    responses((status = 200, description = "Process is live", body = HealthStatus)),
    tags = ["health"],
    operation_id = "healthLive"
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus { status: "live" })
}

/// Readiness probe.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses((status = 200, description = "Process is ready", body = HealthStatus)),
    tags = ["health"],
    operation_id = "healthReady"
)]
#[get("/health/ready")]
pub async fn ready() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus { status: "ready" })
}
