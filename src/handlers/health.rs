//! Health check handler
//!
//! Basic liveness endpoint for load balancers and infrastructure monitoring.

use axum::Json;
use serde::Serialize;

/// Public health check response
///
/// Simple status indicator for load balancers and health monitoring.
/// No sensitive information (commit hashes, build timestamps) is exposed.
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    /// Status indicator (always "ok")
    pub status: String,
    /// Service name, useful when several services sit behind one gateway
    pub service: String,
}

/// GET /health
///
/// Does not touch the database and does not require authentication.
///
/// # Example
/// ```bash
/// curl http://localhost:8080/health
/// # Returns: {"status":"ok","service":"userhub"}
/// ```
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        service: "userhub".to_string(),
    })
}
