//! Liveness check.
//!
//! The check has no dependencies to probe, so it always reports `ok`.

use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
}

/// Body returned by `GET /health`, serialised as `{"status":"ok"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: Status,
}

impl HealthStatus {
    pub const OK: HealthStatus = HealthStatus { status: Status::Ok };
}

/// Reports process liveness.
pub fn health_check() -> HealthStatus {
    HealthStatus::OK
}

/// `GET /health`
pub async fn health_handler() -> Json<HealthStatus> {
    Json(health_check())
}
