use axum::{extract::State, Json};
use serde::Serialize;

use crate::{error::Result, AppState};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        database: None,
    })
}

/// Ready once the catalog store answers a ping.
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<HealthStatus>> {
    state.store.ping().await?;

    Ok(Json(HealthStatus {
        status: "ready",
        database: Some("connected"),
    }))
}
