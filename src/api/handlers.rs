//! API handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;

/// Health check with host status
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        greeting: state.greeting().to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub greeting: String,
}
