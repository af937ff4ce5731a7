//! HTTP request handlers.

use super::types::{HealthResponse, UsageResponse};
use super::AppState;
use crate::error::UsageError;
use axum::{extract::State, Json};
use tracing::info;

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Usage for every message of the current billing period.
pub async fn get_usage(State(state): State<AppState>) -> Result<Json<UsageResponse>, UsageError> {
    let usage = state.aggregator.current_period().await?;

    info!(items = usage.len(), "Usage request served");

    Ok(Json(UsageResponse { usage }))
}
