//! API response types.

use crate::usage::UsageItem;
use serde::Serialize;

/// Usage for the current billing period.
#[derive(Debug, Serialize)]
pub struct UsageResponse {
    pub usage: Vec<UsageItem>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
