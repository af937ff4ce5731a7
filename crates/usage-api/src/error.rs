//! Error types for the usage API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use copilot_client::{CopilotError, ResourceId};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Usage aggregation errors.
///
/// Both abort the whole request. Callers only ever see a fixed detail string;
/// the upstream cause is logged.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("Failed to fetch messages")]
    MessagesUnavailable(#[source] CopilotError),

    #[error("Failed to fetch report")]
    ReportLookupFailed {
        report_id: ResourceId,
        #[source]
        source: CopilotError,
    },
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for UsageError {
    fn into_response(self) -> Response {
        match &self {
            UsageError::MessagesUnavailable(source) => {
                error!(error = %source, "Message listing failed");
            }
            UsageError::ReportLookupFailed { report_id, source } => {
                error!(report_id = %report_id, error = %source, "Report lookup failed");
            }
        }

        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
