//! Copilot HTTP client.

use crate::error::CopilotError;
use crate::types::*;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Client for the message listing and report lookup sources.
///
/// Requests are sent once. Nothing is retried or cached.
#[derive(Clone)]
pub struct CopilotClient {
    client: Client,
    messages_url: String,
    reports_url: String,
}

impl CopilotClient {
    /// Create a new copilot client.
    ///
    /// `messages_url` is fetched as is; reports are looked up at
    /// `<reports_url>/<id>`.
    pub fn new(
        messages_url: impl Into<String>,
        reports_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CopilotError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            messages_url: messages_url.into(),
            reports_url: reports_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch all messages of the current billing period.
    #[instrument(skip(self))]
    pub async fn list_messages(&self) -> Result<Vec<Message>, CopilotError> {
        let response = self.client.get(&self.messages_url).send().await?;

        let body: MessagesResponse = self.handle_response(response).await?;
        debug!(count = body.messages.len(), "Fetched messages");
        Ok(body.messages)
    }

    /// Look up a report by id.
    ///
    /// Returns `Ok(None)` when the report does not exist.
    #[instrument(skip(self), fields(report_id = %id))]
    pub async fn find_report(&self, id: &ResourceId) -> Result<Option<Report>, CopilotError> {
        let url = self.report_url(id);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Report not found");
            return Ok(None);
        }

        self.handle_response(response).await.map(Some)
    }

    fn report_url(&self, id: &ResourceId) -> String {
        format!("{}/{}", self.reports_url, encode(&id.to_string()))
    }

    /// Handle HTTP response, converting errors appropriately.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, CopilotError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            debug!("Response body: {}", truncate(&body, 200));
            serde_json::from_str(&body).map_err(CopilotError::from)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            warn!(status = %status, body = %truncate(&message, 200), "Upstream request failed");
            Err(CopilotError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
