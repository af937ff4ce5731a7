//! Usage aggregation over the current billing period.

use super::{Credits, UsageItem, UsageSource};
use crate::error::UsageError;
use copilot_client::Message;
use credit_scoring::score_text;
use futures::{stream, StreamExt, TryStreamExt};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Builds the usage list for the current billing period.
///
/// A message linked to an existing report is charged the report's cost.
/// Every other message, including one whose report no longer exists, is
/// charged by [`score_text`] over its text.
#[derive(Clone)]
pub struct UsageAggregator {
    source: Arc<dyn UsageSource>,
    max_concurrent_lookups: usize,
}

impl UsageAggregator {
    /// Create an aggregator over `source`.
    ///
    /// At most `max_concurrent_lookups` report lookups run at once; values
    /// below 1 mean one at a time.
    pub fn new(source: Arc<dyn UsageSource>, max_concurrent_lookups: usize) -> Self {
        Self {
            source,
            max_concurrent_lookups: max_concurrent_lookups.max(1),
        }
    }

    /// One usage item per message, in message order.
    ///
    /// Fails without partial results if the message listing fails or any
    /// report lookup fails for a reason other than the report not existing.
    /// When several lookups fail, the earliest message decides the error.
    #[instrument(skip(self))]
    pub async fn current_period(&self) -> Result<Vec<UsageItem>, UsageError> {
        let messages = self
            .source
            .list_messages()
            .await
            .map_err(UsageError::MessagesUnavailable)?;

        let count = messages.len();

        let usage: Vec<UsageItem> = stream::iter(messages)
            .map(|message| self.resolve(message))
            .buffered(self.max_concurrent_lookups)
            .try_collect()
            .await?;

        info!(messages = count, "Usage aggregated");
        Ok(usage)
    }

    async fn resolve(&self, message: Message) -> Result<UsageItem, UsageError> {
        let report = match message.report_id() {
            Some(report_id) => self.source.find_report(report_id).await.map_err(|source| {
                UsageError::ReportLookupFailed {
                    report_id: report_id.clone(),
                    source,
                }
            })?,
            None => None,
        };

        let item = match report {
            Some(report) => UsageItem {
                credits_used: Credits::Reported(report.credits()),
                report_name: Some(report.name),
                message_id: message.id,
                timestamp: message.timestamp,
            },
            None => {
                if let Some(report_id) = message.report_id() {
                    debug!(message_id = %message.id, %report_id, "Report missing, scoring text");
                }
                UsageItem {
                    credits_used: Credits::Scored(score_text(&message.text)),
                    report_name: None,
                    message_id: message.id,
                    timestamp: message.timestamp,
                }
            }
        };

        Ok(item)
    }
}
