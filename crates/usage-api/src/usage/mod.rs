//! Per-message usage for the current billing period.

mod aggregator;

pub use aggregator::UsageAggregator;

use async_trait::async_trait;
use copilot_client::{CopilotClient, CopilotError, Message, Report, ResourceId};
use serde::Serialize;
use serde_json::Number;

/// Credits consumed by one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageItem {
    pub message_id: ResourceId,
    pub timestamp: String,
    /// Present only when the message was priced by a report. The inner value
    /// is `None` for a report that has no name and serializes as `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_name: Option<Option<String>>,
    pub credits_used: Credits,
}

/// Credits charged for a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Credits {
    /// Taken from a report, echoed exactly as the report states it
    Reported(Number),
    /// Derived from the message text
    Scored(f64),
}

impl Credits {
    pub fn as_f64(&self) -> f64 {
        match self {
            Credits::Reported(n) => n.as_f64().unwrap_or_default(),
            Credits::Scored(credits) => *credits,
        }
    }
}

/// Where messages and reports come from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsageSource: Send + Sync {
    /// All messages of the current billing period, in upstream order.
    async fn list_messages(&self) -> Result<Vec<Message>, CopilotError>;

    /// The report with this id, or `None` if it does not exist.
    async fn find_report(&self, id: &ResourceId) -> Result<Option<Report>, CopilotError>;
}

#[async_trait]
impl UsageSource for CopilotClient {
    async fn list_messages(&self) -> Result<Vec<Message>, CopilotError> {
        CopilotClient::list_messages(self).await
    }

    async fn find_report(&self, id: &ResourceId) -> Result<Option<Report>, CopilotError> {
        CopilotClient::find_report(self, id).await
    }
}
