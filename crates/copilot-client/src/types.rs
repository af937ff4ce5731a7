//! Copilot API types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Identifier of a message or report.
///
/// The upstream sources are not consistent about whether ids are JSON numbers
/// or strings, so both are accepted and written back in the shape received.
/// Numbers keep their JSON representation, floats and large unsigned values
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(Number),
    Text(String),
}

impl ResourceId {
    /// Whether the id refers to anything. Zero and the empty string do not.
    pub fn is_present(&self) -> bool {
        match self {
            ResourceId::Number(n) => n.as_f64() != Some(0.0),
            ResourceId::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Number(n) => write!(f, "{}", n),
            ResourceId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(n: i64) -> Self {
        ResourceId::Number(n.into())
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        ResourceId::Text(s.to_string())
    }
}

/// Reads an optional reference to another resource from any JSON value.
///
/// `null`, `false`, zero, `""`, `[]` and `{}` mean no reference. Any other
/// non-number, non-string value is kept as its JSON text.
fn deserialize_reference<'de, D>(deserializer: D) -> Result<Option<ResourceId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    let id = value.and_then(|value| match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) => Some(ResourceId::Number(n)),
        Value::String(s) => Some(ResourceId::Text(s)),
        Value::Array(ref items) if items.is_empty() => None,
        Value::Object(ref fields) if fields.is_empty() => None,
        other => Some(ResourceId::Text(other.to_string())),
    });

    Ok(id.filter(ResourceId::is_present))
}

/// Message sent to the copilot during the billing period.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    pub id: ResourceId,
    pub timestamp: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "deserialize_reference")]
    pub report_id: Option<ResourceId>,
}

impl Message {
    /// Report id, if the message carries a usable one.
    pub fn report_id(&self) -> Option<&ResourceId> {
        self.report_id.as_ref().filter(|id| id.is_present())
    }
}

/// Message listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

/// Priced report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Report {
    #[serde(default, deserialize_with = "deserialize_reference")]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub name: Option<String>,
    /// Kept as the JSON number received so it is echoed unchanged
    #[serde(default)]
    pub credit_cost: Option<Number>,
}

impl Report {
    /// Credits charged for the report. A report without a cost is free.
    pub fn credits(&self) -> Number {
        self.credit_cost.clone().unwrap_or_else(|| Number::from(0_u8))
    }
}
