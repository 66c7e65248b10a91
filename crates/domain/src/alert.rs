use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertChannel {
    Email,
    Slack,
    Telegram,
}

impl AlertChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Slack => "slack",
            Self::Telegram => "telegram",
        }
    }
}

impl std::str::FromStr for AlertChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "slack" => Ok(Self::Slack),
            "telegram" => Ok(Self::Telegram),
            _ => Err(format!("Invalid alert channel: {}", s)),
        }
    }
}

/// Terminal outcome of one dispatch attempt. `Queued` is used when no
/// transport is configured and is a valid terminal state, not a pending one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Queued,
    Sent,
    Failed,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }
}

impl std::str::FromStr for DeliveryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(Self::Queued),
            "sent" => Ok(Self::Sent),
            "failed" => Ok(Self::Failed),
            _ => Err(format!("Invalid delivery status: {}", s)),
        }
    }
}

/// Append-only audit record of one dispatch attempt. Immutable once written;
/// exactly one entry is created per dispatch or integration test.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEntry {
    pub id: ID,
    pub channel: AlertChannel,
    pub target: String,
    pub status: DeliveryStatus,
    /// Millisecond timestamp of the attempt
    pub sent_at: i64,
    pub error: Option<String>,
    /// Opaque context, e.g. the dispatched payload
    pub payload: Option<serde_json::Value>,
}

impl AlertEntry {
    pub fn new(channel: AlertChannel, target: String, status: DeliveryStatus, sent_at: i64) -> Self {
        Self {
            id: ID::new(),
            channel,
            target,
            status,
            sent_at,
            error: None,
            payload: None,
        }
    }
}

impl Entity for AlertEntry {
    fn id(&self) -> &ID {
        &self.id
    }
}
