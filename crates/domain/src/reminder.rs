use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Invalid severity: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderChannel {
    Telegram,
    Email,
}

impl ReminderChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Telegram => "telegram",
            Self::Email => "email",
        }
    }
}

impl FromStr for ReminderChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "telegram" => Ok(Self::Telegram),
            "email" => Ok(Self::Email),
            _ => Err(format!("Invalid reminder channel: {}", s)),
        }
    }
}

/// A scheduled nudge tied to exactly one `Resource`. The reminder does not
/// own the resource, it only references it; reminders whose resource is
/// gone are filtered out of calendar output rather than errored.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    pub resource_id: ID,
    /// Signed day offset relative to the resource expiry. Negative means
    /// the resource is already overdue.
    pub due_in_days: i64,
    /// Millisecond timestamp at which the nudge should surface
    pub scheduled_for: i64,
    pub severity: Severity,
    pub channel: ReminderChannel,
    pub message: String,
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// The fixed set of actions a user can take on a reminder. Dispatching an
/// action does not mutate the reminder record; it only synthesizes an
/// outbound notification and writes an alert history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderAction {
    Preview,
    Snooze,
    MarkDone,
}

impl ReminderAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::Snooze => "snooze",
            Self::MarkDone => "mark_done",
        }
    }
}

impl FromStr for ReminderAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preview" => Ok(Self::Preview),
            "snooze" => Ok(Self::Snooze),
            "mark_done" => Ok(Self::MarkDone),
            _ => Err(format!(
                "Invalid action: {}. Expected one of preview | snooze | mark_done",
                s
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_known_actions_only() {
        assert_eq!("preview".parse(), Ok(ReminderAction::Preview));
        assert_eq!("snooze".parse(), Ok(ReminderAction::Snooze));
        assert_eq!("mark_done".parse(), Ok(ReminderAction::MarkDone));
        assert!("bogus".parse::<ReminderAction>().is_err());
        assert!("PREVIEW".parse::<ReminderAction>().is_err());
    }
}
