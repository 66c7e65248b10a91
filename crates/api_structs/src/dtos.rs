use alarmhosting_domain::{
    ActivityAction, ActivityItem, AlertChannel, AlertEntry, CalendarDay, CalendarEvent,
    DeliveryStatus, Reminder, ReminderChannel, Resource, ResourceStatus, ResourceType, Severity,
    User, ID,
};
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// RFC 3339 rendering of a millisecond timestamp, the wire format for all
/// timestamps in the API.
pub fn to_iso(timestamp_ms: i64) -> String {
    match Utc.timestamp_millis_opt(timestamp_ms).single() {
        Some(dt) => dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        None => String::new(),
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub is_admin: bool,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
            avatar: user.avatar,
            is_admin: user.is_admin,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDTO {
    pub id: ID,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub label: String,
    pub hostname: String,
    pub provider: String,
    pub expiry_date: String,
    pub status: ResourceStatus,
    pub renewal_url: String,
    pub notes: String,
    pub last_checked: String,
    pub tags: Vec<String>,
}

impl ResourceDTO {
    /// Renders a resource with the given (usually recomputed) status.
    pub fn new(resource: Resource, status: ResourceStatus) -> Self {
        Self {
            id: resource.id,
            resource_type: resource.resource_type,
            label: resource.label,
            hostname: resource.hostname,
            provider: resource.provider,
            expiry_date: resource.expiry_date,
            status,
            renewal_url: resource.renewal_url,
            notes: resource.notes,
            last_checked: to_iso(resource.last_checked),
            tags: resource.tags,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub resource_id: ID,
    pub due_in_days: i64,
    pub scheduled_for: String,
    pub severity: Severity,
    pub channel: ReminderChannel,
    pub message: String,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            resource_id: reminder.resource_id,
            due_in_days: reminder.due_in_days,
            scheduled_for: to_iso(reminder.scheduled_for),
            severity: reminder.severity,
            channel: reminder.channel,
            message: reminder.message,
        }
    }
}

/// A reminder with its resolved resource, as it appears inside a calendar
/// day bucket.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventDTO {
    #[serde(flatten)]
    pub reminder: ReminderDTO,
    pub resource: ResourceDTO,
}

impl CalendarEventDTO {
    pub fn new(event: CalendarEvent) -> Self {
        Self {
            reminder: ReminderDTO::new(event.reminder),
            resource: ResourceDTO::new(event.resource, event.resource_status),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDayDTO {
    pub date: String,
    pub events: Vec<CalendarEventDTO>,
}

impl CalendarDayDTO {
    pub fn new(day: CalendarDay) -> Self {
        Self {
            date: day.date,
            events: day.events.into_iter().map(CalendarEventDTO::new).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AlertEntryDTO {
    pub id: ID,
    pub channel: AlertChannel,
    pub target: String,
    pub status: DeliveryStatus,
    pub sent_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl AlertEntryDTO {
    pub fn new(entry: AlertEntry) -> Self {
        Self {
            id: entry.id,
            channel: entry.channel,
            target: entry.target,
            status: entry.status,
            sent_at: to_iso(entry.sent_at),
            error: entry.error,
            payload: entry.payload,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItemDTO {
    pub id: ID,
    pub label: String,
    pub timestamp: String,
    pub actor: String,
    pub resource_id: ID,
    pub action: ActivityAction,
}

impl ActivityItemDTO {
    pub fn new(item: ActivityItem) -> Self {
        Self {
            id: item.id,
            label: item.label,
            timestamp: to_iso(item.timestamp),
            actor: item.actor,
            resource_id: item.resource_id,
            action: item.action,
        }
    }
}
