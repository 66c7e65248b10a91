use alarmhosting_domain::{
    ActivityAction, ActivityItem, Reminder, ReminderChannel, Resource, ResourceStatus,
    ResourceType, Severity, User, ID,
};
use anyhow::Context;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The full data snapshot used by the file-backed and in-memory stores and
/// for seeding an empty database.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub users: Vec<User>,
    pub resources: Vec<Resource>,
    pub reminders: Vec<Reminder>,
    pub activity: Vec<ActivityItem>,
}

/// Parses an RFC 3339 timestamp or a plain ISO day into millis.
pub fn parse_timestamp(value: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }
    alarmhosting_domain::expiry::expiry_date_to_millis(value)
}

fn to_iso(timestamp_ms: i64) -> String {
    match Utc.timestamp_millis_opt(timestamp_ms).single() {
        Some(dt) => dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        None => String::new(),
    }
}

// Wire representation of the seed / state file. Mirrors the JSON layout of
// the frontend seed data: camelCase keys, ISO timestamps, optional fields.

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUser {
    id: ID,
    name: String,
    role: String,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default)]
    is_admin: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResource {
    id: ID,
    #[serde(rename = "type")]
    resource_type: ResourceType,
    label: String,
    #[serde(default)]
    hostname: Option<String>,
    provider: String,
    expiry_date: String,
    #[serde(default)]
    status: Option<ResourceStatus>,
    #[serde(default)]
    renewal_url: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    last_checked: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReminder {
    id: ID,
    resource_id: ID,
    #[serde(default)]
    due_in_days: Option<i64>,
    #[serde(default)]
    scheduled_for: Option<String>,
    #[serde(default)]
    severity: Option<Severity>,
    #[serde(default)]
    channel: Option<ReminderChannel>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawActivityItem {
    id: ID,
    label: String,
    timestamp: String,
    actor: String,
    resource_id: ID,
    action: ActivityAction,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawState {
    #[serde(default)]
    users: Vec<RawUser>,
    #[serde(default)]
    resources: Vec<RawResource>,
    #[serde(default)]
    reminders: Vec<RawReminder>,
    #[serde(default)]
    activity: Vec<RawActivityItem>,
}

impl RawState {
    fn into_state(self, now_ms: i64) -> State {
        State {
            users: self
                .users
                .into_iter()
                .map(|u| User {
                    id: u.id,
                    name: u.name,
                    role: u.role,
                    avatar: u.avatar.unwrap_or_default(),
                    is_admin: u.is_admin,
                })
                .collect(),
            resources: self
                .resources
                .into_iter()
                .map(|r| Resource {
                    hostname: r
                        .hostname
                        .unwrap_or_else(|| Resource::hostname_from_label(&r.label)),
                    id: r.id,
                    resource_type: r.resource_type,
                    label: r.label,
                    provider: r.provider,
                    expiry_date: r.expiry_date,
                    status: r.status.unwrap_or(ResourceStatus::Healthy),
                    renewal_url: r.renewal_url.unwrap_or_default(),
                    notes: r.notes.unwrap_or_default(),
                    last_checked: r
                        .last_checked
                        .as_deref()
                        .and_then(parse_timestamp)
                        .unwrap_or(now_ms),
                    tags: r.tags.unwrap_or_default(),
                })
                .collect(),
            reminders: self
                .reminders
                .into_iter()
                .map(|m| Reminder {
                    id: m.id,
                    resource_id: m.resource_id,
                    due_in_days: m.due_in_days.unwrap_or(0),
                    scheduled_for: m
                        .scheduled_for
                        .as_deref()
                        .and_then(parse_timestamp)
                        .unwrap_or(now_ms),
                    severity: m.severity.unwrap_or(Severity::Low),
                    channel: m.channel.unwrap_or(ReminderChannel::Telegram),
                    message: m.message.unwrap_or_default(),
                })
                .collect(),
            activity: self
                .activity
                .into_iter()
                .map(|a| ActivityItem {
                    id: a.id,
                    label: a.label,
                    timestamp: parse_timestamp(&a.timestamp).unwrap_or(now_ms),
                    actor: a.actor,
                    resource_id: a.resource_id,
                    action: a.action,
                })
                .collect(),
        }
    }

    fn from_state(state: &State) -> Self {
        Self {
            users: state
                .users
                .iter()
                .map(|u| RawUser {
                    id: u.id.clone(),
                    name: u.name.clone(),
                    role: u.role.clone(),
                    avatar: Some(u.avatar.clone()),
                    is_admin: u.is_admin,
                })
                .collect(),
            resources: state
                .resources
                .iter()
                .map(|r| RawResource {
                    id: r.id.clone(),
                    resource_type: r.resource_type,
                    label: r.label.clone(),
                    hostname: Some(r.hostname.clone()),
                    provider: r.provider.clone(),
                    expiry_date: r.expiry_date.clone(),
                    status: Some(r.status),
                    renewal_url: Some(r.renewal_url.clone()),
                    notes: Some(r.notes.clone()),
                    last_checked: Some(to_iso(r.last_checked)),
                    tags: Some(r.tags.clone()),
                })
                .collect(),
            reminders: state
                .reminders
                .iter()
                .map(|m| RawReminder {
                    id: m.id.clone(),
                    resource_id: m.resource_id.clone(),
                    due_in_days: Some(m.due_in_days),
                    scheduled_for: Some(to_iso(m.scheduled_for)),
                    severity: Some(m.severity),
                    channel: Some(m.channel),
                    message: Some(m.message.clone()),
                })
                .collect(),
            activity: state
                .activity
                .iter()
                .map(|a| RawActivityItem {
                    id: a.id.clone(),
                    label: a.label.clone(),
                    timestamp: to_iso(a.timestamp),
                    actor: a.actor.clone(),
                    resource_id: a.resource_id.clone(),
                    action: a.action,
                })
                .collect(),
        }
    }
}

/// Parses a state / seed JSON document.
pub fn parse_state(raw_json: &str, now_ms: i64) -> anyhow::Result<State> {
    let raw: RawState = serde_json::from_str(raw_json).context("Malformed state JSON")?;
    Ok(raw.into_state(now_ms))
}

/// Loads a state / seed file from disk.
pub fn load_state(path: &Path, now_ms: i64) -> anyhow::Result<State> {
    let raw_json = std::fs::read_to_string(path)
        .with_context(|| format!("Seed data file not found: {}", path.display()))?;
    parse_state(&raw_json, now_ms)
}

/// Serializes a state back to the wire JSON format.
pub fn serialize_state(state: &State) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&RawState::from_state(state))?)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn applies_defaults_for_missing_fields() {
        let json = r#"{
            "users": [{ "id": "u1", "name": "Op", "role": "admin", "isAdmin": true }],
            "resources": [{
                "id": "r1", "type": "domain", "label": "Main Site",
                "provider": "Acme", "expiryDate": "2030-01-01"
            }],
            "reminders": [{ "id": "m1", "resourceId": "r1" }]
        }"#;

        let state = parse_state(json, 42).unwrap();

        assert!(state.users[0].is_admin);
        let r = &state.resources[0];
        assert_eq!(r.hostname, "main-site.local");
        assert_eq!(r.status, ResourceStatus::Healthy);
        assert_eq!(r.last_checked, 42);
        assert!(r.tags.is_empty());
        let m = &state.reminders[0];
        assert_eq!(m.scheduled_for, 42);
        assert_eq!(m.severity, Severity::Low);
        assert_eq!(m.channel, ReminderChannel::Telegram);
    }

    #[test]
    fn round_trips_through_wire_format() {
        let json = r#"{
            "users": [{ "id": "u1", "name": "Op", "role": "ops", "avatar": "", "isAdmin": false }],
            "resources": [{
                "id": "r1", "type": "ssl", "label": "Cert", "hostname": "cert.local",
                "provider": "LE", "expiryDate": "2030-01-01", "status": "due-soon",
                "renewalUrl": "", "notes": "", "lastChecked": "2026-01-01T00:00:00Z",
                "tags": ["prod"]
            }],
            "reminders": [{
                "id": "m1", "resourceId": "r1", "dueInDays": 3,
                "scheduledFor": "2026-01-04T09:00:00Z", "severity": "high",
                "channel": "email", "message": "renew"
            }],
            "activity": []
        }"#;

        let state = parse_state(json, 0).unwrap();
        let serialized = serialize_state(&state).unwrap();
        let reparsed = parse_state(&serialized, 0).unwrap();
        assert_eq!(state, reparsed);
    }
}
