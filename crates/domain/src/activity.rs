use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    Created,
    ReminderSent,
    Acknowledged,
    Snoozed,
}

/// A line in the dashboard activity feed. Read-only seed data in the
/// current scope.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityItem {
    pub id: ID,
    pub label: String,
    pub timestamp: i64,
    pub actor: String,
    pub resource_id: ID,
    pub action: ActivityAction,
}

impl Entity for ActivityItem {
    fn id(&self) -> &ID {
        &self.id
    }
}
