use alarmhosting_domain::ID;
use serde::{Deserialize, Serialize};

pub mod dispatch_action {
    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub reminder_id: String,
        #[serde(default)]
        pub action: String,
        pub metadata: Option<serde_json::Value>,
    }

    #[derive(Debug, Deserialize, Serialize, Clone)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub status: String,
        pub action: String,
        pub reminder_id: ID,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub metadata: Option<serde_json::Value>,
        pub dispatched_at: String,
    }
}
