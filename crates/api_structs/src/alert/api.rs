use crate::dtos::AlertEntryDTO;
use serde::{Deserialize, Serialize};

pub mod list_alert_history {
    use super::*;

    /// `limit` is kept as a raw string so that non-numeric input falls back
    /// to the default instead of failing deserialization.
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub limit: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub count: usize,
        pub items: Vec<AlertEntryDTO>,
    }
}
