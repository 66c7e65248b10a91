use crate::dtos::AlertEntryDTO;
use serde::Deserialize;

pub mod test_email_integration {
    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub email: String,
    }

    pub type APIResponse = AlertEntryDTO;
}

pub mod test_slack_integration {
    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub channel: String,
    }

    pub type APIResponse = AlertEntryDTO;
}
