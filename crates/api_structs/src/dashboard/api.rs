use crate::dtos::{ActivityItemDTO, ReminderDTO, ResourceDTO, UserDTO};
use serde::{Deserialize, Serialize};

pub mod get_overview {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub users: Vec<UserDTO>,
        pub resources: Vec<ResourceDTO>,
        pub reminders: Vec<ReminderDTO>,
        pub activity: Vec<ActivityItemDTO>,
    }
}
