use crate::dtos::ResourceDTO;
use serde::Deserialize;

pub mod create_resource {
    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(rename = "type")]
        pub resource_type: Option<String>,
        pub label: Option<String>,
        pub provider: Option<String>,
        pub expiry_date: Option<String>,
        pub hostname: Option<String>,
        pub renewal_url: Option<String>,
        pub notes: Option<String>,
    }

    pub type APIResponse = ResourceDTO;
}
