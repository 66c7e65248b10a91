use crate::dtos::CalendarDayDTO;
use alarmhosting_domain::CalendarView;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub range: i64,
    pub count: usize,
    pub days: Vec<CalendarDayDTO>,
}

impl CalendarResponse {
    pub fn new(view: CalendarView) -> Self {
        Self {
            range: view.range,
            count: view.count,
            days: view.days.into_iter().map(CalendarDayDTO::new).collect(),
        }
    }
}

pub mod get_calendar {
    use super::*;

    /// `types` and `statuses` are comma separated lists, e.g.
    /// `types=domain,ssl&statuses=due-soon`.
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub range: Option<i64>,
        pub types: Option<String>,
        pub statuses: Option<String>,
    }

    pub type APIResponse = CalendarResponse;
}

pub mod get_upcoming_report {
    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub format: Option<String>,
        pub range: Option<i64>,
        pub types: Option<String>,
        pub statuses: Option<String>,
    }

    pub type APIResponse = CalendarResponse;
}
