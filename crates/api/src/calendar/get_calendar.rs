use crate::error::AlarmError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use alarmhosting_api_structs::get_calendar::{APIResponse, QueryParams};
use alarmhosting_domain::{
    build_calendar, CalendarQuery, CalendarView, ResourceStatus, ResourceType,
};
use alarmhosting_infra::Context;
use std::str::FromStr;

/// Splits a comma separated filter list, silently skipping entries that do
/// not name a known variant. An empty or all-invalid list means no filter.
fn parse_filter_list<T: FromStr>(raw: &Option<String>) -> Option<Vec<T>> {
    let raw = raw.as_ref()?;
    let parsed: Vec<T> = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| T::from_str(part).ok())
        .collect();
    if parsed.is_empty() {
        None
    } else {
        Some(parsed)
    }
}

pub fn calendar_query(range: Option<i64>, types: &Option<String>, statuses: &Option<String>) -> CalendarQuery {
    CalendarQuery {
        range_days: range,
        types: parse_filter_list::<ResourceType>(types),
        statuses: parse_filter_list::<ResourceStatus>(statuses),
    }
}

pub async fn get_calendar_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AlarmError> {
    let usecase = GetCalendarUseCase {
        query: calendar_query(query.range, &query.types, &query.statuses),
    };

    execute(usecase, &ctx)
        .await
        .map(|view| HttpResponse::Ok().json(APIResponse::new(view)))
        .map_err(AlarmError::from)
}

#[derive(Debug)]
pub struct GetCalendarUseCase {
    pub query: CalendarQuery,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    SnapshotUnavailable,
}

impl From<UseCaseErrors> for AlarmError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::SnapshotUnavailable => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCalendarUseCase {
    type Response = CalendarView;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetCalendar";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let snapshot = ctx
            .snapshots
            .load(&ctx.repos)
            .await
            .map_err(|_| UseCaseErrors::SnapshotUnavailable)?;

        Ok(build_calendar(
            &snapshot.resources,
            &snapshot.reminders,
            &self.query,
            ctx.sys.get_timestamp_millis(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_type_filters() {
        let raw = Some("domain,ssl".to_string());
        assert_eq!(
            parse_filter_list::<ResourceType>(&raw),
            Some(vec![ResourceType::Domain, ResourceType::Ssl])
        );
    }

    #[test]
    fn skips_unknown_filter_entries() {
        let raw = Some("domain,bogus, ,ssl".to_string());
        assert_eq!(
            parse_filter_list::<ResourceType>(&raw),
            Some(vec![ResourceType::Domain, ResourceType::Ssl])
        );
    }

    #[test]
    fn all_invalid_filter_means_unfiltered() {
        let raw = Some("bogus,nope".to_string());
        assert_eq!(parse_filter_list::<ResourceType>(&raw), None);
        assert_eq!(parse_filter_list::<ResourceType>(&None), None);
    }

    #[test]
    fn parses_status_filters() {
        let raw = Some("due-soon,overdue".to_string());
        assert_eq!(
            parse_filter_list::<ResourceStatus>(&raw),
            Some(vec![ResourceStatus::DueSoon, ResourceStatus::Overdue])
        );
    }
}
