use crate::error::AlarmError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmhosting_api_structs::dtos::AlertEntryDTO;
use alarmhosting_api_structs::list_alert_history::{APIResponse, QueryParams};
use alarmhosting_domain::AlertEntry;
use alarmhosting_infra::Context;

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 200;

/// Page size for the history listing. Anything that does not parse to a
/// positive integer falls back to the default rather than erroring.
fn clamp_limit(raw: Option<&str>) -> i64 {
    match raw.and_then(|value| value.trim().parse::<i64>().ok()) {
        Some(limit) if limit >= 1 => limit.min(MAX_LIMIT),
        _ => DEFAULT_LIMIT,
    }
}

pub async fn list_alert_history_controller(
    http_req: HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AlarmError> {
    protect_admin_route(&http_req, &ctx).await?;

    let usecase = ListAlertHistoryUseCase {
        limit: clamp_limit(query.limit.as_deref()),
    };

    execute(usecase, &ctx)
        .await
        .map(|entries| {
            HttpResponse::Ok().json(APIResponse {
                count: entries.len(),
                items: entries.into_iter().map(AlertEntryDTO::new).collect(),
            })
        })
        .map_err(AlarmError::from)
}

#[derive(Debug)]
struct ListAlertHistoryUseCase {
    limit: i64,
}

#[derive(Debug)]
enum UseCaseErrors {
    StorageError,
}

impl From<UseCaseErrors> for AlarmError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListAlertHistoryUseCase {
    type Response = Vec<AlertEntry>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "ListAlertHistory";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .alert_logs
            .list(self.limit)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
