use crate::error::AlarmError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use alarmhosting_api_structs::dtos::{ActivityItemDTO, ReminderDTO, ResourceDTO, UserDTO};
use alarmhosting_api_structs::get_overview::APIResponse;
use alarmhosting_domain::{ActivityItem, Reminder, Resource, User};
use alarmhosting_infra::Context;

pub async fn get_overview_controller(ctx: web::Data<Context>) -> Result<HttpResponse, AlarmError> {
    let usecase = GetOverviewUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|res| {
            let now_ms = res.now_ms;
            HttpResponse::Ok().json(APIResponse {
                users: res.users.into_iter().map(UserDTO::new).collect(),
                resources: res
                    .resources
                    .into_iter()
                    .map(|resource| {
                        let status = resource.current_status(now_ms);
                        ResourceDTO::new(resource, status)
                    })
                    .collect(),
                reminders: res.reminders.into_iter().map(ReminderDTO::new).collect(),
                activity: res.activity.into_iter().map(ActivityItemDTO::new).collect(),
            })
        })
        .map_err(AlarmError::from)
}

#[derive(Debug)]
struct GetOverviewUseCase {}

#[derive(Debug)]
struct UseCaseRes {
    users: Vec<User>,
    resources: Vec<Resource>,
    reminders: Vec<Reminder>,
    activity: Vec<ActivityItem>,
    /// One clock sample for the whole response, so every resource status is
    /// derived against the same instant.
    now_ms: i64,
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
impl UseCase for GetOverviewUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetOverview";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let users = ctx
            .repos
            .users
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let resources = ctx
            .repos
            .resources
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let reminders = ctx
            .repos
            .reminders
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let activity = ctx
            .repos
            .activity
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(UseCaseRes {
            users,
            resources,
            reminders,
            activity,
            now_ms: ctx.sys.get_timestamp_millis(),
        })
    }
}
