use crate::error::AlarmError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use alarmhosting_api_structs::dtos::UserDTO;
use alarmhosting_api_structs::login::{APIResponse, RequestBody};
use alarmhosting_domain::{Session, User, ID};
use alarmhosting_infra::Context;
use alarmhosting_utils::create_random_secret;

pub async fn login_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AlarmError> {
    let usecase = LoginUseCase {
        user_id: body.into_inner().user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok()
                .cookie(super::session_cookie(res.session.id))
                .json(APIResponse {
                    user: UserDTO::new(res.user),
                })
        })
        .map_err(AlarmError::from)
}

#[derive(Debug)]
pub struct LoginUseCase {
    pub user_id: String,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
    pub session: Session,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    MissingUserId,
    UserNotFound(String),
    StorageError,
}

impl From<UseCaseErrors> for AlarmError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::MissingUserId => Self::BadClientData("userId is required".into()),
            UseCaseErrors::UserNotFound(user_id) => {
                Self::NotFound(format!("No user with id: {}", user_id))
            }
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for LoginUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "Login";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        if self.user_id.trim().is_empty() {
            return Err(UseCaseErrors::MissingUserId);
        }

        let user_id = ID::from(self.user_id.as_str());
        let user = ctx
            .repos
            .users
            .find(&user_id)
            .await
            .ok_or_else(|| UseCaseErrors::UserNotFound(self.user_id.clone()))?;

        let now_ms = ctx.sys.get_timestamp_millis();
        let session = Session {
            id: create_random_secret(32),
            user_id: user.id.clone(),
            created_at: now_ms,
            last_seen_at: now_ms,
        };

        ctx.repos
            .sessions
            .insert(&session)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(UseCaseRes { user, session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alarmhosting_infra::setup_context;

    async fn ctx_with_user() -> (Context, User) {
        let ctx = setup_context().await;
        let user = User {
            id: "u1".into(),
            name: "Maya Lindqvist".into(),
            role: "Ops".into(),
            avatar: String::new(),
            is_admin: true,
        };
        ctx.repos.users.insert(&user).await.unwrap();
        (ctx, user)
    }

    #[actix_web::main]
    #[test]
    async fn login_creates_a_session_for_an_existing_user() {
        let (ctx, user) = ctx_with_user().await;
        let usecase = LoginUseCase {
            user_id: "u1".into(),
        };

        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.user.id, user.id);
        assert_eq!(res.session.id.len(), 32);

        let stored = ctx.repos.sessions.find(&res.session.id).await.unwrap();
        assert_eq!(stored.user_id, user.id);
    }

    #[actix_web::main]
    #[test]
    async fn login_rejects_an_unknown_user() {
        let (ctx, _) = ctx_with_user().await;
        let usecase = LoginUseCase {
            user_id: "ghost".into(),
        };

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::UserNotFound(_))));
    }
}
