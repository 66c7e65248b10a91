mod login;

use crate::error::AlarmError;
use crate::shared::auth::{protect_route, SESSION_COOKIE};
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmhosting_api_structs::dtos::UserDTO;
use alarmhosting_api_structs::{get_me, logout};
use alarmhosting_infra::Context;

async fn get_me_controller(
    http_req: HttpRequest,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AlarmError> {
    // Anonymous callers get a 401 carrying `user: null` in the body so the
    // frontend can render the login screen off the same response shape.
    match protect_route(&http_req, &ctx).await {
        Ok(user) => Ok(HttpResponse::Ok().json(get_me::APIResponse {
            user: Some(UserDTO::new(user)),
        })),
        Err(_) => Ok(HttpResponse::Unauthorized().json(get_me::APIResponse { user: None })),
    }
}

async fn logout_controller(http_req: HttpRequest, ctx: web::Data<Context>) -> HttpResponse {
    if let Some(cookie) = http_req.cookie(SESSION_COOKIE) {
        ctx.repos.sessions.delete(cookie.value()).await;
    }

    let mut expired = Cookie::new(SESSION_COOKIE, "");
    expired.set_path("/");
    expired.make_removal();

    HttpResponse::Ok()
        .cookie(expired)
        .json(logout::APIResponse { ok: true })
}

pub(crate) fn session_cookie(session_id: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, session_id)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/login", web::post().to(login::login_controller));
    cfg.route("/auth/me", web::get().to(get_me_controller));
    cfg.route("/auth/logout", web::post().to(logout_controller));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use alarmhosting_domain::{Session, User};
    use alarmhosting_infra::setup_context;

    #[actix_web::main]
    #[test]
    async fn anonymous_me_is_unauthorized() {
        let ctx = web::Data::new(setup_context().await);
        let req = TestRequest::default().to_http_request();

        let res = get_me_controller(req, ctx).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::main]
    #[test]
    async fn me_with_a_valid_session_returns_the_user() {
        let ctx = setup_context().await;
        let user = User {
            id: "u1".into(),
            name: "Maya Lindqvist".into(),
            role: "Ops".into(),
            avatar: String::new(),
            is_admin: false,
        };
        ctx.repos.users.insert(&user).await.unwrap();
        ctx.repos
            .sessions
            .insert(&Session {
                id: "sess-1".into(),
                user_id: user.id.clone(),
                created_at: 0,
                last_seen_at: 0,
            })
            .await
            .unwrap();

        let req = TestRequest::default()
            .cookie(Cookie::new(crate::shared::auth::SESSION_COOKIE, "sess-1"))
            .to_http_request();

        let res = get_me_controller(req, web::Data::new(ctx)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}
