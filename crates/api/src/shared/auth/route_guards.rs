use crate::error::AlarmError;
use actix_web::HttpRequest;
use alarmhosting_domain::User;
use alarmhosting_infra::Context;

pub const SESSION_COOKIE: &str = "session_id";

/// Resolves the `session_id` cookie to its `User`. Touches the session's
/// `last_seen_at` on success. Unauthenticated callers (no cookie, unknown
/// session, vanished user) get a 401.
pub async fn protect_route(http_req: &HttpRequest, ctx: &Context) -> Result<User, AlarmError> {
    let session_id = http_req
        .cookie(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| AlarmError::Unauthorized("Login is required.".into()))?;

    let session = ctx
        .repos
        .sessions
        .find(&session_id)
        .await
        .ok_or_else(|| AlarmError::Unauthorized("Session is no longer valid.".into()))?;

    ctx.repos
        .sessions
        .touch(&session.id, ctx.sys.get_timestamp_millis())
        .await;

    ctx.repos
        .users
        .find(&session.user_id)
        .await
        .ok_or_else(|| AlarmError::Unauthorized("Session user no longer exists.".into()))
}

/// Like `protect_route` but additionally requires an admin principal. A
/// valid session without the admin flag gets a 403, distinct from the 401
/// of an unauthenticated caller.
pub async fn protect_admin_route(
    http_req: &HttpRequest,
    ctx: &Context,
) -> Result<User, AlarmError> {
    let user = protect_route(http_req, ctx).await?;
    if !user.is_admin {
        return Err(AlarmError::Forbidden(
            "Only admins can access the alert log.".into(),
        ));
    }
    Ok(user)
}
