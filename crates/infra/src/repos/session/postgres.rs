use super::ISessionRepo;
use alarmhosting_domain::Session;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::warn;

pub struct PostgresSessionRepo {
    pool: PgPool,
}

impl PostgresSessionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SessionRaw {
    id: String,
    user_id: String,
    created_at: DateTime<Utc>,
    last_seen_at: DateTime<Utc>,
}

impl From<SessionRaw> for Session {
    fn from(raw: SessionRaw) -> Self {
        Self {
            id: raw.id,
            user_id: raw.user_id.as_str().into(),
            created_at: raw.created_at.timestamp_millis(),
            last_seen_at: raw.last_seen_at.timestamp_millis(),
        }
    }
}

#[async_trait::async_trait]
impl ISessionRepo for PostgresSessionRepo {
    async fn insert(&self, session: &Session) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (id, user_id, created_at, last_seen_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&session.id)
        .bind(session.user_id.as_str())
        .bind(DateTime::<Utc>::from_timestamp_millis(session.created_at))
        .bind(DateTime::<Utc>::from_timestamp_millis(session.last_seen_at))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, session_id: &str) -> Option<Session> {
        sqlx::query_as::<_, SessionRaw>(
            r#"
            SELECT id, user_id, created_at, last_seen_at FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(Session::from)
    }

    async fn touch(&self, session_id: &str, now_ms: i64) {
        let res = sqlx::query(
            r#"
            UPDATE sessions SET last_seen_at = $1 WHERE id = $2
            "#,
        )
        .bind(DateTime::<Utc>::from_timestamp_millis(now_ms))
        .bind(session_id)
        .execute(&self.pool)
        .await;
        if let Err(e) = res {
            warn!("Could not touch session {}: {:?}", session_id, e);
        }
    }

    async fn delete(&self, session_id: &str) -> Option<Session> {
        sqlx::query_as::<_, SessionRaw>(
            r#"
            DELETE FROM sessions WHERE id = $1
            RETURNING id, user_id, created_at, last_seen_at
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(Session::from)
    }
}
