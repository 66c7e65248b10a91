mod inmemory;
mod postgres;

pub use inmemory::InMemorySessionRepo;
pub use postgres::PostgresSessionRepo;

use alarmhosting_domain::Session;

#[async_trait::async_trait]
pub trait ISessionRepo: Send + Sync {
    async fn insert(&self, session: &Session) -> anyhow::Result<()>;
    async fn find(&self, session_id: &str) -> Option<Session>;
    /// Bumps `last_seen_at` for an existing session
    async fn touch(&self, session_id: &str, now_ms: i64);
    async fn delete(&self, session_id: &str) -> Option<Session>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use alarmhosting_domain::Session;

    #[tokio::test]
    async fn session_lifecycle() {
        let ctx = setup_context().await;
        let session = Session {
            id: "abc123".into(),
            user_id: "u1".into(),
            created_at: 100,
            last_seen_at: 100,
        };

        ctx.repos
            .sessions
            .insert(&session)
            .await
            .expect("To insert session");

        ctx.repos.sessions.touch(&session.id, 500).await;
        let found = ctx.repos.sessions.find(&session.id).await.unwrap();
        assert_eq!(found.last_seen_at, 500);

        assert!(ctx.repos.sessions.delete(&session.id).await.is_some());
        assert!(ctx.repos.sessions.find(&session.id).await.is_none());
    }
}
