mod inmemory;
mod postgres;

pub use inmemory::InMemoryAlertLogRepo;
pub use postgres::PostgresAlertLogRepo;

use alarmhosting_domain::AlertEntry;

/// Append-only audit log of dispatch attempts. Entries are immutable once
/// written; retrieval is most recent first.
#[async_trait::async_trait]
pub trait IAlertLogRepo: Send + Sync {
    /// Appends one entry. Implementations must accept the write even when
    /// the durable backing fails, degrading to an in-process buffer.
    async fn insert(&self, entry: &AlertEntry) -> anyhow::Result<()>;
    /// Up to `limit` entries ordered by `sent_at` descending.
    async fn list(&self, limit: i64) -> anyhow::Result<Vec<AlertEntry>>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use alarmhosting_domain::{AlertChannel, AlertEntry, DeliveryStatus};

    fn entry(sent_at: i64) -> AlertEntry {
        AlertEntry::new(
            AlertChannel::Email,
            "ops@example.com".into(),
            DeliveryStatus::Sent,
            sent_at,
        )
    }

    #[tokio::test]
    async fn lists_most_recent_first_with_limit() {
        let ctx = setup_context().await;
        for sent_at in [10, 30, 20] {
            ctx.repos
                .alert_logs
                .insert(&entry(sent_at))
                .await
                .expect("To insert alert entry");
        }

        let items = ctx.repos.alert_logs.list(2).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].sent_at, 30);
        assert_eq!(items[1].sent_at, 20);

        let all = ctx.repos.alert_logs.list(200).await.unwrap();
        assert_eq!(all.len(), 3);
    }
}
