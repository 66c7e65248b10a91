use super::inmemory::most_recent;
use super::IAlertLogRepo;
use alarmhosting_domain::{AlertChannel, AlertEntry, DeliveryStatus};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Mutex;
use tracing::warn;

/// Durable alert log with a degraded in-process buffer: a failed database
/// write never drops the entry, it lands in the buffer instead. Entries
/// written during an outage do not survive a process restart.
pub struct PostgresAlertLogRepo {
    pool: PgPool,
    fallback: Mutex<Vec<AlertEntry>>,
}

impl PostgresAlertLogRepo {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            fallback: Mutex::new(Vec::new()),
        }
    }
}

#[derive(Debug, FromRow)]
struct AlertEntryRaw {
    id: String,
    channel: String,
    target: String,
    status: String,
    payload: Option<String>,
    error: Option<String>,
    sent_at: DateTime<Utc>,
}

impl From<AlertEntryRaw> for AlertEntry {
    fn from(raw: AlertEntryRaw) -> Self {
        Self {
            id: raw.id.as_str().into(),
            channel: raw
                .channel
                .parse::<AlertChannel>()
                .unwrap_or(AlertChannel::Telegram),
            target: raw.target,
            status: raw
                .status
                .parse::<DeliveryStatus>()
                .unwrap_or(DeliveryStatus::Queued),
            sent_at: raw.sent_at.timestamp_millis(),
            error: raw.error,
            payload: raw.payload.and_then(|p| serde_json::from_str(&p).ok()),
        }
    }
}

impl PostgresAlertLogRepo {
    async fn try_insert(&self, entry: &AlertEntry) -> anyhow::Result<()> {
        let payload = entry
            .payload
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        sqlx::query(
            r#"
            INSERT INTO alert_logs (id, channel, target, status, payload, error, sent_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(entry.id.as_str())
        .bind(entry.channel.as_str())
        .bind(&entry.target)
        .bind(entry.status.as_str())
        .bind(payload)
        .bind(&entry.error)
        .bind(DateTime::<Utc>::from_timestamp_millis(entry.sent_at))
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl IAlertLogRepo for PostgresAlertLogRepo {
    async fn insert(&self, entry: &AlertEntry) -> anyhow::Result<()> {
        if let Err(e) = self.try_insert(entry).await {
            warn!("Could not persist alert log entry, keeping it in the in-process buffer: {:?}", e);
            self.fallback.lock().unwrap().push(entry.clone());
        }
        Ok(())
    }

    async fn list(&self, limit: i64) -> anyhow::Result<Vec<AlertEntry>> {
        let rows = sqlx::query_as::<_, AlertEntryRaw>(
            r#"
            SELECT id, channel, target, status, payload, error, sent_at
            FROM alert_logs
            ORDER BY sent_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await;

        match rows {
            Ok(rows) => Ok(rows.into_iter().map(AlertEntry::from).collect()),
            Err(e) => {
                warn!("Could not read alert log from the database, serving the in-process buffer: {:?}", e);
                let fallback = self.fallback.lock().unwrap();
                Ok(most_recent(&fallback, limit))
            }
        }
    }
}
