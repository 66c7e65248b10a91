use super::IReminderRepo;
use alarmhosting_domain::{Reminder, ReminderChannel, Severity, ID};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    id: String,
    resource_id: String,
    due_in_days: Option<i64>,
    scheduled_for: DateTime<Utc>,
    severity: Option<String>,
    channel: Option<String>,
    message: Option<String>,
}

impl From<ReminderRaw> for Reminder {
    fn from(raw: ReminderRaw) -> Self {
        Self {
            id: raw.id.as_str().into(),
            resource_id: raw.resource_id.as_str().into(),
            due_in_days: raw.due_in_days.unwrap_or(0),
            scheduled_for: raw.scheduled_for.timestamp_millis(),
            severity: raw
                .severity
                .as_deref()
                .and_then(|s| s.parse::<Severity>().ok())
                .unwrap_or(Severity::Low),
            channel: raw
                .channel
                .as_deref()
                .and_then(|s| s.parse::<ReminderChannel>().ok())
                .unwrap_or(ReminderChannel::Telegram),
            message: raw.message.unwrap_or_default(),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders
            (id, resource_id, due_in_days, scheduled_for, severity, channel, message)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(reminder.id.as_str())
        .bind(reminder.resource_id.as_str())
        .bind(reminder.due_in_days)
        .bind(DateTime::<Utc>::from_timestamp_millis(reminder.scheduled_for))
        .bind(reminder.severity.as_str())
        .bind(reminder.channel.as_str())
        .bind(&reminder.message)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT id, resource_id, due_in_days, scheduled_for, severity, channel, message
            FROM reminders WHERE id = $1
            "#,
        )
        .bind(reminder_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(Reminder::from)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let rows = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT id, resource_id, due_in_days, scheduled_for, severity, channel, message
            FROM reminders ORDER BY scheduled_for
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Reminder::from).collect())
    }
}
