use super::IResourceRepo;
use alarmhosting_domain::{Resource, ResourceStatus, ResourceType, ID};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

pub struct PostgresResourceRepo {
    pool: PgPool,
}

impl PostgresResourceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ResourceRaw {
    id: String,
    resource_type: String,
    label: String,
    hostname: String,
    provider: String,
    expiry_date: String,
    status: Option<String>,
    renewal_url: Option<String>,
    notes: Option<String>,
    last_checked: Option<DateTime<Utc>>,
    tags: Option<Vec<String>>,
}

impl TryFrom<ResourceRaw> for Resource {
    type Error = anyhow::Error;

    fn try_from(raw: ResourceRaw) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id.as_str().into(),
            resource_type: raw
                .resource_type
                .parse::<ResourceType>()
                .map_err(anyhow::Error::msg)?,
            label: raw.label,
            hostname: raw.hostname,
            provider: raw.provider,
            expiry_date: raw.expiry_date,
            status: raw
                .status
                .as_deref()
                .and_then(|s| s.parse::<ResourceStatus>().ok())
                .unwrap_or(ResourceStatus::Healthy),
            renewal_url: raw.renewal_url.unwrap_or_default(),
            notes: raw.notes.unwrap_or_default(),
            last_checked: raw
                .last_checked
                .map(|dt| dt.timestamp_millis())
                .unwrap_or_default(),
            tags: raw.tags.unwrap_or_default(),
        })
    }
}

const SELECT_COLUMNS: &str = r#"
    id, resource_type, label, hostname, provider, expiry_date,
    status, renewal_url, notes, last_checked, tags
"#;

#[async_trait::async_trait]
impl IResourceRepo for PostgresResourceRepo {
    async fn insert(&self, resource: &Resource) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO resources
            (id, resource_type, label, hostname, provider, expiry_date,
             status, renewal_url, notes, last_checked, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(resource.id.as_str())
        .bind(resource.resource_type.as_str())
        .bind(&resource.label)
        .bind(&resource.hostname)
        .bind(&resource.provider)
        .bind(&resource.expiry_date)
        .bind(resource.status.as_str())
        .bind(&resource.renewal_url)
        .bind(&resource.notes)
        .bind(DateTime::<Utc>::from_timestamp_millis(resource.last_checked))
        .bind(&resource.tags)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, resource_id: &ID) -> Option<Resource> {
        let raw = sqlx::query_as::<_, ResourceRaw>(&format!(
            "SELECT {} FROM resources WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(resource_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()?;
        Resource::try_from(raw).ok()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Resource>> {
        let rows = sqlx::query_as::<_, ResourceRaw>(&format!(
            "SELECT {} FROM resources ORDER BY id",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Resource::try_from).collect()
    }
}
