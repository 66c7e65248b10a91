mod activity;
mod alert_log;
mod reminder;
mod resource;
mod session;
mod shared;
mod user;

use crate::seed::State;
use activity::{IActivityRepo, InMemoryActivityRepo};
use alert_log::{IAlertLogRepo, InMemoryAlertLogRepo, PostgresAlertLogRepo};
use reminder::{FileReminderRepo, IReminderRepo, InMemoryReminderRepo, PostgresReminderRepo};
use resource::{FileResourceRepo, IResourceRepo, InMemoryResourceRepo, PostgresResourceRepo};
use session::{ISessionRepo, InMemorySessionRepo, PostgresSessionRepo};
use shared::file_state::FileState;
use sqlx::postgres::PgPoolOptions;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use user::{FileUserRepo, IUserRepo, InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub resources: Arc<dyn IResourceRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
    pub alert_logs: Arc<dyn IAlertLogRepo>,
    pub sessions: Arc<dyn ISessionRepo>,
    pub activity: Arc<dyn IActivityRepo>,
}

impl Repos {
    /// Durable repositories backed by postgres. Runs migrations and seeds
    /// empty tables from the given seed state. The activity feed stays
    /// seed-backed, and the alert log degrades to an in-process buffer when
    /// the database is unavailable.
    pub async fn create_postgres(
        connection_string: &str,
        seed: Option<State>,
    ) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        sqlx::migrate!().run(&pool).await?;
        info!("DB CHECKING CONNECTION ... [done]");

        let repos = Self {
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            resources: Arc::new(PostgresResourceRepo::new(pool.clone())),
            reminders: Arc::new(PostgresReminderRepo::new(pool.clone())),
            alert_logs: Arc::new(PostgresAlertLogRepo::new(pool.clone())),
            sessions: Arc::new(PostgresSessionRepo::new(pool)),
            activity: Arc::new(InMemoryActivityRepo::new(
                seed.as_ref().map(|s| s.activity.clone()).unwrap_or_default(),
            )),
        };

        if let Some(seed) = seed {
            repos.seed_if_empty(seed).await?;
        }
        Ok(repos)
    }

    /// File-backed repositories sharing one JSON state file. Alert logs and
    /// sessions live in-process in this mode.
    pub fn create_file(
        state_file: &Path,
        seed_path: Option<&Path>,
        now_ms: i64,
    ) -> anyhow::Result<Self> {
        let state = Arc::new(FileState::load(state_file, seed_path, now_ms)?);
        let activity = state.read(|s| s.activity.clone());
        Ok(Self {
            users: Arc::new(FileUserRepo::new(state.clone())),
            resources: Arc::new(FileResourceRepo::new(state.clone())),
            reminders: Arc::new(FileReminderRepo::new(state)),
            alert_logs: Arc::new(InMemoryAlertLogRepo::new()),
            sessions: Arc::new(InMemorySessionRepo::new()),
            activity: Arc::new(InMemoryActivityRepo::new(activity)),
        })
    }

    /// Ephemeral repositories, lifecycle = process lifetime. Used for tests
    /// and when no durable store is configured.
    pub fn create_inmemory(seed: Option<State>) -> Self {
        let seed = seed.unwrap_or_default();
        Self {
            users: Arc::new(InMemoryUserRepo::new(seed.users)),
            resources: Arc::new(InMemoryResourceRepo::new(seed.resources)),
            reminders: Arc::new(InMemoryReminderRepo::new(seed.reminders)),
            alert_logs: Arc::new(InMemoryAlertLogRepo::new()),
            sessions: Arc::new(InMemorySessionRepo::new()),
            activity: Arc::new(InMemoryActivityRepo::new(seed.activity)),
        }
    }

    async fn seed_if_empty(&self, seed: State) -> anyhow::Result<()> {
        if !self.users.find_all().await?.is_empty() {
            return Ok(());
        }
        info!("Seeding empty database from seed data");
        for user in &seed.users {
            self.users.insert(user).await?;
        }
        for resource in &seed.resources {
            self.resources.insert(resource).await?;
        }
        for reminder in &seed.reminders {
            self.reminders.insert(reminder).await?;
        }
        Ok(())
    }
}
