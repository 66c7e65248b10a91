mod file;
mod inmemory;
mod postgres;

pub use file::FileReminderRepo;
pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;

use alarmhosting_domain::{Reminder, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>>;
}
