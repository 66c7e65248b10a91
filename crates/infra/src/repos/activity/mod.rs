mod inmemory;

pub use inmemory::InMemoryActivityRepo;

use alarmhosting_domain::ActivityItem;

/// Dashboard activity feed. Read-only seed data in the current scope, so
/// the seed-backed variant serves every storage mode.
#[async_trait::async_trait]
pub trait IActivityRepo: Send + Sync {
    async fn find_all(&self) -> anyhow::Result<Vec<ActivityItem>>;
}
