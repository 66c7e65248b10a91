use super::IActivityRepo;
use crate::repos::shared::inmemory_repo::*;
use alarmhosting_domain::ActivityItem;

pub struct InMemoryActivityRepo {
    activity: std::sync::Mutex<Vec<ActivityItem>>,
}

impl InMemoryActivityRepo {
    pub fn new(seed: Vec<ActivityItem>) -> Self {
        Self {
            activity: std::sync::Mutex::new(seed),
        }
    }
}

#[async_trait::async_trait]
impl IActivityRepo for InMemoryActivityRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<ActivityItem>> {
        Ok(find_all(&self.activity))
    }
}
