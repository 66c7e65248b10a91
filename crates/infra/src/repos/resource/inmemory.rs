use super::IResourceRepo;
use crate::repos::shared::inmemory_repo::*;
use alarmhosting_domain::{Resource, ID};

pub struct InMemoryResourceRepo {
    resources: std::sync::Mutex<Vec<Resource>>,
}

impl InMemoryResourceRepo {
    pub fn new(seed: Vec<Resource>) -> Self {
        Self {
            resources: std::sync::Mutex::new(seed),
        }
    }
}

#[async_trait::async_trait]
impl IResourceRepo for InMemoryResourceRepo {
    async fn insert(&self, resource: &Resource) -> anyhow::Result<()> {
        insert(resource, &self.resources);
        Ok(())
    }

    async fn find(&self, resource_id: &ID) -> Option<Resource> {
        find(resource_id, &self.resources)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Resource>> {
        Ok(find_all(&self.resources))
    }
}
