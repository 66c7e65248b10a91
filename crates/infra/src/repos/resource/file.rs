use super::IResourceRepo;
use crate::repos::shared::file_state::FileState;
use alarmhosting_domain::{Entity, Resource, ID};
use std::sync::Arc;

pub struct FileResourceRepo {
    state: Arc<FileState>,
}

impl FileResourceRepo {
    pub fn new(state: Arc<FileState>) -> Self {
        Self { state }
    }
}

#[async_trait::async_trait]
impl IResourceRepo for FileResourceRepo {
    async fn insert(&self, resource: &Resource) -> anyhow::Result<()> {
        self.state.write(|s| s.resources.push(resource.clone()));
        Ok(())
    }

    async fn find(&self, resource_id: &ID) -> Option<Resource> {
        self.state
            .read(|s| s.resources.iter().find(|r| r.id() == resource_id).cloned())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Resource>> {
        Ok(self.state.read(|s| s.resources.clone()))
    }
}
