use super::IUserRepo;
use crate::repos::shared::file_state::FileState;
use alarmhosting_domain::{Entity, User, ID};
use std::sync::Arc;

pub struct FileUserRepo {
    state: Arc<FileState>,
}

impl FileUserRepo {
    pub fn new(state: Arc<FileState>) -> Self {
        Self { state }
    }
}

#[async_trait::async_trait]
impl IUserRepo for FileUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        self.state.write(|s| s.users.push(user.clone()));
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        self.state
            .read(|s| s.users.iter().find(|u| u.id() == user_id).cloned())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.state.read(|s| s.users.clone()))
    }
}
