use super::IReminderRepo;
use crate::repos::shared::file_state::FileState;
use alarmhosting_domain::{Entity, Reminder, ID};
use std::sync::Arc;

pub struct FileReminderRepo {
    state: Arc<FileState>,
}

impl FileReminderRepo {
    pub fn new(state: Arc<FileState>) -> Self {
        Self { state }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for FileReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        self.state.write(|s| s.reminders.push(reminder.clone()));
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        self.state
            .read(|s| s.reminders.iter().find(|m| m.id() == reminder_id).cloned())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        Ok(self.state.read(|s| s.reminders.clone()))
    }
}
