use super::IAlertLogRepo;
use alarmhosting_domain::AlertEntry;
use std::sync::Mutex;

pub struct InMemoryAlertLogRepo {
    entries: Mutex<Vec<AlertEntry>>,
}

impl InMemoryAlertLogRepo {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryAlertLogRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// Last `limit` entries, most recent first. Sorting is stable so entries
/// with identical timestamps keep their append order relative ordering.
pub(crate) fn most_recent(entries: &[AlertEntry], limit: i64) -> Vec<AlertEntry> {
    let mut items = entries.to_vec();
    items.sort_by_key(|e| std::cmp::Reverse(e.sent_at));
    items.truncate(limit.max(0) as usize);
    items
}

#[async_trait::async_trait]
impl IAlertLogRepo for InMemoryAlertLogRepo {
    async fn insert(&self, entry: &AlertEntry) -> anyhow::Result<()> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }

    async fn list(&self, limit: i64) -> anyhow::Result<Vec<AlertEntry>> {
        let entries = self.entries.lock().unwrap();
        Ok(most_recent(&entries, limit))
    }
}
