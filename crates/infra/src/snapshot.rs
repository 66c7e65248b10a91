use crate::repos::Repos;
use alarmhosting_domain::{Reminder, Resource};
use std::time::Duration;
use tracing::warn;

/// The data a calendar build runs on.
#[derive(Debug, Clone, Default)]
pub struct RenewalSnapshot {
    pub resources: Vec<Resource>,
    pub reminders: Vec<Reminder>,
}

/// Two-tier snapshot strategy: a bounded attempt against the repositories,
/// then an unconditional fall back to the seed snapshot. The fallback path
/// runs the exact same calendar computation, only the data source differs.
pub struct SnapshotLoader {
    timeout: Duration,
    fallback: Option<RenewalSnapshot>,
}

impl SnapshotLoader {
    pub fn new(timeout: Duration, fallback: Option<RenewalSnapshot>) -> Self {
        Self { timeout, fallback }
    }

    pub async fn load(&self, repos: &Repos) -> anyhow::Result<RenewalSnapshot> {
        let primary = tokio::time::timeout(self.timeout, async {
            let resources = repos.resources.find_all().await?;
            let reminders = repos.reminders.find_all().await?;
            Ok::<_, anyhow::Error>(RenewalSnapshot {
                resources,
                reminders,
            })
        })
        .await;

        match primary {
            Ok(Ok(snapshot)) => Ok(snapshot),
            Ok(Err(e)) => {
                warn!("Snapshot load failed, falling back to seed data: {:?}", e);
                self.fallback()
            }
            Err(_) => {
                warn!(
                    "Snapshot load exceeded {:?}, falling back to seed data",
                    self.timeout
                );
                self.fallback()
            }
        }
    }

    fn fallback(&self) -> anyhow::Result<RenewalSnapshot> {
        self.fallback
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Renewal data is unavailable"))
    }
}
