use super::ISessionRepo;
use alarmhosting_domain::Session;
use std::sync::Mutex;

pub struct InMemorySessionRepo {
    sessions: Mutex<Vec<Session>>,
}

impl InMemorySessionRepo {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemorySessionRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ISessionRepo for InMemorySessionRepo {
    async fn insert(&self, session: &Session) -> anyhow::Result<()> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn find(&self, session_id: &str) -> Option<Session> {
        self.sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == session_id)
            .cloned()
    }

    async fn touch(&self, session_id: &str, now_ms: i64) {
        let mut sessions = self.sessions.lock().unwrap();
        if let Some(session) = sessions.iter_mut().find(|s| s.id == session_id) {
            session.last_seen_at = now_ms;
        }
    }

    async fn delete(&self, session_id: &str) -> Option<Session> {
        let mut sessions = self.sessions.lock().unwrap();
        let index = sessions.iter().position(|s| s.id == session_id)?;
        Some(sessions.remove(index))
    }
}
