use crate::shared::entity::{Entity, ID};

/// Session principal. `is_admin` gates access to the alert history.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub is_admin: bool,
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// An authenticated login. The id is a random secret handed to the browser
/// as an http-only cookie.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: String,
    pub user_id: ID,
    pub created_at: i64,
    pub last_seen_at: i64,
}
