mod file;
mod inmemory;
mod postgres;

pub use file::FileUserRepo;
pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;

use alarmhosting_domain::{User, ID};

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    async fn find_all(&self) -> anyhow::Result<Vec<User>>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use alarmhosting_domain::User;

    #[tokio::test]
    async fn inserts_and_finds_users() {
        let ctx = setup_context().await;
        let user = User {
            id: "u1".into(),
            name: "Ops".into(),
            role: "admin".into(),
            avatar: String::new(),
            is_admin: true,
        };

        ctx.repos.users.insert(&user).await.expect("To insert user");

        assert_eq!(ctx.repos.users.find(&user.id).await, Some(user.clone()));
        assert_eq!(ctx.repos.users.find(&"ghost".into()).await, None);
        assert_eq!(ctx.repos.users.find_all().await.unwrap(), vec![user]);
    }
}
