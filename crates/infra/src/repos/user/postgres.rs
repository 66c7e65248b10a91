use super::IUserRepo;
use alarmhosting_domain::{User, ID};
use sqlx::{FromRow, PgPool};

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    id: String,
    name: String,
    role: String,
    avatar: Option<String>,
    is_admin: bool,
}

impl From<UserRaw> for User {
    fn from(raw: UserRaw) -> Self {
        Self {
            id: raw.id.as_str().into(),
            name: raw.name,
            role: raw.role,
            avatar: raw.avatar.unwrap_or_default(),
            is_admin: raw.is_admin,
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, role, avatar, is_admin)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id.as_str())
        .bind(&user.name)
        .bind(&user.role)
        .bind(&user.avatar)
        .bind(user.is_admin)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT id, name, role, avatar, is_admin FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(User::from)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT id, name, role, avatar, is_admin FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users.into_iter().map(User::from).collect())
    }
}
