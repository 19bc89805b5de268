// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, NewUser, PasswordHash, Role, User, UserId, UserRepository, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const USER_COLUMNS: &str = "id, username, email, password_hash, role, created_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: row.role.parse::<Role>()?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM users")
            .fetch_one(&self.pool)
            .await
            .map(|count| count.max(0) as u64)
            .map_err(map_sqlx)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let sql = format!(
            "INSERT INTO users (username, email, password_hash, role, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(new_user.username.as_str())
            .bind(new_user.email.as_str())
            .bind(new_user.password_hash.as_str())
            .bind(new_user.role.as_str())
            .bind(new_user.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn insert_if_empty(&self, new_user: NewUser) -> DomainResult<Option<User>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Self-conflicting lock: a second bootstrap waits, then sees the row.
        sqlx::query("LOCK TABLE users IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let sql = format!(
            "INSERT INTO users (username, email, password_hash, role, created_at)
             SELECT $1, $2, $3, $4, $5
             WHERE NOT EXISTS (SELECT 1 FROM users)
             RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(new_user.username.as_str())
            .bind(new_user.email.as_str())
            .bind(new_user.password_hash.as_str())
            .bind(new_user.role.as_str())
            .bind(new_user.created_at)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }
}
