// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, Role, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        email: Email,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            email,
            password_hash,
            role,
            created_at,
        }
    }
}
