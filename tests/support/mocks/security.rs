// tests/support/mocks/security.rs
use async_trait::async_trait;
use attendance_audit::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use attendance_audit::domain::user::{Role, UserId};
use chrono::{DateTime, Duration, Utc};

pub const ADMIN_TOKEN: &str = "admin-token";
pub const STUDENT_TOKEN: &str = "student-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

const ISSUED_PREFIX: &str = "issued";

/* -------------------------------- TokenManager -------------------------------- */

/// Hands out readable `issued:<id>:<username>:<role>` tokens and accepts them
/// back, plus the fixed constants above.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: format!(
                "{ISSUED_PREFIX}:{}:{}:{}",
                subject.user_id, subject.username, subject.role
            ),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let now = super::time::fixed_now();
        match token {
            ADMIN_TOKEN => Ok(user(1, "admin", Role::Admin, now)),
            STUDENT_TOKEN => Ok(user(2, "student", Role::Student, now)),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("expired token")),
            other => parse_issued(other, now),
        }
    }
}

fn parse_issued(token: &str, now: DateTime<Utc>) -> ApplicationResult<AuthenticatedUser> {
    let parts: Vec<&str> = token.split(':').collect();
    match parts.as_slice() {
        [ISSUED_PREFIX, id, username, role] => {
            let id = id
                .parse::<i64>()
                .map_err(|_| ApplicationError::unauthorized("invalid token"))?;
            let role = role
                .parse::<Role>()
                .map_err(|_| ApplicationError::unauthorized("invalid token"))?;
            Ok(user(id, username, role, now))
        }
        _ => Err(ApplicationError::unauthorized("invalid token")),
    }
}

pub fn user(id: i64, username: &str, role: Role, now: DateTime<Utc>) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: username.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// Stores `hashed:<password>` and compares verbatim.
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

impl DummyPasswordHasher {
    pub fn hash_of(password: &str) -> String {
        format!("hashed:{password}")
    }
}

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(Self::hash_of(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if Self::hash_of(password) == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
