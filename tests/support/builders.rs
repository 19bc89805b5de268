// tests/support/builders.rs
use super::mocks::{DummyPasswordHasher, fixed_now};
use attendance_audit::domain::audit::{
    AuditAction, AuditEvent, AuditEventId, NetworkMeta, UserSnapshot,
};
use attendance_audit::domain::user::{Email, PasswordHash, Role, User, UserId, Username};
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_PASSWORD: &str = "secret123";

pub fn sample_user(id: i64, username: &str, role: Role) -> User {
    User {
        id: UserId::new(id).expect("invalid user id"),
        username: Username::new(username).expect("invalid username"),
        email: Email::new(format!("{username}@example.edu")).expect("invalid email"),
        password_hash: PasswordHash::new(DummyPasswordHasher::hash_of(DEFAULT_PASSWORD))
            .expect("invalid hash"),
        role,
        created_at: fixed_now(),
    }
}

/// `fixed_now() + secs`.
pub fn at(secs: i64) -> DateTime<Utc> {
    fixed_now() + Duration::seconds(secs)
}

/// A stored event whose server and device clocks agree and whose display
/// time was cached at write time.
pub fn stored_event(id: i64, user_id: i64, action: AuditAction, secs: i64) -> AuditEvent {
    AuditEvent {
        id: AuditEventId::new(id).expect("invalid event id"),
        user_id: UserId::new(user_id).expect("invalid user id"),
        action,
        recorded_at: at(secs),
        device_time: Some(at(secs)),
        formatted_device_time: Some(format!("cached-{id}")),
        network: NetworkMeta {
            ip_address: Some("10.0.0.5".into()),
            user_agent: Some("attendance-app/1.0".into()),
        },
        snapshot: UserSnapshot {
            username: Some(format!("user{user_id}")),
            email: Some(format!("user{user_id}@example.edu")),
            role: Some("student".into()),
        },
    }
}

/// A row written before display times were cached.
pub fn legacy_event(id: i64, user_id: i64, action: AuditAction, secs: i64) -> AuditEvent {
    AuditEvent {
        formatted_device_time: None,
        ..stored_event(id, user_id, action, secs)
    }
}
