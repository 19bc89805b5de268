// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_audit_event;
mod postgres_user;

pub(crate) use error::map_sqlx;
pub use postgres_audit_event::PostgresAuditEventRepository;
pub use postgres_user::PostgresUserRepository;
