// src/domain/audit/mod.rs
pub mod entity;
pub mod feed;
pub mod repository;
pub mod session;
pub mod time_format;

pub use entity::{AuditAction, AuditEvent, AuditEventId, NetworkMeta, NewAuditEvent, UserSnapshot};
pub use repository::AuditEventRepository;
pub use session::{SessionInterval, reconstruct_sessions};
pub use time_format::format_12h;
