// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "server time": the audit ordering key and the fallback for
/// missing device times.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
