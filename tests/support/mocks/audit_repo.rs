// tests/support/mocks/audit_repo.rs
use super::time::FixedClock;
use async_trait::async_trait;
use attendance_audit::application::ports::time::Clock;
use attendance_audit::domain::audit::{
    AuditEvent, AuditEventId, AuditEventRepository, NewAuditEvent,
};
use attendance_audit::domain::errors::{DomainError, DomainResult};
use attendance_audit::domain::user::UserId;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/* ------------------------------ in-memory ------------------------------ */

/// Append-only store that assigns ids and `recorded_at` at insertion, like
/// BIGSERIAL plus a `clock_timestamp()` default. Timestamps never go
/// backwards across inserts.
pub struct InMemoryAuditRepo {
    events: Mutex<Vec<AuditEvent>>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryAuditRepo {
    fn default() -> Self {
        Self::with_clock(Arc::new(FixedClock::default()))
    }
}

impl std::fmt::Debug for InMemoryAuditRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryAuditRepo")
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl InMemoryAuditRepo {
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            clock,
        }
    }

    /// Pre-populate with rows as they would come back from storage, e.g.
    /// legacy rows without a cached display time.
    pub fn with_events(events: Vec<AuditEvent>) -> Self {
        let repo = Self::default();
        *repo.events.lock().expect("audit repo poisoned") = events;
        repo
    }

    /// Everything written so far, in insertion order.
    pub fn snapshot(&self) -> Vec<AuditEvent> {
        self.events.lock().expect("audit repo poisoned").clone()
    }
}

#[async_trait]
impl AuditEventRepository for InMemoryAuditRepo {
    async fn append(&self, event: NewAuditEvent) -> DomainResult<AuditEvent> {
        let mut events = self.events.lock().expect("audit repo poisoned");
        let next_id = events.iter().map(|e| i64::from(e.id)).max().unwrap_or(0) + 1;
        let now = self.clock.now();
        let recorded_at = events
            .iter()
            .map(|e| e.recorded_at)
            .max()
            .map_or(now, |last| last.max(now));
        let stored = event.into_event(AuditEventId::new(next_id)?, recorded_at);
        events.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> DomainResult<Vec<AuditEvent>> {
        let mut events = self.snapshot();
        events.sort_by(|a, b| (b.recorded_at, b.id).cmp(&(a.recorded_at, a.id)));
        Ok(events)
    }

    async fn list_for_user(&self, user_id: UserId) -> DomainResult<Vec<AuditEvent>> {
        let mut events: Vec<_> = self
            .snapshot()
            .into_iter()
            .filter(|e| e.user_id == user_id)
            .collect();
        events.sort_by_key(|e| (e.recorded_at, e.id));
        Ok(events)
    }
}

/* ------------------------------- failing ------------------------------- */

/// Every call fails as if the database were down.
#[derive(Debug, Default)]
pub struct FailingAuditRepo;

#[async_trait]
impl AuditEventRepository for FailingAuditRepo {
    async fn append(&self, _event: NewAuditEvent) -> DomainResult<AuditEvent> {
        Err(DomainError::persistence("connection refused"))
    }

    async fn list_all(&self) -> DomainResult<Vec<AuditEvent>> {
        Err(DomainError::persistence("connection refused"))
    }

    async fn list_for_user(&self, _user_id: UserId) -> DomainResult<Vec<AuditEvent>> {
        Err(DomainError::persistence("connection refused"))
    }
}

/* -------------------------------- slow --------------------------------- */

/// Appends hang for `delay` before succeeding.
#[derive(Debug)]
pub struct SlowAuditRepo {
    pub delay: Duration,
    pub inner: InMemoryAuditRepo,
}

impl SlowAuditRepo {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            inner: InMemoryAuditRepo::default(),
        }
    }
}

#[async_trait]
impl AuditEventRepository for SlowAuditRepo {
    async fn append(&self, event: NewAuditEvent) -> DomainResult<AuditEvent> {
        tokio::time::sleep(self.delay).await;
        self.inner.append(event).await
    }

    async fn list_all(&self) -> DomainResult<Vec<AuditEvent>> {
        self.inner.list_all().await
    }

    async fn list_for_user(&self, user_id: UserId) -> DomainResult<Vec<AuditEvent>> {
        self.inner.list_for_user(user_id).await
    }
}
