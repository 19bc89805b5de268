use crate::domain::audit::entity::{AuditEvent, NewAuditEvent};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Append-only store of login/logout events. No update, no delete.
#[async_trait]
pub trait AuditEventRepository: Send + Sync {
    /// Stores the event. The store assigns `id` and `recorded_at` at
    /// insertion, both non-decreasing in insertion order.
    async fn append(&self, event: NewAuditEvent) -> DomainResult<AuditEvent>;

    /// Every event, newest first by `(recorded_at, id)`.
    async fn list_all(&self) -> DomainResult<Vec<AuditEvent>>;

    /// Events of one user, oldest first by `(recorded_at, id)`.
    async fn list_for_user(&self, user_id: UserId) -> DomainResult<Vec<AuditEvent>>;
}
