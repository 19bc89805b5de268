use super::{AuditQueryService, common};
use crate::{
    application::{
        dto::{AuditEventDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::audit::feed::newest_first,
};

impl AuditQueryService {
    /// Every recorded event, newest first.
    pub async fn audit_feed(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<AuditEventDto>> {
        common::ensure_audit_capability(actor)?;

        let events = self.repo.list_all().await.inspect_err(|err| {
            tracing::error!(error = %err, "failed to load audit feed");
        })?;

        Ok(newest_first(events)
            .into_iter()
            .map(|event| AuditEventDto::from_event(event, &self.display_offset))
            .collect())
    }
}
