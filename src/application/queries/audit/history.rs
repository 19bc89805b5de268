use super::{AuditQueryService, common};
use crate::{
    application::{
        dto::{AuthenticatedUser, SessionIntervalDto},
        error::ApplicationResult,
    },
    domain::{
        audit::{feed::oldest_first, reconstruct_sessions},
        user::UserId,
    },
};

impl AuditQueryService {
    /// Login sessions of one user in chronological order, the last one
    /// possibly still open.
    pub async fn user_session_history(
        &self,
        actor: &AuthenticatedUser,
        user_id: i64,
    ) -> ApplicationResult<Vec<SessionIntervalDto>> {
        let subject = UserId::new(user_id)?;
        common::ensure_history_access(actor, subject)?;

        let events = self.repo.list_for_user(subject).await.inspect_err(|err| {
            tracing::error!(error = %err, user_id, "failed to load session history");
        })?;

        let sessions = reconstruct_sessions(&oldest_first(events), &self.display_offset);
        Ok(sessions.into_iter().map(SessionIntervalDto::from).collect())
    }
}
