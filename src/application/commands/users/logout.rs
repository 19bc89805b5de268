use super::UserCommandService;
use crate::application::{commands::audit::RequestContext, dto::AuthenticatedUser};

impl UserCommandService {
    /// Tokens are stateless, so logging out only leaves a LOGOUT event
    /// behind for the session history.
    pub async fn logout(&self, actor: &AuthenticatedUser, context: &RequestContext) {
        tracing::info!(user_id = i64::from(actor.id), "user logged out");
        self.audit_recorder.record_logout(actor.id, context).await;
    }
}
