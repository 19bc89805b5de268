use crate::application::{
    authorization::ensure_capability,
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;

pub(super) fn ensure_audit_capability(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    ensure_capability(actor, "audit", "read")
}

/// Admins may read anyone's history, everyone else only their own.
pub(super) fn ensure_history_access(
    actor: &AuthenticatedUser,
    subject: UserId,
) -> ApplicationResult<()> {
    if actor.id == subject || actor.has_capability("audit", "read") {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "not authorized to view these logs",
        ))
    }
}
