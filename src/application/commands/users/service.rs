use std::sync::Arc;

use crate::application::{
    commands::audit::AuditRecorder,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
};
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) audit_recorder: Arc<AuditRecorder>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        audit_recorder: Arc<AuditRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            audit_recorder,
            clock,
        }
    }
}
