// src/application/services/mod.rs
use std::sync::Arc;

use chrono::FixedOffset;

use crate::{
    application::{
        commands::{audit::AuditRecorder, users::UserCommandService},
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{audit::AuditQueryService, users::UserQueryService},
        ApplicationResult,
    },
    domain::{audit::AuditEventRepository, user::UserRepository},
};

/// Composition root for the use cases. Every dependency is handed in here;
/// nothing reaches for process-wide state.
pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub audit_recorder: Arc<AuditRecorder>,
    pub audit_queries: Arc<AuditQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        audit_repo: Arc<dyn AuditEventRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        display_offset: FixedOffset,
    ) -> Self {
        let audit_recorder = Arc::new(AuditRecorder::new(
            Arc::clone(&audit_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
            display_offset,
        ));

        Self::with_recorder(
            user_repo,
            audit_repo,
            password_hasher,
            token_manager,
            clock,
            display_offset,
            audit_recorder,
        )
    }

    /// Same as [`ApplicationServices::new`] but with a recorder built by the
    /// caller, e.g. one with a custom write timeout.
    pub fn with_recorder(
        user_repo: Arc<dyn UserRepository>,
        audit_repo: Arc<dyn AuditEventRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        display_offset: FixedOffset,
        audit_recorder: Arc<AuditRecorder>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&audit_recorder),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));
        let audit_queries = Arc::new(AuditQueryService::new(audit_repo, display_offset));

        Self {
            user_commands,
            user_queries,
            audit_recorder,
            audit_queries,
            token_manager,
        }
    }

    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
