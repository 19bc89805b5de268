// src/application/commands/audit/recorder.rs
use std::{sync::Arc, time::Duration};

use chrono::FixedOffset;
use tracing::{debug, error, warn};

use super::context::{RequestContext, resolve_device_time};
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        audit::{
            AuditAction, AuditEvent, AuditEventRepository, NetworkMeta, NewAuditEvent,
            UserSnapshot, format_12h,
        },
        user::{UserId, UserRepository},
    },
};

const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// Writes the login/logout trail.
///
/// `record_login` and `record_logout` never fail: every error, including a
/// write that outlives `write_timeout`, is logged and dropped.
pub struct AuditRecorder {
    audit_repo: Arc<dyn AuditEventRepository>,
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
    display_offset: FixedOffset,
    write_timeout: Duration,
}

impl AuditRecorder {
    pub fn new(
        audit_repo: Arc<dyn AuditEventRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        display_offset: FixedOffset,
    ) -> Self {
        Self {
            audit_repo,
            user_repo,
            clock,
            display_offset,
            write_timeout: DEFAULT_WRITE_TIMEOUT,
        }
    }

    pub fn with_write_timeout(mut self, write_timeout: Duration) -> Self {
        self.write_timeout = write_timeout;
        self
    }

    pub async fn record_login(&self, user_id: UserId, context: &RequestContext) {
        self.record(AuditAction::Login, user_id, context).await;
    }

    pub async fn record_logout(&self, user_id: UserId, context: &RequestContext) {
        self.record(AuditAction::Logout, user_id, context).await;
    }

    async fn record(&self, action: AuditAction, user_id: UserId, context: &RequestContext) {
        let outcome = tokio::time::timeout(
            self.write_timeout,
            self.try_record(action, user_id, context),
        )
        .await
        .unwrap_or_else(|_| {
            Err(ApplicationError::timeout(format!(
                "audit write exceeded {}ms",
                self.write_timeout.as_millis()
            )))
        });

        match outcome {
            Ok(event) => debug!(
                event_id = i64::from(event.id),
                user_id = i64::from(user_id),
                action = %action,
                "audit event recorded"
            ),
            Err(err) => error!(
                error = %err,
                user_id = i64::from(user_id),
                action = %action,
                "failed to record audit event"
            ),
        }
    }

    async fn try_record(
        &self,
        action: AuditAction,
        user_id: UserId,
        context: &RequestContext,
    ) -> ApplicationResult<AuditEvent> {
        let snapshot = self.snapshot_for(user_id).await;
        let device_time = resolve_device_time(context.device_time.as_deref(), self.clock.now());
        let formatted_device_time = format_12h(&device_time.with_timezone(&self.display_offset));

        let event = NewAuditEvent {
            user_id,
            action,
            device_time,
            formatted_device_time,
            network: NetworkMeta {
                ip_address: context.source_address.clone(),
                user_agent: context.agent.clone(),
            },
            snapshot,
        };

        Ok(self.audit_repo.append(event).await?)
    }

    async fn snapshot_for(&self, user_id: UserId) -> UserSnapshot {
        match self.user_repo.find_by_id(user_id).await {
            Ok(Some(user)) => UserSnapshot::from(&user),
            Ok(None) => {
                debug!(user_id = i64::from(user_id), "audit subject not found, recording without snapshot");
                UserSnapshot::default()
            }
            Err(err) => {
                warn!(
                    error = %err,
                    user_id = i64::from(user_id),
                    "user lookup failed, recording without snapshot"
                );
                UserSnapshot::default()
            }
        }
    }
}
