// src/domain/audit/session.rs
use super::entity::{AuditAction, AuditEvent, AuditEventId, NetworkMeta, UserSnapshot};
use crate::domain::user::UserId;
use chrono::{DateTime, FixedOffset, Utc};

/// One login paired with the logout that closed it, if any. Derived on read,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInterval {
    pub login_event_id: AuditEventId,
    pub user_id: UserId,
    pub login_time: Option<DateTime<Utc>>,
    pub formatted_login_time: Option<String>,
    pub logout_event_id: Option<AuditEventId>,
    pub logout_time: Option<DateTime<Utc>>,
    pub formatted_logout_time: Option<String>,
    pub snapshot: UserSnapshot,
    pub network: NetworkMeta,
}

impl SessionInterval {
    fn opened_by(login: &AuditEvent, offset: &FixedOffset) -> Self {
        Self {
            login_event_id: login.id,
            user_id: login.user_id,
            login_time: login.device_time,
            formatted_login_time: login.display_time(offset),
            logout_event_id: None,
            logout_time: None,
            formatted_logout_time: None,
            snapshot: login.snapshot.clone(),
            network: login.network.clone(),
        }
    }

    fn close_with(&mut self, logout: &AuditEvent, offset: &FixedOffset) {
        self.logout_event_id = Some(logout.id);
        self.logout_time = logout.device_time;
        self.formatted_logout_time = logout.display_time(offset);
    }

    pub fn is_open(&self) -> bool {
        self.logout_event_id.is_none()
    }
}

/// Pair LOGIN and LOGOUT events into sessions.
///
/// `events` must already be in server order (oldest first). Only the most
/// recent LOGIN is ever open: a second LOGIN leaves the earlier session open
/// for good, and a LOGOUT with nothing open is dropped.
pub fn reconstruct_sessions(events: &[AuditEvent], offset: &FixedOffset) -> Vec<SessionInterval> {
    let mut sessions: Vec<SessionInterval> = Vec::new();
    let mut open: Option<usize> = None;

    for event in events {
        match event.action {
            AuditAction::Login => {
                sessions.push(SessionInterval::opened_by(event, offset));
                open = Some(sessions.len() - 1);
            }
            AuditAction::Logout => {
                if let Some(session) = open.take().and_then(|idx| sessions.get_mut(idx)) {
                    session.close_with(event, offset);
                }
            }
        }
    }

    sessions
}
