use crate::domain::audit::{AuditEvent, SessionInterval};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the admin audit feed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuditEventDto {
    pub id: i64,
    pub user_id: i64,
    /// `LOGIN` or `LOGOUT`.
    pub action: String,
    pub server_timestamp: DateTime<Utc>,
    pub device_timestamp: Option<DateTime<Utc>>,
    pub formatted_device_time: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl AuditEventDto {
    pub fn from_event(event: AuditEvent, offset: &FixedOffset) -> Self {
        let formatted_device_time = event.display_time(offset);
        Self {
            id: event.id.into(),
            user_id: event.user_id.into(),
            action: event.action.as_str().to_string(),
            server_timestamp: event.recorded_at,
            device_timestamp: event.device_time,
            formatted_device_time,
            ip_address: event.network.ip_address,
            user_agent: event.network.user_agent,
            username: event.snapshot.username,
            email: event.snapshot.email,
            role: event.snapshot.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionIntervalDto {
    pub login_event_id: i64,
    pub user_id: i64,
    pub login_time: Option<DateTime<Utc>>,
    pub formatted_login_time: Option<String>,
    pub logout_time: Option<DateTime<Utc>>,
    pub formatted_logout_time: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl From<SessionInterval> for SessionIntervalDto {
    fn from(s: SessionInterval) -> Self {
        Self {
            login_event_id: s.login_event_id.into(),
            user_id: s.user_id.into(),
            login_time: s.login_time,
            formatted_login_time: s.formatted_login_time,
            logout_time: s.logout_time,
            formatted_logout_time: s.formatted_logout_time,
            ip_address: s.network.ip_address,
            user_agent: s.network.user_agent,
            username: s.snapshot.username,
            email: s.snapshot.email,
            role: s.snapshot.role,
        }
    }
}
