// src/domain/audit/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{User, UserId};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::time_format::format_12h;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AuditEventId(pub i64);

impl AuditEventId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("audit event id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AuditEventId> for i64 {
    fn from(value: AuditEventId) -> Self {
        value.0
    }
}

/// The only two things the trail ever records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    Login,
    Logout,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Login => "LOGIN",
            AuditAction::Logout => "LOGOUT",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOGIN" => Ok(AuditAction::Login),
            "LOGOUT" => Ok(AuditAction::Logout),
            other => Err(DomainError::Validation(format!(
                "unknown audit action '{other}'"
            ))),
        }
    }
}

/// Copy of the user's identity as it was when the event happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSnapshot {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl From<&User> for UserSnapshot {
    fn from(user: &User) -> Self {
        Self {
            username: Some(user.username.to_string()),
            email: Some(user.email.to_string()),
            role: Some(user.role.as_str().to_string()),
        }
    }
}

/// Where the request came from. Advisory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkMeta {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub id: AuditEventId,
    pub user_id: UserId,
    pub action: AuditAction,
    /// Storage-side time; the ordering key together with `id`.
    pub recorded_at: DateTime<Utc>,
    /// Client-reported time used for display. Rows written before device
    /// times were captured have none.
    pub device_time: Option<DateTime<Utc>>,
    pub formatted_device_time: Option<String>,
    pub network: NetworkMeta,
    pub snapshot: UserSnapshot,
}

impl AuditEvent {
    /// Cached 12-hour rendering of the device time, recomputed for rows that
    /// predate the cache.
    pub fn display_time(&self, offset: &FixedOffset) -> Option<String> {
        self.formatted_device_time.clone().or_else(|| {
            self.device_time
                .map(|at| format_12h(&at.with_timezone(offset)))
        })
    }

    pub(crate) fn ordering_key(&self) -> (DateTime<Utc>, AuditEventId) {
        (self.recorded_at, self.id)
    }
}

#[derive(Debug, Clone)]
pub struct NewAuditEvent {
    pub user_id: UserId,
    pub action: AuditAction,
    pub device_time: DateTime<Utc>,
    pub formatted_device_time: String,
    pub network: NetworkMeta,
    pub snapshot: UserSnapshot,
}

impl NewAuditEvent {
    /// Materialise the stored form once the repository has assigned an id
    /// and the insertion time.
    pub fn into_event(self, id: AuditEventId, recorded_at: DateTime<Utc>) -> AuditEvent {
        AuditEvent {
            id,
            user_id: self.user_id,
            action: self.action,
            recorded_at,
            device_time: Some(self.device_time),
            formatted_device_time: Some(self.formatted_device_time),
            network: self.network,
            snapshot: self.snapshot,
        }
    }
}
