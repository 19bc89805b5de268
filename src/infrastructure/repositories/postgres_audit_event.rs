// src/infrastructure/repositories/postgres_audit_event.rs
use super::map_sqlx;
use crate::domain::audit::{
    AuditAction, AuditEvent, AuditEventId, AuditEventRepository, NetworkMeta, NewAuditEvent,
    UserSnapshot,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const EVENT_COLUMNS: &str = "id, user_id, action, recorded_at, device_time, formatted_device_time, \
                             ip_address, user_agent, username, email, role";

#[derive(Clone)]
pub struct PostgresAuditEventRepository {
    pool: PgPool,
}

impl PostgresAuditEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditEventRow {
    id: i64,
    user_id: i64,
    action: String,
    recorded_at: DateTime<Utc>,
    device_time: Option<DateTime<Utc>>,
    formatted_device_time: Option<String>,
    ip_address: Option<String>,
    user_agent: Option<String>,
    username: Option<String>,
    email: Option<String>,
    role: Option<String>,
}

impl TryFrom<AuditEventRow> for AuditEvent {
    type Error = DomainError;

    fn try_from(row: AuditEventRow) -> Result<Self, Self::Error> {
        Ok(AuditEvent {
            id: AuditEventId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            action: row.action.parse::<AuditAction>()?,
            recorded_at: row.recorded_at,
            device_time: row.device_time,
            formatted_device_time: row.formatted_device_time,
            network: NetworkMeta {
                ip_address: row.ip_address,
                user_agent: row.user_agent,
            },
            snapshot: UserSnapshot {
                username: row.username,
                email: row.email,
                role: row.role,
            },
        })
    }
}

fn collect(rows: Vec<AuditEventRow>) -> DomainResult<Vec<AuditEvent>> {
    rows.into_iter().map(AuditEvent::try_from).collect()
}

#[async_trait]
impl AuditEventRepository for PostgresAuditEventRepository {
    async fn append(&self, event: NewAuditEvent) -> DomainResult<AuditEvent> {
        let (id, recorded_at) = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            r#"
            INSERT INTO audit_events (
                user_id, action, device_time, formatted_device_time,
                ip_address, user_agent, username, email, role
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, recorded_at
            "#,
        )
        .bind(i64::from(event.user_id))
        .bind(event.action.as_str())
        .bind(event.device_time)
        .bind(&event.formatted_device_time)
        .bind(event.network.ip_address.as_deref())
        .bind(event.network.user_agent.as_deref())
        .bind(event.snapshot.username.as_deref())
        .bind(event.snapshot.email.as_deref())
        .bind(event.snapshot.role.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(event.into_event(AuditEventId::new(id)?, recorded_at))
    }

    async fn list_all(&self) -> DomainResult<Vec<AuditEvent>> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM audit_events ORDER BY recorded_at DESC, id DESC");
        let rows = sqlx::query_as::<_, AuditEventRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        collect(rows)
    }

    async fn list_for_user(&self, user_id: UserId) -> DomainResult<Vec<AuditEvent>> {
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM audit_events WHERE user_id = $1 ORDER BY recorded_at ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, AuditEventRow>(&sql)
            .bind(i64::from(user_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        collect(rows)
    }
}
