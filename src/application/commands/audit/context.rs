// src/application/commands/audit/context.rs
use chrono::{DateTime, Utc};

/// What the recorder needs to know about the inbound request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Raw `X-Device-Time` header as sent by the client.
    pub device_time: Option<String>,
    pub source_address: Option<String>,
    pub agent: Option<String>,
}

impl RequestContext {
    pub fn with_device_time(mut self, device_time: impl Into<String>) -> Self {
        self.device_time = Some(device_time.into());
        self
    }

    pub fn with_source_address(mut self, source_address: impl Into<String>) -> Self {
        self.source_address = Some(source_address.into());
        self
    }

    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }
}

/// Resolve the client-reported time, falling back to `server_now` when the
/// header is absent or not a date we understand.
pub fn resolve_device_time(raw: Option<&str>, server_now: DateTime<Utc>) -> DateTime<Utc> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => parse_device_time(value).unwrap_or_else(|| {
            tracing::debug!(device_time = value, "unparseable device time, using server time");
            server_now
        }),
        None => server_now,
    }
}

/// Accepts RFC 3339 (what `Date#toISOString` sends), RFC 2822 and epoch
/// milliseconds.
fn parse_device_time(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    value
        .parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
}
