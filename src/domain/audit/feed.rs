// src/domain/audit/feed.rs
use super::entity::AuditEvent;

/// Order events newest first by `(recorded_at, id)`. Device times never
/// take part in ordering.
pub fn newest_first(mut events: Vec<AuditEvent>) -> Vec<AuditEvent> {
    events.sort_by(|a, b| b.ordering_key().cmp(&a.ordering_key()));
    events
}

/// Chronological order by `(recorded_at, id)`, as needed for pairing.
pub fn oldest_first(mut events: Vec<AuditEvent>) -> Vec<AuditEvent> {
    events.sort_by_key(AuditEvent::ordering_key);
    events
}
