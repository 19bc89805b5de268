use std::sync::Arc;

use chrono::FixedOffset;

use crate::domain::audit::AuditEventRepository;

/// Read side of the audit trail. Unlike the recorder, storage failures here
/// are returned to the caller.
pub struct AuditQueryService {
    pub(super) repo: Arc<dyn AuditEventRepository>,
    pub(super) display_offset: FixedOffset,
}

impl AuditQueryService {
    pub fn new(repo: Arc<dyn AuditEventRepository>, display_offset: FixedOffset) -> Self {
        Self {
            repo,
            display_offset,
        }
    }
}
