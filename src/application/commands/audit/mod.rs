mod context;
mod recorder;

pub use context::{RequestContext, resolve_device_time};
pub use recorder::AuditRecorder;
