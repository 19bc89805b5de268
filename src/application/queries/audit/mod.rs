mod common;
mod feed;
mod history;
mod service;

pub use service::AuditQueryService;
