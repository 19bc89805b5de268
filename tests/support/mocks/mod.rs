// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod audit_repo;
pub mod security;
pub mod time;
pub mod user_repo;

/* -------------------------------- time -------------------------------- */
pub use time::{FixedClock, TickingClock, fixed_now};

/* ------------------------------ security ------------------------------ */
pub use security::{
    DummyPasswordHasher, DummyTokenManager, ADMIN_TOKEN, EXPIRED_TOKEN, STUDENT_TOKEN,
};

/* ---------------------------- repositories ---------------------------- */
pub use audit_repo::{FailingAuditRepo, InMemoryAuditRepo, SlowAuditRepo};
pub use user_repo::{FailingUserRepo, InMemoryUserRepo, SlowFirstLookupUserRepo};
