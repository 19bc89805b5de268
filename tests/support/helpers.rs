// tests/support/helpers.rs
use super::mocks;
use attendance_audit::application::{
    commands::audit::AuditRecorder,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use attendance_audit::domain::{audit::AuditEventRepository, user::UserRepository};
use attendance_audit::infrastructure::security::token::BiscuitTokenManager;
use attendance_audit::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::StatusCode;
use axum::response::Response;
use chrono::FixedOffset;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_BISCUIT_KEY: &str =
    "7f3c9a1e5b2d4f6071829a3b4c5d6e7f808182838485868788898a8b8c8d8e8f";

pub fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).expect("utc")
}

pub fn build_services(
    user_repo: Arc<dyn UserRepository>,
    audit_repo: Arc<dyn AuditEventRepository>,
) -> Arc<ApplicationServices> {
    build_services_with_tokens(user_repo, audit_repo, Arc::new(mocks::DummyTokenManager))
}

pub fn build_services_with_tokens(
    user_repo: Arc<dyn UserRepository>,
    audit_repo: Arc<dyn AuditEventRepository>,
    token_manager: Arc<dyn TokenManager>,
) -> Arc<ApplicationServices> {
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(mocks::DummyPasswordHasher);
    let clock: Arc<dyn Clock> = Arc::new(mocks::TickingClock::default());

    Arc::new(ApplicationServices::new(
        user_repo,
        audit_repo,
        password_hasher,
        token_manager,
        clock,
        utc(),
    ))
}

pub fn recorder(
    audit_repo: Arc<dyn AuditEventRepository>,
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
) -> AuditRecorder {
    AuditRecorder::new(audit_repo, user_repo, clock, utc())
}

pub fn make_test_router_with(
    user_repo: Arc<dyn UserRepository>,
    audit_repo: Arc<dyn AuditEventRepository>,
) -> axum::Router {
    build_router(HttpState {
        services: build_services(user_repo, audit_repo),
    })
}

/// Router backed by real Biscuit tokens instead of the fixed test tokens.
pub fn make_biscuit_router_with(
    user_repo: Arc<dyn UserRepository>,
    audit_repo: Arc<dyn AuditEventRepository>,
) -> axum::Router {
    let tokens = BiscuitTokenManager::new(TEST_BISCUIT_KEY, Duration::from_secs(600))
        .expect("biscuit key");
    build_router(HttpState {
        services: build_services_with_tokens(user_repo, audit_repo, Arc::new(tokens)),
    })
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with(
        Arc::new(mocks::InMemoryUserRepo::default()),
        Arc::new(mocks::InMemoryAuditRepo::default()),
    )
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub async fn assert_error_response(resp: Response<Body>, expected_status: StatusCode) -> Value {
    assert_eq!(resp.status(), expected_status);
    let value = json_body(resp).await;
    assert_eq!(
        value["error"].as_str(),
        expected_status.canonical_reason(),
        "unexpected error body: {value}"
    );
    assert!(value["message"].is_string(), "missing message: {value}");
    value
}
