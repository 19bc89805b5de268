// src/presentation/http/controllers/logs.rs
use crate::application::dto::{AuditEventDto, SessionIntervalDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/logs",
    responses(
        (status = 200, description = "Every LOGIN/LOGOUT event, newest first.", body = [AuditEventDto]),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Caller lacks audit:read.", body = ErrorResponse)
    ),
    tag = "Logs"
)]
pub async fn audit_feed(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<Json<Vec<AuditEventDto>>> {
    state
        .services
        .audit_queries
        .audit_feed(&actor)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/logs/user/{user_id}",
    params(
        ("user_id" = i64, Path, description = "Account whose sessions are reconstructed.")
    ),
    responses(
        (status = 200, description = "Login/logout pairs, oldest first.", body = [SessionIntervalDto]),
        (status = 400, description = "Invalid user id.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Not the caller's own history and caller lacks audit:read.", body = ErrorResponse)
    ),
    tag = "Logs"
)]
pub async fn user_session_history(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(user_id): Path<i64>,
) -> HttpResult<Json<Vec<SessionIntervalDto>>> {
    state
        .services
        .audit_queries
        .user_session_history(&actor, user_id)
        .await
        .into_http()
        .map(Json)
}
