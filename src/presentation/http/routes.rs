// src/presentation/http/routes.rs
use crate::config::DEFAULT_PUBLIC_API_URL;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, logs},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState) -> Router {
    build_configured_router(state, &[], DEFAULT_PUBLIC_API_URL)
}

/// An empty origin list allows any origin. `public_api_url` is the server
/// advertised by the OpenAPI document.
pub fn build_configured_router(
    state: HttpState,
    allowed_origins: &[String],
    public_api_url: &str,
) -> Router {
    Router::new()
        .merge(openapi::docs_router(public_api_url))
        .route("/health", get(health))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::profile))
        .route("/api/v1/logs", get(logs::audit_feed))
        .route(
            "/api/v1/logs/user/{user_id}",
            get(logs::user_session_history),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
