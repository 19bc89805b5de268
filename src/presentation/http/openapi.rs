// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::logs::audit_feed,
        crate::presentation::http::controllers::logs::user_session_history,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::AuditEventDto,
            crate::application::dto::SessionIntervalDto
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and logout"),
        (name = "Logs", description = "Audit feed and session history"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Attendance Audit API",
        description = "Login/logout audit trail and session history",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

/// The generated document with `public_url` as its only server.
pub fn api_doc(public_url: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(public_url)]);
    doc
}

pub fn docs_router(public_url: &str) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, api_doc(public_url)))
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(path: &Path, public_url: &str) -> std::io::Result<()> {
    let doc = api_doc(public_url);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}
