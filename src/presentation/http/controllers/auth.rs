// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::{AuthTokenDto, UserDto, UserProfileDto},
    error::ApplicationError,
};
use crate::domain::user::Role;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ClientContext, MaybeAuthenticated};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// `admin`, `instructor` or `student`; defaults to `student`.
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created.", body = UserDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 403, description = "Caller may not create accounts.", body = ErrorResponse),
        (status = 409, description = "Username or email taken.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<Json<UserDto>> {
    let role = payload
        .role
        .as_deref()
        .map(str::parse::<Role>)
        .transpose()
        .map_err(ApplicationError::from)
        .into_http()?;

    let command = RegisterUserCommand {
        username: payload.username,
        email: payload.email,
        password: payload.password,
        role,
    };

    state
        .services
        .user_commands
        .register(actor.0.as_ref(), command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    params(
        ("X-Device-Time" = Option<String>, Header, description = "Client clock, RFC 3339 or epoch milliseconds.")
    ),
    responses(
        (status = 200, description = "Credentials accepted.", body = LoginResponse),
        (status = 401, description = "Invalid credentials.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    ClientContext(context): ClientContext,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginUserCommand {
        username: payload.username,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command, &context)
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        token: result.token,
        user: result.user,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    params(
        ("X-Device-Time" = Option<String>, Header, description = "Client clock, RFC 3339 or epoch milliseconds.")
    ),
    responses(
        (status = 200, description = "Logout recorded.", body = StatusResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ClientContext(context): ClientContext,
) -> Json<StatusResponse> {
    state.services.user_commands.logout(&user, &context).await;

    Json(StatusResponse {
        status: "logged_out".into(),
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Profile of the bearer.", body = UserProfileDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserProfileDto>> {
    state
        .services
        .user_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}
