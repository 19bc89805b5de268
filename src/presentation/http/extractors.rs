// src/presentation/http/extractors.rs
use crate::{
    application::{
        commands::audit::RequestContext, dto::AuthenticatedUser, error::ApplicationError,
    },
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, header::USER_AGENT, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use std::{convert::Infallible, net::SocketAddr};

use super::error::HttpError;

pub const DEVICE_TIME_HEADER: &str = "x-device-time";
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

/// Device clock, client address and user agent of the current request.
#[derive(Debug, Clone)]
pub struct ClientContext(pub RequestContext);

async fn app_state<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure("application state missing"))
        })?;
    Ok(app_state)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        let user = app_state
            .services
            .authenticate(header.token())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;

        match parts.headers.typed_get::<Authorization<Bearer>>() {
            Some(header) => {
                let user = app_state
                    .services
                    .authenticate(header.token())
                    .await
                    .map_err(HttpError::from_error)?;
                Ok(Self(Some(user)))
            }
            None => Ok(Self(None)),
        }
    }
}

impl<S> FromRequestParts<S> for ClientContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        Ok(Self(client_context(&parts.headers, peer)))
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: impl axum::http::header::AsHeaderName) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn client_context(headers: &HeaderMap, peer: Option<String>) -> RequestContext {
    let forwarded = header_str(headers, FORWARDED_FOR_HEADER)
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|hop| !hop.is_empty())
        .map(str::to_string);

    RequestContext {
        device_time: header_str(headers, DEVICE_TIME_HEADER).map(str::to_string),
        source_address: forwarded.or(peer),
        agent: header_str(headers, USER_AGENT).map(str::to_string),
    }
}
