//! Session extractors: resolve the cookie and apply the access guards
//! before the handler body runs.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use midgard_auth::guard::{require_admin, require_authenticated};
use midgard_entity::session::Session;
use midgard_service::RequestContext;

use crate::cookie::token_from_headers;
use crate::error::ApiError;
use crate::state::AppState;

use super::client_ip::client_ip;

async fn resolve_session(parts: &Parts, state: &AppState) -> Option<Session> {
    let token = token_from_headers(&parts.headers, &state.config.session)?;
    state.sessions.resolve(&token).await
}

/// The live session, if the request carries one.
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<Session>);

impl FromRequestParts<AppState> for MaybeSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeSession(resolve_session(parts, state).await))
    }
}

/// Any authenticated account.
#[derive(Debug, Clone)]
pub struct SessionUser(pub RequestContext);

impl std::ops::Deref for SessionUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = require_authenticated(resolve_session(parts, state).await)?;
        let ip = client_ip(parts, &state.config.server);
        Ok(SessionUser(RequestContext::from_session(&session, ip)))
    }
}

/// An authenticated administrator.
#[derive(Debug, Clone)]
pub struct AdminUser(pub RequestContext);

impl std::ops::Deref for AdminUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = require_admin(resolve_session(parts, state).await)?;
        let ip = client_ip(parts, &state.config.server);
        Ok(AdminUser(RequestContext::from_session(&session, ip)))
    }
}
