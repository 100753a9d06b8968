//! Auth handlers: register, login, logout, check.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::CookieJar;

use crate::cookie::{removal_cookie, session_cookie, token_from_jar};
use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{
    CheckResponse, LoggedInUser, LoginResponse, MessageResponse, RegisterResponse, RegisteredUser,
};
use crate::error::ApiError;
use crate::extractors::{ClientIp, JsonBody, MaybeSession};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    jar: CookieJar,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<(CookieJar, Json<RegisterResponse>), ApiError> {
    let previous = token_from_jar(&jar, &state.config.session);
    let (account, token) = state
        .account_service
        .register(req.into(), &ip, previous.as_ref())
        .await?;

    let jar = jar.add(session_cookie(
        &state.config.session,
        state.sessions.ttl(),
        &token,
    ));

    Ok((
        jar,
        Json(RegisterResponse {
            success: true,
            message: "Account created".to_string(),
            user: RegisteredUser {
                id: account.account_id,
                username: account.userid,
                email: account.email,
            },
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    jar: CookieJar,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    let previous = token_from_jar(&jar, &state.config.session);
    let (account, token) = state
        .account_service
        .login(req.into(), &ip, previous.as_ref())
        .await?;

    let jar = jar.add(session_cookie(
        &state.config.session,
        state.sessions.ttl(),
        &token,
    ));

    Ok((
        jar,
        Json(LoginResponse {
            success: true,
            message: "Login successful".to_string(),
            user: LoggedInUser::from(&account),
        }),
    ))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), ApiError> {
    let token = token_from_jar(&jar, &state.config.session);
    state.account_service.logout(token.as_ref()).await?;

    let jar = jar.remove(removal_cookie(&state.config.session));
    Ok((jar, Json(MessageResponse::ok("Logged out"))))
}

/// GET /api/auth/check
pub async fn check(MaybeSession(session): MaybeSession) -> Json<CheckResponse> {
    Json(CheckResponse::from(session))
}
