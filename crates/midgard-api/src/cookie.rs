//! Session cookie construction.

use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use midgard_auth::session::SessionToken;
use midgard_core::config::SessionConfig;

/// Cookie carrying a freshly issued session token.
///
/// `HttpOnly`, `SameSite=Lax`, `Path=/`, with `Max-Age` equal to the
/// session lifetime.
pub fn session_cookie(
    config: &SessionConfig,
    ttl: chrono::Duration,
    token: &SessionToken,
) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token.as_str().to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(config.cookie_secure)
        .max_age(time::Duration::seconds(ttl.num_seconds()))
        .build()
}

/// Cookie matching the session cookie's name and path, for removal.
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), ""))
        .path("/")
        .build()
}

/// Token presented by the client, if any.
pub fn token_from_jar(jar: &CookieJar, config: &SessionConfig) -> Option<SessionToken> {
    jar.get(&config.cookie_name)
        .map(|c| c.value())
        .filter(|v| !v.is_empty())
        .map(SessionToken::from_cookie)
}

/// Token presented in the `Cookie` header, if any.
pub fn token_from_headers(headers: &HeaderMap, config: &SessionConfig) -> Option<SessionToken> {
    token_from_jar(&CookieJar::from_headers(headers), config)
}
